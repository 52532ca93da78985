// ============================================================================
// UPLOAD SERVICE - Subida de imagen en dos pasos (URL presignada + PUT)
// ============================================================================

use crate::error::ClientError;
use crate::models::ImageFile;
use crate::services::BookingApi;

/// Pide un destino presignado y sube la imagen directamente a él.
/// Devuelve la URL pública de la imagen.
///
/// Cualquier fallo de cualquiera de los dos pasos se reporta como
/// `ClientError::UploadFailed`; la causa queda en el error para los logs.
pub async fn upload_image<A>(api: &A, token: &str, file: &ImageFile) -> Result<String, ClientError>
where
    A: BookingApi + ?Sized,
{
    log::info!("📤 Subiendo imagen {} ({} bytes)", file.name, file.bytes.len());

    let target = api
        .request_upload_url(token, &file.upload_request())
        .await
        .map_err(|e| upload_failed("upload-url", e))?;

    api.put_file(&target.upload_url, file)
        .await
        .map_err(|e| upload_failed("PUT", e))?;

    log::info!("✅ Imagen subida: {}", target.image_url);
    Ok(target.image_url)
}

fn upload_failed(step: &str, cause: ClientError) -> ClientError {
    log::error!("❌ Subida de imagen falló en {}: {}", step, cause);
    ClientError::UploadFailed {
        cause: cause.to_string(),
    }
}
