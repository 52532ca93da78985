use serde::{Deserialize, Serialize};

/// Cuerpo de `/upload-url`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    pub file_name: String,
    pub file_type: String,
}

/// Destino presignado: se usa una sola vez
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadTarget {
    pub upload_url: String,
    pub image_url: String,
}

/// Imagen seleccionada por el usuario, ya leída a memoria
#[derive(Clone, PartialEq, Debug)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn upload_request(&self) -> UploadUrlRequest {
        UploadUrlRequest {
            file_name: self.name.clone(),
            file_type: self.content_type.clone(),
        }
    }
}
