// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Los viewmodels dependen del trait `BookingApi`, no de `ApiClient`.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use crate::config::CONFIG;
use crate::error::ClientError;
use crate::models::{
    Appointment, Credentials, ErrorBody, ImageFile, LoginResponse, NewAppointment, UploadTarget,
    UploadUrlRequest,
};

/// Contrato con el backend. Cada método es un único intercambio request/response.
#[async_trait(?Send)]
pub trait BookingApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError>;

    async fn signup(&self, credentials: &Credentials) -> Result<(), ClientError>;

    async fn logout(&self, token: Option<&str>) -> Result<(), ClientError>;

    async fn create_appointment(
        &self,
        token: &str,
        appointment: &NewAppointment,
    ) -> Result<(), ClientError>;

    async fn list_appointments(&self, token: &str) -> Result<Vec<Appointment>, ClientError>;

    async fn request_upload_url(
        &self,
        token: &str,
        request: &UploadUrlRequest,
    ) -> Result<UploadTarget, ClientError>;

    /// PUT directo al destino presignado, sin pasar por el API
    async fn put_file(&self, upload_url: &str, file: &ImageFile) -> Result<(), ClientError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", token)
    }

    async fn send(request: Request) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::check(response).await
    }

    /// Para peticiones sin cuerpo
    fn build(builder: RequestBuilder) -> Result<Request, ClientError> {
        builder.build().map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Convierte un status no-2xx en `ClientError::Server` con el campo `error` del cuerpo
    async fn check(response: Response) -> Result<Response, ClientError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        log::warn!("⚠️ HTTP {} {}: {:?}", status, response.status_text(), message);
        Err(ClientError::Server { status, message })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl BookingApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        log::info!("🔐 Login para: {}", credentials.email);

        let request = Request::post(&self.url("/auth/login"))
            .json(credentials)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let response = Self::send(request).await?;

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), ClientError> {
        log::info!("📝 Registro para: {}", credentials.email);

        let request = Request::post(&self.url("/auth/signup"))
            .header("Accept", "application/json")
            .json(credentials)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Self::send(request).await?;
        Ok(())
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), ClientError> {
        let mut builder = Request::post(&self.url("/auth/logout"));
        if let Some(token) = token {
            builder = Self::authorized(builder, token);
        }
        Self::send(Self::build(builder)?).await?;
        Ok(())
    }

    async fn create_appointment(
        &self,
        token: &str,
        appointment: &NewAppointment,
    ) -> Result<(), ClientError> {
        log::info!(
            "📅 Reservando {} para {} {}",
            appointment.service_type, appointment.date, appointment.time
        );

        let request = Self::authorized(Request::post(&self.url("/appointments")), token)
            .json(appointment)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Self::send(request).await?;
        Ok(())
    }

    async fn list_appointments(&self, token: &str) -> Result<Vec<Appointment>, ClientError> {
        let builder = Self::authorized(Request::get(&self.url("/appointments")), token);
        let response = Self::send(Self::build(builder)?).await?;

        let appointments = response
            .json::<Vec<Appointment>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        log::info!("✅ {} citas recibidas", appointments.len());
        Ok(appointments)
    }

    async fn request_upload_url(
        &self,
        token: &str,
        request: &UploadUrlRequest,
    ) -> Result<UploadTarget, ClientError> {
        let request = Self::authorized(Request::post(&self.url("/upload-url")), token)
            .json(request)
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let response = Self::send(request).await?;

        response
            .json::<UploadTarget>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn put_file(&self, upload_url: &str, file: &ImageFile) -> Result<(), ClientError> {
        let body = js_sys::Uint8Array::from(file.bytes.as_slice());
        let request = Request::put(upload_url)
            .header("Content-Type", &file.content_type)
            .body(body)
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::send(request).await?;
        Ok(())
    }
}
