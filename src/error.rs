// ============================================================================
// ERRORES DEL CLIENTE
// ============================================================================

use thiserror::Error;

/// Mensaje genérico que ve el usuario cuando falla la subida de imagen
pub const UPLOAD_FAILED_MESSAGE: &str = "Image upload failed";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Precondición local (contraseñas distintas, sin sesión...). Nunca llega a red.
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Server { status: u16, message: Option<String> },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("Storage error: {0}")]
    Storage(String),
    /// La causa se conserva para los logs; el usuario solo ve el mensaje genérico
    #[error("Image upload failed")]
    UploadFailed { cause: String },
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Texto del banner de error para este fallo
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Server { message: Some(message), .. } if !message.is_empty() => message.clone(),
            Self::UploadFailed { .. } => UPLOAD_FAILED_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ClientError::Server {
            status: 401,
            message: Some("Incorrect username or password".to_string()),
        };
        assert_eq!(err.user_message("Login failed"), "Incorrect username or password");
    }

    #[test]
    fn transport_and_bare_status_use_fallback() {
        let network = ClientError::Network("TypeError: Failed to fetch".to_string());
        let bare = ClientError::Server { status: 500, message: None };
        let empty = ClientError::Server { status: 400, message: Some(String::new()) };
        assert_eq!(network.user_message("Login failed"), "Login failed");
        assert_eq!(bare.user_message("Login failed"), "Login failed");
        assert_eq!(empty.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn upload_failure_hides_cause() {
        let err = ClientError::UploadFailed { cause: "HTTP 403: SignatureDoesNotMatch".to_string() };
        assert_eq!(err.user_message("Failed to book appointment"), UPLOAD_FAILED_MESSAGE);
        assert_eq!(err.to_string(), UPLOAD_FAILED_MESSAGE);
    }
}
