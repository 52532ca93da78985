// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================
// Los valores vienen de variables de entorno (build.rs las inyecta desde .env)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
    pub session_storage_key: String,
    pub banner_timeout_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            token_storage_key: "token".to_string(),
            session_storage_key: "currentUser".to_string(),
            banner_timeout_ms: 5000,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("TOKEN_STORAGE_KEY"),
            option_env!("SESSION_STORAGE_KEY"),
            option_env!("BANNER_TIMEOUT_MS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Construye la configuración a partir de valores crudos.
    /// Cualquier valor ausente o inválido cae al default.
    pub fn from_values(
        api_base_url: Option<&str>,
        token_storage_key: Option<&str>,
        session_storage_key: Option<&str>,
        banner_timeout_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            token_storage_key: token_storage_key
                .map(|s| s.to_string())
                .unwrap_or(defaults.token_storage_key),
            session_storage_key: session_storage_key
                .map(|s| s.to_string())
                .unwrap_or(defaults.session_storage_key),
            banner_timeout_ms: banner_timeout_ms
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.banner_timeout_ms),
            enable_logging: enable_logging
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// URL completa de un endpoint del API
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
