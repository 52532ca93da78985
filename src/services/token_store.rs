// ============================================================================
// TOKEN STORE - Persistencia del token y del usuario en localStorage
// ============================================================================

use gloo_storage::{LocalStorage, Storage};
use crate::config::CONFIG;
use crate::error::ClientError;
use crate::models::User;

/// Estado de autenticación que sobrevive a recargas de página
pub trait TokenStore {
    fn token(&self) -> Option<String>;

    fn save_token(&self, token: &str) -> Result<(), ClientError>;

    /// Usuario guardado junto al token para poder restaurar la sesión al arrancar
    fn user(&self) -> Option<User>;

    fn save_user(&self, user: &User) -> Result<(), ClientError>;

    /// Borra token y usuario. No falla: si no hay storage no hay nada que borrar.
    fn clear(&self);
}

/// Implementación sobre `window.localStorage`
#[derive(Clone)]
pub struct LocalTokenStore {
    token_key: String,
    user_key: String,
}

impl LocalTokenStore {
    pub fn new() -> Self {
        Self {
            token_key: CONFIG.token_storage_key.clone(),
            user_key: CONFIG.session_storage_key.clone(),
        }
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalTokenStore {
    // El token va tal cual (`setItem('token', t)`), sin pasar por JSON
    fn token(&self) -> Option<String> {
        let stored = LocalStorage::raw().get_item(&self.token_key).ok().flatten();
        parse_stored_token(stored)
    }

    fn save_token(&self, token: &str) -> Result<(), ClientError> {
        LocalStorage::raw()
            .set_item(&self.token_key, token)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))?;
        log::info!("💾 Token guardado");
        Ok(())
    }

    fn user(&self) -> Option<User> {
        LocalStorage::get::<User>(&self.user_key).ok()
    }

    fn save_user(&self, user: &User) -> Result<(), ClientError> {
        LocalStorage::set(&self.user_key, user).map_err(|e| ClientError::Storage(e.to_string()))
    }

    fn clear(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(&self.token_key) {
            log::warn!("⚠️ No se pudo borrar el token: {:?}", e);
        }
        LocalStorage::delete(&self.user_key);
        log::info!("🗑️ Token y usuario eliminados de localStorage");
    }
}

/// Valor crudo de localStorage -> token. Vacío cuenta como ausente.
/// Acepta también el formato entre comillas que escribían builds anteriores.
fn parse_stored_token(stored: Option<String>) -> Option<String> {
    let raw = stored?;
    let token = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(&raw);
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
