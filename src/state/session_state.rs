// ============================================================================
// SESSION STATE - Usuario actual (None = no autenticado)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::User;

/// Estado de sesión. Solo en memoria: lo persistente es el `TokenStore`.
#[derive(Clone)]
pub struct SessionState {
    pub user: Rc<RefCell<Option<User>>>,
    // Cambia con cada login/logout; las respuestas de otra generación se descartan
    generation: Rc<Cell<u64>>,
}

impl SessionState {
    /// Crear nuevo estado de sesión
    pub fn new() -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Establecer usuario
    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
        self.generation.set(self.generation.get() + 1);
    }

    /// Generación de la sesión actual
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Obtener usuario
    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Email del usuario actual
    pub fn email(&self) -> Option<String> {
        self.user.borrow().as_ref().map(|u| u.email.clone())
    }

    pub fn clear(&self) {
        self.set_user(None);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
