// ============================================================================
// AUTH STATE - Máquina de estados de la UI de autenticación
// ============================================================================
// Unauthenticated   --show_login-->  ShowingLoginForm
// Unauthenticated   --show_signup--> ShowingSignupForm
// ShowingLoginForm  --login ok-->    Authenticated
// ShowingSignupForm --signup ok-->   ShowingLoginForm
// Authenticated     --logout-->      Unauthenticated
//
// Entre los dos formularios se puede alternar libremente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Unauthenticated,
    ShowingLoginForm,
    ShowingSignupForm,
    Authenticated,
}

impl AuthView {
    pub fn show_login(self) -> Self {
        match self {
            Self::Authenticated => self,
            _ => Self::ShowingLoginForm,
        }
    }

    pub fn show_signup(self) -> Self {
        match self {
            Self::Authenticated => self,
            _ => Self::ShowingSignupForm,
        }
    }

    pub fn login_succeeded(self) -> Self {
        Self::Authenticated
    }

    /// Tras registrarse el usuario pasa al formulario de login
    pub fn signup_succeeded(self) -> Self {
        match self {
            Self::Authenticated => self,
            _ => Self::ShowingLoginForm,
        }
    }

    pub fn logged_out(self) -> Self {
        Self::Unauthenticated
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl Default for AuthView {
    fn default() -> Self {
        Self::Unauthenticated
    }
}

/// Estado de autenticación compartido
#[derive(Clone)]
pub struct AuthState {
    pub view: Rc<RefCell<AuthView>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            view: Rc::new(RefCell::new(AuthView::default())),
        }
    }

    pub fn get_view(&self) -> AuthView {
        *self.view.borrow()
    }

    /// Aplica una transición y devuelve el nuevo estado
    pub fn transition(&self, step: impl FnOnce(AuthView) -> AuthView) -> AuthView {
        let mut view = self.view.borrow_mut();
        *view = step(*view);
        *view
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
