// ============================================================================
// AUTH VIEW - Visibilidad de regiones según la sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{require_element, set_text_content, set_visible_by_id};
use crate::state::{AppState, AuthView};

pub const USER_INFO_ID: &str = "user-info";
pub const AUTH_BUTTONS_ID: &str = "auth-buttons";
pub const AUTH_FORMS_ID: &str = "auth-forms";
pub const LOGIN_SECTION_ID: &str = "login-section";
pub const SIGNUP_SECTION_ID: &str = "signup-section";
pub const APPOINTMENTS_LIST_ID: &str = "appointments-list";
pub const USER_EMAIL_ID: &str = "user-email";

/// Qué regiones se ven. Función pura del estado: aplicarla dos veces no cambia nada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthLayout {
    pub user_info: bool,
    pub auth_buttons: bool,
    pub auth_forms: bool,
    pub login_section: bool,
    pub signup_section: bool,
    pub appointments_list: bool,
    pub email: Option<String>,
}

impl AuthLayout {
    pub fn from_state(state: &AppState) -> Self {
        // La presencia de usuario manda; la vista de auth solo elige formulario
        if let Some(email) = state.session.email() {
            return Self {
                user_info: true,
                auth_buttons: false,
                auth_forms: false,
                login_section: false,
                signup_section: false,
                appointments_list: !state.appointments.borrow().is_empty(),
                email: Some(email),
            };
        }

        let (login_section, signup_section) = match state.auth.get_view() {
            AuthView::ShowingLoginForm => (true, false),
            AuthView::ShowingSignupForm => (false, true),
            AuthView::Unauthenticated | AuthView::Authenticated => (false, false),
        };
        Self {
            user_info: false,
            auth_buttons: true,
            auth_forms: login_section || signup_section,
            login_section,
            signup_section,
            appointments_list: false,
            email: None,
        }
    }
}

/// Aplica el layout al DOM
pub fn render_auth_state(state: &AppState) -> Result<(), JsValue> {
    let layout = AuthLayout::from_state(state);

    set_visible_by_id(USER_INFO_ID, layout.user_info)?;
    set_visible_by_id(AUTH_BUTTONS_ID, layout.auth_buttons)?;
    set_visible_by_id(AUTH_FORMS_ID, layout.auth_forms)?;
    set_visible_by_id(LOGIN_SECTION_ID, layout.login_section)?;
    set_visible_by_id(SIGNUP_SECTION_ID, layout.signup_section)?;
    set_visible_by_id(APPOINTMENTS_LIST_ID, layout.appointments_list)?;
    set_text_content(&require_element(USER_EMAIL_ID)?, layout.email.as_deref().unwrap_or(""));
    Ok(())
}
