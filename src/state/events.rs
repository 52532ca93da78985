// ============================================================================
// EVENTS - Acciones del usuario, ya extraídas del DOM
// ============================================================================

use crate::models::{AppointmentForm, ImageFile};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ShowLogin,
    ShowSignup,
    Logout,
    LoginSubmitted {
        email: String,
        password: String,
    },
    SignupSubmitted {
        email: String,
        password: String,
        confirm_password: String,
    },
    AppointmentSubmitted {
        form: AppointmentForm,
        image: Option<ImageFile>,
    },
    RefreshAppointments,
}
