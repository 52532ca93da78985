// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use crate::error::ClientError;
use crate::models::{Appointment, User};
use crate::state::{AuthState, AuthView, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Notificación pendiente de mostrar. La vista la consume y la retira sola.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// Envíos que no admiten un segundo intento mientras el primero está en vuelo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PendingAction {
    Login,
    Signup,
    Booking,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub auth: AuthState,

    pub appointments: Rc<RefCell<Vec<Appointment>>>,
    pub banners: Rc<RefCell<Vec<Banner>>>,
    pub pending: Rc<RefCell<HashSet<PendingAction>>>,
    pub reset_booking_form: Rc<RefCell<bool>>,

    // Reactivity: Callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            auth: AuthState::new(),
            appointments: Rc::new(RefCell::new(Vec::new())),
            banners: Rc::new(RefCell::new(Vec::new())),
            pending: Rc::new(RefCell::new(HashSet::new())),
            reset_booking_form: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    // ------------------------------------------------------------------
    // Sesión: sesión y vista de auth cambian siempre juntas
    // ------------------------------------------------------------------

    pub fn sign_in(&self, user: User) {
        self.session.set_user(Some(user));
        self.auth.transition(AuthView::login_succeeded);
    }

    pub fn sign_out(&self) {
        self.session.clear();
        self.auth.transition(AuthView::logged_out);
        self.appointments.borrow_mut().clear();
    }

    // ------------------------------------------------------------------
    // Citas
    // ------------------------------------------------------------------

    pub fn set_appointments(&self, appointments: Vec<Appointment>) {
        *self.appointments.borrow_mut() = appointments;
    }

    pub fn get_appointments(&self) -> Vec<Appointment> {
        self.appointments.borrow().clone()
    }

    /// Pide a la vista que vacíe el formulario de reserva en el próximo render
    pub fn request_booking_form_reset(&self) {
        *self.reset_booking_form.borrow_mut() = true;
    }

    pub fn take_booking_form_reset(&self) -> bool {
        std::mem::replace(&mut *self.reset_booking_form.borrow_mut(), false)
    }

    // ------------------------------------------------------------------
    // Banners
    // ------------------------------------------------------------------

    pub fn show_success(&self, message: impl Into<String>) {
        self.push_banner(BannerKind::Success, message.into());
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.push_banner(BannerKind::Error, message.into());
    }

    /// Único camino de error hacia la UI: validación local, red y servidor
    /// acaban todos en el mismo banner.
    pub fn show_client_error(&self, error: &ClientError, fallback: &str) {
        self.show_error(error.user_message(fallback));
    }

    fn push_banner(&self, kind: BannerKind, message: String) {
        match kind {
            BannerKind::Success => log::info!("✅ {}", message),
            BannerKind::Error => log::warn!("⚠️ {}", message),
        }
        self.banners.borrow_mut().push(Banner { kind, message });
    }

    /// Saca los banners pendientes (en orden de llegada)
    pub fn take_banners(&self) -> Vec<Banner> {
        std::mem::take(&mut *self.banners.borrow_mut())
    }

    // ------------------------------------------------------------------
    // Envíos en vuelo
    // ------------------------------------------------------------------

    /// Marca la acción como en vuelo. `false` si ya lo estaba.
    pub fn try_begin(&self, action: PendingAction) -> bool {
        self.pending.borrow_mut().insert(action)
    }

    pub fn finish(&self, action: PendingAction) {
        self.pending.borrow_mut().remove(&action);
    }

    pub fn is_pending(&self, action: PendingAction) -> bool {
        self.pending.borrow().contains(&action)
    }

    // ------------------------------------------------------------------
    // Reactividad
    // ------------------------------------------------------------------

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
