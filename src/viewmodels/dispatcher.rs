// ============================================================================
// DISPATCHER - Enruta AppEvent a los viewmodels
// ============================================================================
// La vista solo construye eventos; todo lo que sigue (red, estado, banners)
// pasa por aquí. Al terminar cada evento se notifica a los subscribers.
// ============================================================================

use std::rc::Rc;
use crate::services::{BookingApi, TokenStore};
use crate::state::{AppEvent, AppState};
use crate::viewmodels::{AppointmentViewModel, AuthViewModel};

pub struct Dispatcher<A, S> {
    state: AppState,
    auth: AuthViewModel<A, S>,
    appointments: AppointmentViewModel<A, S>,
}

impl<A, S> Dispatcher<A, S>
where
    A: BookingApi,
    S: TokenStore,
{
    pub fn new(state: AppState, api: Rc<A>, store: Rc<S>) -> Self {
        Self {
            auth: AuthViewModel::new(state.clone(), api.clone(), store.clone()),
            appointments: AppointmentViewModel::new(state.clone(), api, store),
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Arranque: restaura la sesión guardada y, si la hay, carga las citas
    pub async fn start(&self) {
        if self.auth.restore_session() {
            self.state.notify_subscribers();
            self.appointments.load().await;
        }
        self.state.notify_subscribers();
    }

    pub async fn dispatch(&self, event: AppEvent) {
        log::debug!("📨 Evento: {}", event_name(&event));

        match event {
            AppEvent::ShowLogin => self.auth.show_login(),
            AppEvent::ShowSignup => self.auth.show_signup(),
            AppEvent::Logout => self.auth.logout().await,
            AppEvent::LoginSubmitted { email, password } => {
                if self.auth.login(email, password).await {
                    // Mostrar ya el estado autenticado mientras llega la lista
                    self.state.notify_subscribers();
                    self.appointments.load().await;
                }
            }
            AppEvent::SignupSubmitted { email, password, confirm_password } => {
                self.auth.signup(email, password, confirm_password).await;
            }
            AppEvent::AppointmentSubmitted { form, image } => {
                if self.appointments.submit(form, image).await {
                    self.appointments.load().await;
                }
            }
            AppEvent::RefreshAppointments => self.appointments.load().await,
        }

        self.state.notify_subscribers();
    }
}

// Las contraseñas no deben acabar en la consola
fn event_name(event: &AppEvent) -> &'static str {
    match event {
        AppEvent::ShowLogin => "ShowLogin",
        AppEvent::ShowSignup => "ShowSignup",
        AppEvent::Logout => "Logout",
        AppEvent::LoginSubmitted { .. } => "LoginSubmitted",
        AppEvent::SignupSubmitted { .. } => "SignupSubmitted",
        AppEvent::AppointmentSubmitted { .. } => "AppointmentSubmitted",
        AppEvent::RefreshAppointments => "RefreshAppointments",
    }
}
