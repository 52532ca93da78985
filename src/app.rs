// ============================================================================
// APP - Arranque y cableado DOM -> eventos -> dispatcher
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::dom::{form_by_id, on_click, on_submit, read_image, require_element, selected_file, FormValues};
use crate::error::UPLOAD_FAILED_MESSAGE;
use crate::models::AppointmentForm;
use crate::services::{ApiClient, LocalTokenStore};
use crate::state::{AppEvent, AppState};
use crate::viewmodels::Dispatcher;
use crate::views::{render_app, APPOINTMENT_FORM_ID};

type AppDispatcher = Dispatcher<ApiClient, LocalTokenStore>;

const LOGIN_FORM_ID: &str = "login-form";
const SIGNUP_FORM_ID: &str = "signup-form";
const CAR_IMAGE_INPUT_ID: &str = "car-image";

/// Aplicación principal
pub struct App {
    state: AppState,
    dispatcher: Rc<AppDispatcher>,
}

impl App {
    /// Crear nueva aplicación y registrar listeners
    pub fn new() -> Result<Self, JsValue> {
        let state = AppState::new();
        let dispatcher = Rc::new(Dispatcher::new(
            state.clone(),
            Rc::new(ApiClient::new()),
            Rc::new(LocalTokenStore::new()),
        ));

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        {
            let state_clone = state.clone();
            let scheduler = RenderScheduler::default();
            state.subscribe_to_changes(move || {
                if !scheduler.request() {
                    return;
                }
                // Timeout 0: los notify que lleguen antes comparten este render
                let state_clone = state_clone.clone();
                let scheduler = scheduler.clone();
                Timeout::new(0, move || {
                    scheduler.done();
                    if let Err(e) = render_app(&state_clone) {
                        log::error!("❌ Error renderizando: {:?}", e);
                    }
                })
                .forget();
            });
        }

        let app = Self { state, dispatcher };
        app.bind_events()?;
        Ok(app)
    }

    /// Primer render y restauración de sesión
    pub fn start(&self) -> Result<(), JsValue> {
        render_app(&self.state)?;
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            dispatcher.start().await;
        });
        Ok(())
    }

    fn emit(&self, event: AppEvent) {
        emit(&self.dispatcher, event);
    }

    fn bind_events(&self) -> Result<(), JsValue> {
        for (button_id, event) in [
            ("login-btn", AppEvent::ShowLogin),
            ("signup-btn", AppEvent::ShowSignup),
            ("logout-btn", AppEvent::Logout),
        ] {
            let dispatcher = self.dispatcher.clone();
            on_click(&require_element(button_id)?, move |_| emit(&dispatcher, event.clone()))?;
        }

        {
            let dispatcher = self.dispatcher.clone();
            let form = form_by_id(LOGIN_FORM_ID)?;
            let form_clone = form.clone();
            on_submit(&form, move || match FormValues::read(&form_clone) {
                Ok(values) => emit(
                    &dispatcher,
                    AppEvent::LoginSubmitted {
                        email: values.text("email"),
                        password: values.text("password"),
                    },
                ),
                Err(e) => log::error!("❌ No se pudo leer el formulario de login: {:?}", e),
            })?;
        }

        {
            let dispatcher = self.dispatcher.clone();
            let form = form_by_id(SIGNUP_FORM_ID)?;
            let form_clone = form.clone();
            on_submit(&form, move || match FormValues::read(&form_clone) {
                Ok(values) => emit(
                    &dispatcher,
                    AppEvent::SignupSubmitted {
                        email: values.text("email"),
                        password: values.text("password"),
                        confirm_password: values.text("confirm-password"),
                    },
                ),
                Err(e) => log::error!("❌ No se pudo leer el formulario de registro: {:?}", e),
            })?;
        }

        {
            let dispatcher = self.dispatcher.clone();
            let form = form_by_id(APPOINTMENT_FORM_ID)?;
            let form_clone = form.clone();
            on_submit(&form, move || {
                let values = match FormValues::read(&form_clone) {
                    Ok(values) => values,
                    Err(e) => {
                        log::error!("❌ No se pudo leer el formulario de cita: {:?}", e);
                        return;
                    }
                };
                let form = AppointmentForm {
                    car_make: values.text("car-make"),
                    car_model: values.text("car-model"),
                    car_year: values.text("car-year"),
                    service_type: values.text("service-type"),
                    date: values.text("date"),
                    time: values.text("time"),
                    description: values.text("description"),
                    notify: values.checked("notification-preference"),
                };
                let file = selected_file(CAR_IMAGE_INPUT_ID).unwrap_or_else(|e| {
                    log::warn!("⚠️ Sin input de imagen: {:?}", e);
                    None
                });

                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    let image = match file {
                        Some(file) => match read_image(&file).await {
                            Ok(image) => Some(image),
                            Err(e) => {
                                log::error!("❌ No se pudo leer la imagen: {:?}", e);
                                let state = dispatcher.state();
                                state.show_error(UPLOAD_FAILED_MESSAGE);
                                state.notify_subscribers();
                                return;
                            }
                        },
                        None => None,
                    };
                    dispatcher
                        .dispatch(AppEvent::AppointmentSubmitted { form, image })
                        .await;
                });
            })?;
        }

        log::info!("🔗 Listeners registrados");
        Ok(())
    }

    /// Fuerza una recarga de la lista (llamable desde JavaScript vía `refresh_appointments`)
    pub fn refresh(&self) {
        self.emit(AppEvent::RefreshAppointments);
    }
}

/// Marca de render pendiente: como mucho un render programado a la vez
#[derive(Clone, Default)]
struct RenderScheduler {
    pending: Rc<Cell<bool>>,
}

impl RenderScheduler {
    /// `true` si hay que programar un render; `false` si ya hay uno en cola
    fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    fn done(&self) {
        self.pending.set(false);
    }
}

fn emit(dispatcher: &Rc<AppDispatcher>, event: AppEvent) {
    let dispatcher = dispatcher.clone();
    spawn_local(async move {
        dispatcher.dispatch(event).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_coalesce_until_render_runs() {
        let scheduler = RenderScheduler::default();
        assert!(scheduler.request());
        assert!(!scheduler.request());
        assert!(!scheduler.clone().request());

        scheduler.done();
        assert!(scheduler.request());
    }
}
