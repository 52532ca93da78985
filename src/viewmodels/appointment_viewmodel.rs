// ============================================================================
// APPOINTMENT VIEWMODEL - Reserva y listado de citas
// ============================================================================

use std::rc::Rc;
use crate::error::ClientError;
use crate::models::{AppointmentForm, ImageFile};
use crate::services::{upload_image, BookingApi, TokenStore};
use crate::state::{AppState, PendingAction};

pub const LOGIN_REQUIRED: &str = "Please login to book an appointment";
pub const BOOKING_SUCCESS: &str = "Appointment booked successfully!";
pub const BOOKING_FAILED: &str = "Failed to book appointment";
pub const LOAD_FAILED: &str = "Failed to load appointments";

pub struct AppointmentViewModel<A, S> {
    state: AppState,
    api: Rc<A>,
    store: Rc<S>,
}

impl<A, S> AppointmentViewModel<A, S>
where
    A: BookingApi,
    S: TokenStore,
{
    pub fn new(state: AppState, api: Rc<A>, store: Rc<S>) -> Self {
        Self { state, api, store }
    }

    /// Reserva una cita, subiendo antes la imagen si la hay.
    /// Devuelve `true` si el backend aceptó la reserva.
    pub async fn submit(&self, form: AppointmentForm, image: Option<ImageFile>) -> bool {
        let token = match (self.state.session.is_authenticated(), self.store.token()) {
            (true, Some(token)) => token,
            _ => {
                self.state
                    .show_client_error(&ClientError::validation(LOGIN_REQUIRED), BOOKING_FAILED);
                return false;
            }
        };
        if !self.state.try_begin(PendingAction::Booking) {
            log::warn!("⚠️ Reserva ya en curso, se ignora");
            return false;
        }

        let booked = self.book(&token, form, image).await;
        self.state.finish(PendingAction::Booking);
        booked
    }

    async fn book(&self, token: &str, form: AppointmentForm, image: Option<ImageFile>) -> bool {
        let image_url = match image {
            Some(file) => match upload_image(self.api.as_ref(), token, &file).await {
                Ok(url) => Some(url),
                Err(e) => {
                    self.state.show_client_error(&e, BOOKING_FAILED);
                    return false;
                }
            },
            None => None,
        };

        let payload = form.into_payload(image_url);
        match self.api.create_appointment(token, &payload).await {
            Ok(()) => {
                self.state.request_booking_form_reset();
                self.state.show_success(BOOKING_SUCCESS);
                true
            }
            Err(e) => {
                log::error!("❌ Reserva falló: {}", e);
                self.state.show_client_error(&e, BOOKING_FAILED);
                false
            }
        }
    }

    /// Recarga la lista completa. Sin sesión no hace nada.
    /// Si falla, la lista anterior se queda como estaba.
    pub async fn load(&self) {
        if !self.state.session.is_authenticated() {
            return;
        }
        let Some(token) = self.store.token() else {
            log::warn!("⚠️ Sesión sin token, no se pueden cargar citas");
            self.state.show_error(LOAD_FAILED);
            return;
        };

        let generation = self.state.session.generation();
        let result = self.api.list_appointments(&token).await;

        // Mientras esperábamos pudo haber logout o login de otro usuario
        if !self.is_current(generation, &token) {
            log::warn!("⚠️ Respuesta de citas de una sesión anterior, se descarta");
            return;
        }

        match result {
            Ok(appointments) => self.state.set_appointments(appointments),
            Err(e) => {
                // Aquí el mensaje es siempre genérico, aunque el servidor diga algo
                log::error!("❌ Error cargando citas: {}", e);
                self.state.show_error(LOAD_FAILED);
            }
        }
    }

    fn is_current(&self, generation: u64, token: &str) -> bool {
        self.state.session.generation() == generation
            && self.store.token().as_deref() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UPLOAD_FAILED_MESSAGE;
    use crate::models::User;
    use crate::services::testing::{sample_appointment, Call, FakeApi, MemoryTokenStore};
    use crate::state::BannerKind;
    use futures::executor::block_on;

    fn setup() -> (
        AppState,
        Rc<FakeApi>,
        Rc<MemoryTokenStore>,
        AppointmentViewModel<FakeApi, MemoryTokenStore>,
    ) {
        let state = AppState::new();
        let api = Rc::new(FakeApi::new());
        let store = Rc::new(MemoryTokenStore::new());
        let vm = AppointmentViewModel::new(state.clone(), api.clone(), store.clone());
        (state, api, store, vm)
    }

    fn signed_in(state: &AppState, store: &MemoryTokenStore) {
        store.save_token("t1").unwrap();
        state.sign_in(User::with_email("a@b.com"));
    }

    fn form() -> AppointmentForm {
        AppointmentForm {
            car_make: "Toyota".into(),
            car_model: "Corolla".into(),
            car_year: "2019".into(),
            service_type: "oil-change".into(),
            date: "2030-03-18".into(),
            time: "09:00".into(),
            description: String::new(),
            notify: true,
        }
    }

    fn photo() -> ImageFile {
        ImageFile {
            name: "car.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn submit_without_session_or_token_is_local_failure() {
        let (state, api, store, vm) = setup();
        assert!(!block_on(vm.submit(form(), None)));

        // sesión sin token
        state.sign_in(User::with_email("a@b.com"));
        assert!(!block_on(vm.submit(form(), None)));

        // token sin sesión
        state.sign_out();
        store.save_token("t1").unwrap();
        assert!(!block_on(vm.submit(form(), None)));

        assert!(api.calls().is_empty());
        let banners = state.take_banners();
        assert_eq!(banners.len(), 3);
        assert!(banners.iter().all(|b| b.message == LOGIN_REQUIRED));
    }

    #[test]
    fn submit_posts_with_token_and_requests_reset() {
        let (state, api, store, vm) = setup();
        signed_in(&state, &store);

        assert!(block_on(vm.submit(form(), None)));

        assert_eq!(api.calls(), vec![Call::CreateAppointment("t1".into())]);
        let created = api.created.borrow();
        assert!(created[0].notification_preference);
        assert_eq!(created[0].image_url, None);
        assert!(state.take_booking_form_reset());
        assert_eq!(state.take_banners()[0].message, BOOKING_SUCCESS);
        assert!(!state.is_pending(PendingAction::Booking));
    }

    #[test]
    fn submit_uploads_image_first() {
        let (state, api, store, vm) = setup();
        signed_in(&state, &store);
        api.set_upload_target("https://s3/car.jpg?sig", "https://cdn/car.jpg");

        assert!(block_on(vm.submit(form(), Some(photo()))));

        assert_eq!(
            api.calls(),
            vec![
                Call::UploadUrl("t1".into()),
                Call::Put("https://s3/car.jpg?sig".into()),
                Call::CreateAppointment("t1".into()),
            ]
        );
        assert_eq!(api.created.borrow()[0].image_url.as_deref(), Some("https://cdn/car.jpg"));
    }

    #[test]
    fn upload_failure_aborts_booking() {
        let (state, api, store, vm) = setup();
        signed_in(&state, &store);

        assert!(!block_on(vm.submit(form(), Some(photo()))));

        assert!(api.created.borrow().is_empty());
        assert!(!state.take_booking_form_reset());
        assert_eq!(state.take_banners()[0].message, UPLOAD_FAILED_MESSAGE);
    }

    #[test]
    fn booking_rejection_keeps_form() {
        let (state, api, store, vm) = setup();
        signed_in(&state, &store);
        *api.create_result.borrow_mut() = Err(ClientError::Server {
            status: 400,
            message: Some("Invalid appointment time".into()),
        });

        assert!(!block_on(vm.submit(form(), None)));

        assert!(!state.take_booking_form_reset());
        let banners = state.take_banners();
        assert_eq!(banners[0].kind, BannerKind::Error);
        assert_eq!(banners[0].message, "Invalid appointment time");
    }

    #[test]
    fn load_without_session_does_nothing() {
        let (state, api, store, vm) = setup();
        store.save_token("t1").unwrap();

        block_on(vm.load());

        assert!(api.calls().is_empty());
        assert!(state.take_banners().is_empty());
    }

    #[test]
    fn load_sends_token_and_replaces_list() {
        let (state, api, store, vm) = setup();
        signed_in(&state, &store);
        state.set_appointments(vec![sample_appointment("repair", "Pending")]);
        api.set_appointments(vec![
            sample_appointment("oil-change", "Confirmed"),
            sample_appointment("tire-rotation", "Pending"),
        ]);

        block_on(vm.load());

        assert_eq!(api.calls(), vec![Call::ListAppointments("t1".into())]);
        let list = state.get_appointments();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].service_type, "oil-change");
        assert_eq!(list[1].service_type, "tire-rotation");
    }

    #[test]
    fn load_failure_keeps_stale_list() {
        let (state, api, store, vm) = setup();
        signed_in(&state, &store);
        state.set_appointments(vec![sample_appointment("repair", "Pending")]);
        *api.list_result.borrow_mut() = Err(ClientError::Server {
            status: 401,
            message: Some("Invalid token".into()),
        });

        block_on(vm.load());

        assert_eq!(state.get_appointments().len(), 1);
        assert_eq!(state.take_banners()[0].message, LOAD_FAILED);
    }
}
