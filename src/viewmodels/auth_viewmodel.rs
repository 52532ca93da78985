// ============================================================================
// AUTH VIEWMODEL - Login, registro y logout
// ============================================================================
// Llama al API, actualiza AppState y encola banners. No toca el DOM.
// ============================================================================

use std::rc::Rc;
use crate::error::ClientError;
use crate::models::Credentials;
use crate::services::{BookingApi, TokenStore};
use crate::state::{AppState, AuthView, PendingAction};

pub const LOGIN_SUCCESS: &str = "Logged in successfully!";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_SUCCESS: &str = "Account created! Please check your email for verification.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";

pub struct AuthViewModel<A, S> {
    state: AppState,
    api: Rc<A>,
    store: Rc<S>,
}

impl<A, S> AuthViewModel<A, S>
where
    A: BookingApi,
    S: TokenStore,
{
    pub fn new(state: AppState, api: Rc<A>, store: Rc<S>) -> Self {
        Self { state, api, store }
    }

    pub fn show_login(&self) {
        self.state.auth.transition(AuthView::show_login);
    }

    pub fn show_signup(&self) {
        self.state.auth.transition(AuthView::show_signup);
    }

    /// Restaura la sesión al arrancar si hay token y usuario guardados.
    /// Un token sin usuario no sirve para nada y se borra.
    pub fn restore_session(&self) -> bool {
        match (self.store.token(), self.store.user()) {
            (Some(_), Some(user)) => {
                log::info!("💾 Sesión restaurada para {}", user.email);
                self.state.sign_in(user);
                true
            }
            (Some(_), None) => {
                log::warn!("⚠️ Token sin usuario guardado, se descarta");
                self.store.clear();
                false
            }
            _ => false,
        }
    }

    /// Devuelve `true` si el usuario quedó autenticado
    pub async fn login(&self, email: String, password: String) -> bool {
        if !self.state.try_begin(PendingAction::Login) {
            log::warn!("⚠️ Login ya en curso, se ignora");
            return false;
        }
        let signed_in = self.do_login(Credentials::new(email, password)).await;
        self.state.finish(PendingAction::Login);
        signed_in
    }

    async fn do_login(&self, credentials: Credentials) -> bool {
        let response = match self.api.login(&credentials).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Login falló: {}", e);
                self.state.show_client_error(&e, LOGIN_FAILED);
                return false;
            }
        };

        if let Err(e) = self.store.save_token(&response.token) {
            log::error!("❌ No se pudo guardar el token: {}", e);
            self.state.show_client_error(&e, LOGIN_FAILED);
            return false;
        }
        if let Err(e) = self.store.save_user(&response.user) {
            // La sesión en memoria sigue siendo válida; solo se pierde la restauración
            log::warn!("⚠️ No se pudo guardar el usuario: {}", e);
        }

        self.state.sign_in(response.user);
        self.state.show_success(LOGIN_SUCCESS);
        true
    }

    /// Registro. Las contraseñas se comparan antes de cualquier llamada de red.
    pub async fn signup(&self, email: String, password: String, confirm_password: String) -> bool {
        if password != confirm_password {
            self.state
                .show_client_error(&ClientError::validation(PASSWORDS_MISMATCH), SIGNUP_FAILED);
            return false;
        }
        if !self.state.try_begin(PendingAction::Signup) {
            log::warn!("⚠️ Registro ya en curso, se ignora");
            return false;
        }

        let result = self.api.signup(&Credentials::new(email, password)).await;
        self.state.finish(PendingAction::Signup);

        match result {
            Ok(()) => {
                self.state.show_success(SIGNUP_SUCCESS);
                self.state.auth.transition(AuthView::signup_succeeded);
                true
            }
            Err(e) => {
                log::error!("❌ Registro falló: {}", e);
                self.state.show_client_error(&e, SIGNUP_FAILED);
                false
            }
        }
    }

    /// Cierra la sesión local siempre; avisar al backend es best-effort.
    pub async fn logout(&self) {
        let token = self.store.token();

        self.store.clear();
        self.state.sign_out();

        match self.api.logout(token.as_deref()).await {
            Ok(()) => log::info!("👋 Logout notificado al backend"),
            Err(e) => log::warn!("⚠️ Logout en backend falló (sesión local ya cerrada): {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::services::testing::{Call, FakeApi, MemoryTokenStore};
    use crate::state::BannerKind;
    use futures::executor::block_on;

    fn setup() -> (AppState, Rc<FakeApi>, Rc<MemoryTokenStore>, AuthViewModel<FakeApi, MemoryTokenStore>) {
        let state = AppState::new();
        let api = Rc::new(FakeApi::new());
        let store = Rc::new(MemoryTokenStore::new());
        let vm = AuthViewModel::new(state.clone(), api.clone(), store.clone());
        (state, api, store, vm)
    }

    #[test]
    fn login_success_persists_token_and_user() {
        let (state, api, store, vm) = setup();
        api.accept_login("t1", "a@b.com");
        vm.show_login();

        assert!(block_on(vm.login("a@b.com".into(), "x".into())));

        assert_eq!(store.token(), Some("t1".to_string()));
        assert_eq!(store.user().map(|u| u.email), Some("a@b.com".to_string()));
        assert_eq!(state.session.email(), Some("a@b.com".to_string()));
        assert_eq!(state.auth.get_view(), AuthView::Authenticated);
        let banners = state.take_banners();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].kind, BannerKind::Success);
        assert!(!state.is_pending(PendingAction::Login));
    }

    #[test]
    fn login_failure_shows_server_message_and_keeps_session() {
        let (state, api, store, vm) = setup();
        *api.login_result.borrow_mut() = Err(ClientError::Server {
            status: 404,
            message: Some("User not found. Please sign up first.".to_string()),
        });
        vm.show_login();

        assert!(!block_on(vm.login("a@b.com".into(), "x".into())));

        assert_eq!(store.token(), None);
        assert!(!state.session.is_authenticated());
        assert_eq!(state.auth.get_view(), AuthView::ShowingLoginForm);
        let banners = state.take_banners();
        assert_eq!(banners[0].kind, BannerKind::Error);
        assert_eq!(banners[0].message, "User not found. Please sign up first.");
    }

    #[test]
    fn login_network_error_uses_fallback() {
        let (state, api, _store, vm) = setup();
        *api.login_result.borrow_mut() = Err(ClientError::Network("Failed to fetch".into()));

        block_on(vm.login("a@b.com".into(), "x".into()));

        assert_eq!(state.take_banners()[0].message, LOGIN_FAILED);
    }

    #[test]
    fn login_while_pending_is_ignored() {
        let (state, api, _store, vm) = setup();
        api.accept_login("t1", "a@b.com");
        state.try_begin(PendingAction::Login);

        assert!(!block_on(vm.login("a@b.com".into(), "x".into())));
        assert!(api.calls().is_empty());
        assert!(state.take_banners().is_empty());
    }

    #[test]
    fn signup_mismatch_never_hits_network() {
        let (state, api, _store, vm) = setup();
        vm.show_signup();

        assert!(!block_on(vm.signup("a@b.com".into(), "secret123".into(), "secret124".into())));

        assert!(api.calls().is_empty());
        let banners = state.take_banners();
        assert_eq!(banners[0].kind, BannerKind::Error);
        assert_eq!(banners[0].message, PASSWORDS_MISMATCH);
        assert_eq!(state.auth.get_view(), AuthView::ShowingSignupForm);
    }

    #[test]
    fn signup_success_switches_to_login_form() {
        let (state, api, _store, vm) = setup();
        vm.show_signup();

        assert!(block_on(vm.signup("a@b.com".into(), "secret123".into(), "secret123".into())));

        assert_eq!(api.calls(), vec![Call::Signup("a@b.com".into())]);
        assert_eq!(state.auth.get_view(), AuthView::ShowingLoginForm);
        assert_eq!(state.take_banners()[0].message, SIGNUP_SUCCESS);
    }

    #[test]
    fn signup_server_error_is_surfaced() {
        let (state, api, _store, vm) = setup();
        *api.signup_result.borrow_mut() = Err(ClientError::Server {
            status: 400,
            message: Some("User already exists".into()),
        });
        vm.show_signup();

        block_on(vm.signup("a@b.com".into(), "secret123".into(), "secret123".into()));

        assert_eq!(state.take_banners()[0].message, "User already exists");
        assert_eq!(state.auth.get_view(), AuthView::ShowingSignupForm);
    }

    #[test]
    fn logout_clears_everything_even_if_backend_fails() {
        let (state, api, store, vm) = setup();
        store.save_token("t1").unwrap();
        store.save_user(&User::with_email("a@b.com")).unwrap();
        state.sign_in(User::with_email("a@b.com"));
        *api.logout_result.borrow_mut() = Err(ClientError::Network("offline".into()));

        block_on(vm.logout());

        assert_eq!(api.calls(), vec![Call::Logout(Some("t1".into()))]);
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
        assert!(!state.session.is_authenticated());
        assert_eq!(state.auth.get_view(), AuthView::Unauthenticated);
        assert!(state.take_banners().is_empty());
    }

    #[test]
    fn restore_requires_token_and_user() {
        let (state, _api, store, vm) = setup();
        assert!(!vm.restore_session());

        store.save_token("t1").unwrap();
        assert!(!vm.restore_session());
        assert_eq!(store.token(), None, "orphan token is dropped");

        store.save_token("t2").unwrap();
        store.save_user(&User::with_email("a@b.com")).unwrap();
        assert!(vm.restore_session());
        assert_eq!(state.auth.get_view(), AuthView::Authenticated);
        assert_eq!(state.session.email(), Some("a@b.com".into()));
    }
}
