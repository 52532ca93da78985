// Dobles en memoria de `BookingApi` y `TokenStore` para los tests

use std::cell::RefCell;
use async_trait::async_trait;
use crate::error::ClientError;
use crate::models::{
    Appointment, Credentials, ImageFile, LoginResponse, NewAppointment, UploadTarget,
    UploadUrlRequest, User,
};
use crate::services::{BookingApi, TokenStore};

/// Llamadas de red registradas, en orden
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    Signup(String),
    Logout(Option<String>),
    CreateAppointment(String),
    ListAppointments(String),
    UploadUrl(String),
    Put(String),
}

pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub login_result: RefCell<Result<LoginResponse, ClientError>>,
    pub signup_result: RefCell<Result<(), ClientError>>,
    pub logout_result: RefCell<Result<(), ClientError>>,
    pub create_result: RefCell<Result<(), ClientError>>,
    pub list_result: RefCell<Result<Vec<Appointment>, ClientError>>,
    pub upload_target: RefCell<Result<UploadTarget, ClientError>>,
    pub put_result: RefCell<Result<(), ClientError>>,
    pub created: RefCell<Vec<NewAppointment>>,
    pub upload_requests: RefCell<Vec<UploadUrlRequest>>,
    pub puts: RefCell<Vec<(String, ImageFile)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            login_result: RefCell::new(Err(ClientError::Server { status: 401, message: None })),
            signup_result: RefCell::new(Ok(())),
            logout_result: RefCell::new(Ok(())),
            create_result: RefCell::new(Ok(())),
            list_result: RefCell::new(Ok(Vec::new())),
            upload_target: RefCell::new(Err(ClientError::Server { status: 500, message: None })),
            put_result: RefCell::new(Ok(())),
            created: RefCell::new(Vec::new()),
            upload_requests: RefCell::new(Vec::new()),
            puts: RefCell::new(Vec::new()),
        }
    }

    pub fn accept_login(&self, token: &str, email: &str) {
        *self.login_result.borrow_mut() = Ok(LoginResponse {
            token: token.to_string(),
            user: User::with_email(email),
        });
    }

    pub fn set_upload_target(&self, upload_url: &str, image_url: &str) {
        *self.upload_target.borrow_mut() = Ok(UploadTarget {
            upload_url: upload_url.to_string(),
            image_url: image_url.to_string(),
        });
    }

    pub fn set_appointments(&self, appointments: Vec<Appointment>) {
        *self.list_result.borrow_mut() = Ok(appointments);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl BookingApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        self.record(Call::Login(credentials.email.clone()));
        self.login_result.borrow().clone()
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), ClientError> {
        self.record(Call::Signup(credentials.email.clone()));
        self.signup_result.borrow().clone()
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), ClientError> {
        self.record(Call::Logout(token.map(str::to_string)));
        self.logout_result.borrow().clone()
    }

    async fn create_appointment(
        &self,
        token: &str,
        appointment: &NewAppointment,
    ) -> Result<(), ClientError> {
        self.record(Call::CreateAppointment(token.to_string()));
        self.created.borrow_mut().push(appointment.clone());
        self.create_result.borrow().clone()
    }

    async fn list_appointments(&self, token: &str) -> Result<Vec<Appointment>, ClientError> {
        self.record(Call::ListAppointments(token.to_string()));
        self.list_result.borrow().clone()
    }

    async fn request_upload_url(
        &self,
        token: &str,
        request: &UploadUrlRequest,
    ) -> Result<UploadTarget, ClientError> {
        self.record(Call::UploadUrl(token.to_string()));
        self.upload_requests.borrow_mut().push(request.clone());
        self.upload_target.borrow().clone()
    }

    async fn put_file(&self, upload_url: &str, file: &ImageFile) -> Result<(), ClientError> {
        self.record(Call::Put(upload_url.to_string()));
        self.puts.borrow_mut().push((upload_url.to_string(), file.clone()));
        self.put_result.borrow().clone()
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    pub token: RefCell<Option<String>>,
    pub user: RefCell<Option<User>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save_token(&self, token: &str) -> Result<(), ClientError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn save_user(&self, user: &User) -> Result<(), ClientError> {
        *self.user.borrow_mut() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
    }
}

pub fn sample_appointment(service_type: &str, status: &str) -> Appointment {
    Appointment {
        appointment_id: None,
        car_make: "Toyota".to_string(),
        car_model: "Corolla".to_string(),
        car_year: "2019".to_string(),
        service_type: service_type.to_string(),
        date: "2024-03-18".to_string(),
        time: "09:00".to_string(),
        description: String::new(),
        notification_preference: false,
        status: status.to_string(),
        image_url: None,
        user_email: Some("a@b.com".to_string()),
        created_at: None,
    }
}
