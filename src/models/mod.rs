pub mod auth;
pub mod appointment;
pub mod upload;

pub use auth::{Credentials, ErrorBody, LoginResponse, User};
pub use appointment::{Appointment, AppointmentForm, NewAppointment};
pub use upload::{ImageFile, UploadTarget, UploadUrlRequest};
