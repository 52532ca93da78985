pub mod auth_viewmodel;
pub mod appointment_viewmodel;
pub mod dispatcher;

pub use auth_viewmodel::AuthViewModel;
pub use appointment_viewmodel::AppointmentViewModel;
pub use dispatcher::Dispatcher;
