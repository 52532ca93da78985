pub mod api_client;
pub mod token_store;
pub mod upload_service;

#[cfg(test)]
pub mod testing;

pub use api_client::{ApiClient, BookingApi};
pub use token_store::{LocalTokenStore, TokenStore};
pub use upload_service::upload_image;
