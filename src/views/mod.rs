pub mod auth;
pub mod appointments;
pub mod banner;

pub use auth::{render_auth_state, AuthLayout};
pub use appointments::render_appointments;
pub use banner::flush_banners;

use wasm_bindgen::prelude::*;
use crate::dom::form_by_id;
use crate::state::AppState;

pub const APPOINTMENT_FORM_ID: &str = "appointment-form";

/// Lleva el DOM al estado actual. Los banners se muestran aunque falle lo demás.
pub fn render_app(state: &AppState) -> Result<(), JsValue> {
    let rendered = render_regions(state);
    flush_banners(state);
    rendered
}

fn render_regions(state: &AppState) -> Result<(), JsValue> {
    render_appointments(state)?;
    render_auth_state(state)?;
    if state.take_booking_form_reset() {
        form_by_id(APPOINTMENT_FORM_ID)?.reset();
    }
    Ok(())
}
