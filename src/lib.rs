// ============================================================================
// CAR SERVICE BOOKING - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Models: payloads del API
// - Services: SOLO comunicación API + localStorage
// - State: State Management con Rc<RefCell>
// - ViewModels: lógica de auth y citas (sin DOM)
// - Views / DOM: pintan el estado sobre index.html
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
pub mod dom;
pub mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚗 Car Service Booking - API en {}", CONFIG.api_base_url);

    let app = App::new()?;
    app.start()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Recarga la lista de citas (llamable desde JavaScript)
#[wasm_bindgen]
pub fn refresh_appointments() {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => app.refresh(),
        None => log::warn!("⚠️ App no está inicializada"),
    });
}
