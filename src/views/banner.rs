// ============================================================================
// BANNER VIEW - Notificaciones temporales
// ============================================================================
// Se insertan arriba del <main> y se retiran solas. Varios banners se apilan.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::dom::{prepend_child, query_selector, ElementBuilder};
use crate::state::{AppState, Banner, BannerKind};

fn banner_class(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Success => "success fade-in",
        BannerKind::Error => "error fade-in",
    }
}

pub fn show_banner(banner: &Banner) -> Result<(), JsValue> {
    let main = query_selector("main")?.ok_or_else(|| JsValue::from_str("No <main> element found"))?;

    let element = ElementBuilder::new("div")?
        .class(banner_class(banner.kind))
        .attr("role", if banner.kind == BannerKind::Error { "alert" } else { "status" })?
        .text(&banner.message)
        .build();
    prepend_child(&main, &element)?;

    Timeout::new(CONFIG.banner_timeout_ms, move || element.remove()).forget();
    Ok(())
}

/// Muestra todos los banners encolados en el estado.
/// La cola ya quedó vacía: un banner que falla se loguea y se sigue con el resto.
pub fn flush_banners(state: &AppState) {
    drain_banners(state, show_banner);
}

/// Devuelve cuántos banners se mostraron
fn drain_banners<E, F>(state: &AppState, mut show: F) -> usize
where
    E: std::fmt::Debug,
    F: FnMut(&Banner) -> Result<(), E>,
{
    let mut shown = 0;
    for banner in state.take_banners() {
        match show(&banner) {
            Ok(()) => shown += 1,
            Err(e) => log::error!("❌ No se pudo mostrar el banner \"{}\": {:?}", banner.message, e),
        }
    }
    shown
}
