// ============================================================================
// APPOINTMENTS VIEW - Tarjetas de citas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, require_element, ElementBuilder};
use crate::models::Appointment;
use crate::state::AppState;
use crate::utils::format_date;

pub const APPOINTMENTS_CONTAINER_ID: &str = "appointments-container";

/// Contenido de una tarjeta, ya formateado
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentCard {
    pub title: String,
    pub vehicle: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub status_class: String,
    pub image_url: Option<String>,
}

impl From<&Appointment> for AppointmentCard {
    fn from(appointment: &Appointment) -> Self {
        Self {
            title: appointment.service_type.clone(),
            vehicle: appointment.vehicle_label(),
            date: format_date(&appointment.date),
            time: appointment.time.clone(),
            status: appointment.status.clone(),
            status_class: appointment.status_class(),
            image_url: appointment.image().map(str::to_string),
        }
    }
}

/// Una tarjeta por cita, en el orden recibido
pub fn build_cards(appointments: &[Appointment]) -> Vec<AppointmentCard> {
    appointments.iter().map(AppointmentCard::from).collect()
}

/// Vacía el contenedor y lo vuelve a llenar
pub fn render_appointments(state: &AppState) -> Result<(), JsValue> {
    let container = require_element(APPOINTMENTS_CONTAINER_ID)?;
    clear_children(&container);

    for card in build_cards(&state.appointments.borrow()) {
        append_child(&container, &render_card(&card)?)?;
    }
    Ok(())
}

fn render_card(card: &AppointmentCard) -> Result<Element, JsValue> {
    let status = ElementBuilder::new("span")?
        .class(&card.status_class)
        .text(&card.status)
        .build();
    let status_line = ElementBuilder::labeled("Status:", "")?.child(status)?.build();

    let image = match &card.image_url {
        Some(url) => Some(
            ElementBuilder::new("img")?
                .class("appointment-image")
                .attr("src", url)?
                .attr("alt", "Car Image")?
                .build(),
        ),
        None => None,
    };

    Ok(ElementBuilder::new("div")?
        .class("appointment-card fade-in")
        .child(ElementBuilder::new("h3")?.text(&card.title).build())?
        .child(ElementBuilder::labeled("Vehicle:", &card.vehicle)?.build())?
        .child(ElementBuilder::labeled("Date:", &card.date)?.build())?
        .child(ElementBuilder::labeled("Time:", &card.time)?.build())?
        .child(status_line)?
        .optional_child(image)?
        .build())
}
