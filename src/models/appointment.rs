use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_STATUS: &str = "Pending";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// `carYear` llega como texto desde el formulario pero algunos registros
/// lo guardan como número.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Cita tal como la devuelve `GET /appointments`. Solo lectura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default, rename = "appointment_id", skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
    pub car_make: String,
    pub car_model: String,
    #[serde(deserialize_with = "string_or_number")]
    pub car_year: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notification_preference: bool,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Appointment {
    /// "2019 Toyota Corolla"
    pub fn vehicle_label(&self) -> String {
        format!("{} {} {}", self.car_year, self.car_make, self.car_model)
    }

    /// Clase CSS del estado: `status-<estado en minúsculas>`
    pub fn status_class(&self) -> String {
        format!("status-{}", self.status.to_lowercase())
    }

    /// El backend guarda `""` cuando no hubo imagen
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Cuerpo de `POST /appointments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub car_make: String,
    pub car_model: String,
    pub car_year: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub notification_preference: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Valores crudos del formulario de reserva
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentForm {
    pub car_make: String,
    pub car_model: String,
    pub car_year: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub description: String,
    /// Estado `checked` del checkbox de notificaciones
    pub notify: bool,
}

impl AppointmentForm {
    pub fn into_payload(self, image_url: Option<String>) -> NewAppointment {
        NewAppointment {
            car_make: self.car_make,
            car_model: self.car_model,
            car_year: self.car_year,
            service_type: self.service_type,
            date: self.date,
            time: self.time,
            description: self.description,
            notification_preference: self.notify,
            image_url,
        }
    }
}
