// ============================================================================
// FORM HELPERS - Lectura de formularios
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlFormElement, HtmlInputElement};
use crate::dom::require_element;
use crate::models::ImageFile;

/// Formulario por ID
pub fn form_by_id(id: &str) -> Result<HtmlFormElement, JsValue> {
    require_element(id)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a form", id)))
}

/// Valores de un formulario por nombre de campo
pub struct FormValues {
    data: FormData,
}

impl FormValues {
    pub fn read(form: &HtmlFormElement) -> Result<Self, JsValue> {
        Ok(Self {
            data: FormData::new_with_form(form)?,
        })
    }

    /// Texto del campo; vacío si no existe
    pub fn text(&self, name: &str) -> String {
        self.data.get(name).as_string().unwrap_or_default()
    }

    /// Un checkbox solo aparece en el FormData cuando está marcado
    pub fn checked(&self, name: &str) -> bool {
        self.data.has(name)
    }
}

/// Primer archivo seleccionado en un `<input type="file">`, si lo hay
pub fn selected_file(input_id: &str) -> Result<Option<File>, JsValue> {
    let input = require_element(input_id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", input_id)))?;
    Ok(input.files().and_then(|files| files.get(0)))
}

/// Lee el archivo completo a memoria
pub async fn read_image(file: &File) -> Result<ImageFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(ImageFile {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
