// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de nodos
// ============================================================================
// Todo el texto entra como text node, nunca como HTML: los datos de las
// citas vienen del servidor y no se interpretan.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, set_attribute, set_class_name, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// `<p><strong>{label}</strong> {value}</p>`
    pub fn labeled(label: &str, value: &str) -> Result<Self, JsValue> {
        Self::new("p")?
            .child(Self::new("strong")?.text(label).build())?
            .append_text(&format!(" {}", value))
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    /// Reemplaza el contenido por un único text node
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Añade un text node al final, sin tocar los hijos existentes
    pub fn append_text(self, text: &str) -> Result<Self, JsValue> {
        self.element.append_with_str_1(text)?;
        Ok(self)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// `child` solo si hay algo que añadir
    pub fn optional_child(self, child: Option<Element>) -> Result<Self, JsValue> {
        match child {
            Some(child) => self.child(child),
            None => Ok(self),
        }
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
