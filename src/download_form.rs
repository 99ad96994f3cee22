//! The download form injected next to the spinning hash, plus the small
//! layout nudges the surrounding controls get once it is there.
//!
//! The form is a plain HTML form post so the browser handles the file
//! download response itself.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

use crate::config::PageConfig;
use crate::error::EnhanceError;

#[cfg(test)]
#[path = "download_form_test.rs"]
mod download_form_test;

/// Inline style on the injected submit button.
pub const BUTTON_STYLE: &str = "margin-left:0.25rem";

/// `(selector class, css property, value)` applied to neighbouring controls.
#[must_use]
pub fn control_nudges(config: &PageConfig) -> [(String, &'static str, &'static str); 2] {
    [
        (config.generate_class.clone(), "margin-right", "0.25rem"),
        (config.random_name_class.clone(), "margin-left", "0rem"),
    ]
}

/// Everything needed to build the form, decided before touching the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadForm {
    pub action: String,
    pub method: &'static str,
    pub field: String,
    pub value: String,
    pub label: String,
}

impl DownloadForm {
    #[must_use]
    pub fn for_name(config: &PageConfig, name: &str) -> Self {
        Self {
            action: config.download_endpoint.clone(),
            method: "post",
            field: config.download_field.clone(),
            value: name.to_owned(),
            label: config.download_label.clone(),
        }
    }

    /// Build the form and append it to `container`.
    ///
    /// Attribute values are set through the DOM rather than markup, so a name
    /// containing quotes or angle brackets lands in the field verbatim.
    ///
    /// # Errors
    ///
    /// Propagates any rejected DOM call.
    pub fn install(
        &self,
        document: &Document,
        container: &Element,
    ) -> Result<HtmlFormElement, EnhanceError> {
        let form = document
            .create_element("form")?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| EnhanceError::Dom("created element is not a form".to_owned()))?;
        form.set_action(&self.action);
        form.set_method(self.method);

        let hidden = document.create_element("input")?;
        hidden.set_attribute("type", "hidden")?;
        hidden.set_attribute("name", &self.field)?;
        hidden.set_attribute("value", &self.value)?;
        form.append_child(&hidden)?;

        let button = document.create_element("button")?;
        button.set_attribute("type", "submit")?;
        button.set_attribute("style", BUTTON_STYLE)?;
        button.set_text_content(Some(&self.label));
        form.append_child(&button)?;

        container.append_child(&form)?;
        Ok(form)
    }
}

/// Apply [`control_nudges`] to whichever controls exist on the page.
///
/// # Errors
///
/// Propagates an invalid selector or a rejected style write.
pub fn nudge_controls(document: &Document, config: &PageConfig) -> Result<(), EnhanceError> {
    for (class, property, value) in control_nudges(config) {
        let Some(element) = document.query_selector(&format!(".{class}"))? else {
            log::debug!("no .{class} control to adjust");
            continue;
        };
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            element.style().set_property(property, value)?;
        }
    }
    Ok(())
}
