//! Page configuration: which elements to look for and where to talk to.
//!
//! Defaults match the markup the server renders. Hosts that embed the page
//! under different ids can pass a JSON object to
//! [`crate::mount_with_config`]; any field left out keeps its default.

use serde::Deserialize;

use crate::consts::{
    DOWNLOAD_CONTAINER_ID, DOWNLOAD_ENDPOINT, DOWNLOAD_FIELD, DOWNLOAD_LABEL, GENERATE_CLASS,
    IMAGE_ATTR, NAME_ATTR, NAME_INPUT_ID, RANDOM_NAME_BUTTON_ID, RANDOM_NAME_CLASS,
    RANDOM_NAME_ENDPOINT, ROTATION_SPEED_DEG_PER_FRAME, SURFACE_ID,
};
use crate::error::EnhanceError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub surface_id: String,
    pub name_input_id: String,
    pub random_name_button_id: String,
    pub download_container_id: String,
    pub generate_class: String,
    pub random_name_class: String,
    pub image_attr: String,
    pub name_attr: String,
    pub random_name_endpoint: String,
    pub download_endpoint: String,
    pub download_field: String,
    pub download_label: String,
    pub rotation_speed_deg: f64,
    /// Log at debug level instead of info.
    pub debug: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            surface_id: SURFACE_ID.to_owned(),
            name_input_id: NAME_INPUT_ID.to_owned(),
            random_name_button_id: RANDOM_NAME_BUTTON_ID.to_owned(),
            download_container_id: DOWNLOAD_CONTAINER_ID.to_owned(),
            generate_class: GENERATE_CLASS.to_owned(),
            random_name_class: RANDOM_NAME_CLASS.to_owned(),
            image_attr: IMAGE_ATTR.to_owned(),
            name_attr: NAME_ATTR.to_owned(),
            random_name_endpoint: RANDOM_NAME_ENDPOINT.to_owned(),
            download_endpoint: DOWNLOAD_ENDPOINT.to_owned(),
            download_field: DOWNLOAD_FIELD.to_owned(),
            download_label: DOWNLOAD_LABEL.to_owned(),
            rotation_speed_deg: ROTATION_SPEED_DEG_PER_FRAME,
            debug: false,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::Config`] for malformed JSON or an unusable
    /// rotation speed.
    pub fn from_json(json: &str) -> Result<Self, EnhanceError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the renderer cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        if !self.rotation_speed_deg.is_finite() || self.rotation_speed_deg < 0.0 {
            return Err(EnhanceError::Config(format!(
                "rotation_speed_deg must be a finite, non-negative number (got {})",
                self.rotation_speed_deg
            )));
        }
        if self.surface_id.is_empty()
            || self.name_input_id.is_empty()
            || self.random_name_button_id.is_empty()
        {
            return Err(EnhanceError::Config("element ids must not be empty".to_owned()));
        }
        Ok(())
    }

    #[must_use]
    pub fn log_level(&self) -> log::Level {
        if self.debug {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
