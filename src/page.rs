//! Page mount: find the elements each component depends on and activate only
//! the components whose elements are all present.
//!
//! A page without the canvas (the form before anything was generated) gets
//! just the random-name button; a page without the button gets just the
//! spinner. Neither case is an error.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement};

use crate::config::PageConfig;
use crate::error::EnhanceError;
use crate::name_fetch::NameFetcher;
use crate::renderer::RotationRenderer;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Mount,
    /// The component's anchor element is not on the page.
    Absent,
    /// The anchor is there but a required companion element is not.
    Incomplete(&'static str),
}

/// Which elements were found on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presence {
    pub surface: bool,
    pub trigger: bool,
    pub name_input: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivationPlan {
    pub renderer: Activation,
    pub fetcher: Activation,
}

impl ActivationPlan {
    #[must_use]
    pub fn from_presence(presence: Presence) -> Self {
        // The renderer only pre-fills the input, so it can run without one.
        let renderer = if presence.surface {
            Activation::Mount
        } else {
            Activation::Absent
        };
        let fetcher = match (presence.trigger, presence.name_input) {
            (false, _) => Activation::Absent,
            (true, true) => Activation::Mount,
            (true, false) => Activation::Incomplete("name input"),
        };
        Self { renderer, fetcher }
    }
}

fn typed<T: JsCast>(element: Element, id: &str, expected: &'static str) -> Result<T, EnhanceError> {
    element
        .dyn_into::<T>()
        .map_err(|_| EnhanceError::WrongElementType {
            id: id.to_owned(),
            expected,
        })
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    let element = document.get_element_by_id(id)?;
    match typed::<HtmlInputElement>(element, id, "input") {
        Ok(input) => Some(input),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}

fn mount_renderer(
    document: &Document,
    surface: Element,
    name_input: Option<&HtmlInputElement>,
    config: &PageConfig,
) -> Option<RotationRenderer> {
    let mounted = typed::<HtmlCanvasElement>(surface, &config.surface_id, "canvas")
        .and_then(|canvas| RotationRenderer::mount(document, &canvas, name_input, config));
    match mounted {
        Ok(renderer) => Some(renderer),
        Err(err) => {
            log::warn!("rotation renderer not mounted: {err}");
            None
        }
    }
}

/// Everything mounted on one view. Dropping it tears every component down.
pub struct Enhancements {
    renderer: Option<RotationRenderer>,
    fetcher: Option<NameFetcher>,
}

impl Enhancements {
    /// Mount every component whose elements are present.
    #[must_use]
    pub fn mount(document: &Document, config: &PageConfig) -> Self {
        let surface = document.get_element_by_id(&config.surface_id);
        let trigger = document.get_element_by_id(&config.random_name_button_id);
        let name_input = input_by_id(document, &config.name_input_id);

        let plan = ActivationPlan::from_presence(Presence {
            surface: surface.is_some(),
            trigger: trigger.is_some(),
            name_input: name_input.is_some(),
        });
        log::debug!("activation plan: {plan:?}");

        let renderer = match surface {
            Some(surface) if plan.renderer == Activation::Mount => {
                mount_renderer(document, surface, name_input.as_ref(), config)
            }
            _ => None,
        };

        let fetcher = match (plan.fetcher, trigger, name_input) {
            (Activation::Mount, Some(trigger), Some(input)) => {
                let endpoint = config.random_name_endpoint.clone();
                Some(NameFetcher::mount(&trigger, input, endpoint))
            }
            (Activation::Incomplete(missing), ..) => {
                log::warn!("random name button found but no {missing}; not wired");
                None
            }
            _ => None,
        };

        log::info!(
            "page enhancements mounted (renderer: {}, random name: {})",
            renderer.is_some(),
            fetcher.is_some()
        );
        Self { renderer, fetcher }
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&RotationRenderer> {
        self.renderer.as_ref()
    }

    #[must_use]
    pub fn has_name_fetcher(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Stop the animation, detach listeners and remove the injected form.
    pub fn dispose(self) {
        log::info!("page enhancements disposed");
    }
}
