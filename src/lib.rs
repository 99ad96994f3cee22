//! Browser-side enhancements for the server-rendered visual hash page.
//!
//! This crate is compiled to WebAssembly and loaded by the page after the
//! server has rendered the form and (optionally) a generated hash image. It
//! adds two independent components on top of that markup: a canvas that spins
//! the image, and a button that fills the name field with a random name from
//! the server. The page stays fully usable without it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Finds elements and mounts the components that can run |
//! | [`renderer`] | Image loading and the `requestAnimationFrame` loop |
//! | [`rotation`] | Browser-free rotation math and frame draw sequence |
//! | [`surface`] | Canvas 2D implementation of [`rotation::Surface`] |
//! | [`download_form`] | The injected download form and control nudges |
//! | [`name_fetch`] | Random-name button and response sequencing |
//! | [`net`] | HTTP helpers |
//! | [`config`] | Element ids, endpoints, rotation speed |
//! | [`error`] | [`error::EnhanceError`] |
//! | [`consts`] | Default values |

pub mod config;
pub mod consts;
pub mod download_form;
pub mod error;
pub mod name_fetch;
pub mod net;
pub mod page;
pub mod renderer;
pub mod rotation;
pub mod surface;

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::PageConfig;
use crate::page::Enhancements;
use crate::renderer::RotationRenderer;

thread_local! {
    /// The enhancements mounted on the current view, if any.
    static MOUNTED: RefCell<Option<Enhancements>> = const { RefCell::new(None) };
}

fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    // A logger can only be installed once; later calls just move the level.
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Replace whatever is mounted with a fresh mount using `config`.
fn remount(document: &Document, config: &PageConfig) {
    if let Some(previous) = MOUNTED.with(|slot| slot.borrow_mut().take()) {
        previous.dispose();
    }
    let mounted = Enhancements::mount(document, config);
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted));
}

/// Module entry point: mount with the default config once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    init_logging(log::Level::Info);
    let Some(document) = document() else {
        log::warn!("no document; page enhancements not mounted");
        return;
    };
    if document.ready_state() == "loading" {
        let ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            remount(&ready, &PageConfig::default());
        })
        .forget();
    } else {
        remount(&document, &PageConfig::default());
    }
}

/// Mount (or remount) with a JSON config override, for hosts that swap views.
///
/// # Errors
///
/// Rejects with a message when the config is invalid or there is no document.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config_json)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    init_logging(config.log_level());
    let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
    remount(&document, &config);
    Ok(())
}

/// Tear down the mounted enhancements: stops the animation and detaches
/// every listener. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(mounted) = MOUNTED.with(|slot| slot.borrow_mut().take()) {
        mounted.dispose();
    }
}

fn with_renderer<T>(read: impl FnOnce(&RotationRenderer) -> T) -> Option<T> {
    MOUNTED.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(Enhancements::renderer)
            .map(read)
    })
}

/// Whether the spinner has decoded its image and is animating.
#[wasm_bindgen(js_name = isAnimating)]
pub fn is_animating() -> bool {
    with_renderer(RotationRenderer::is_animating).unwrap_or(false)
}

/// Frames drawn by the spinner since its image decoded; zero when there is
/// no spinner on the page.
#[wasm_bindgen(js_name = framesDrawn)]
pub fn frames_drawn() -> u64 {
    with_renderer(RotationRenderer::frames_drawn).unwrap_or(0)
}
