//! The spinning visual hash: image loading, one-time page setup, and the
//! `requestAnimationFrame` loop that drives [`RotationCore`].
//!
//! ARCHITECTURE
//! ============
//! All state lives in one `Rc<Shared>` owned by [`RotationRenderer`]. Frame
//! and image callbacks only hold a `Weak` to it, so dropping the renderer
//! cancels the pending frame, detaches the image listeners and removes the
//! injected form without any reference cycle keeping the loop alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlFormElement,
    HtmlImageElement, HtmlInputElement,
};

use crate::config::PageConfig;
use crate::download_form::{DownloadForm, nudge_controls};
use crate::error::EnhanceError;
use crate::rotation::RotationCore;
use crate::surface::{CanvasSurface, DisplayTarget, context_2d};

/// Read an attribute the server is expected to have rendered.
///
/// # Errors
///
/// Returns [`EnhanceError::MissingAttribute`] when it is absent.
pub fn required_attr(element: &Element, attr: &str) -> Result<String, EnhanceError> {
    element
        .get_attribute(attr)
        .ok_or_else(|| EnhanceError::MissingAttribute {
            id: element.id(),
            attr: attr.to_owned(),
        })
}

struct Shared {
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
    target: DisplayTarget,
    speed_deg: f64,
    core: RefCell<Option<RotationCore<CanvasSurface>>>,
    frame: RefCell<Option<AnimationFrame>>,
    image_listeners: RefCell<Vec<EventListener>>,
    form: Option<HtmlFormElement>,
}

impl Shared {
    /// Image decoded: bind it to the surface and start the loop.
    fn start(self: &Rc<Self>) {
        let surface = CanvasSurface::new(self.ctx.clone(), self.image.clone(), self.target);
        *self.core.borrow_mut() = Some(RotationCore::new(surface, self.speed_deg));
        log::info!(
            "visual hash animation started ({}x{} surface, {} deg/frame)",
            self.target.width,
            self.target.height,
            self.speed_deg
        );
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = request_animation_frame(move |_timestamp| {
            if let Some(shared) = weak.upgrade() {
                shared.on_frame();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        let drawn = match self.core.borrow_mut().as_mut() {
            Some(core) => core.on_frame(),
            None => return,
        };
        match drawn {
            Ok(()) => self.schedule(),
            Err(err) => log::error!("visual hash animation stopped: {err}"),
        }
    }
}

/// Mounted rotation renderer. Dropping it stops the animation.
pub struct RotationRenderer {
    shared: Rc<Shared>,
}

impl RotationRenderer {
    /// Set up the page around `canvas` and start loading its image.
    ///
    /// Runs the one-time setup synchronously: injects the download form,
    /// nudges the neighbouring controls and pre-fills `name_input`. The
    /// animation begins once the image has decoded; if it never decodes the
    /// surface stays blank.
    ///
    /// # Errors
    ///
    /// Fails when `canvas` lacks its image or name attribute or has no 2D
    /// context. Download-form problems are logged and do not fail the mount.
    pub fn mount(
        document: &Document,
        canvas: &HtmlCanvasElement,
        name_input: Option<&HtmlInputElement>,
        config: &PageConfig,
    ) -> Result<Self, EnhanceError> {
        let image_url = required_attr(canvas, &config.image_attr)?;
        let name = required_attr(canvas, &config.name_attr)?;
        let ctx = context_2d(canvas)?;
        let target = DisplayTarget::of(canvas);

        let form = match install_download_controls(document, config, &name) {
            Ok(form) => form,
            Err(err) => {
                log::warn!("download form not added: {err}");
                None
            }
        };
        if let Some(input) = name_input {
            input.set_value(&name);
        }

        let image = HtmlImageElement::new()?;
        let shared = Rc::new(Shared {
            ctx,
            image: image.clone(),
            target,
            speed_deg: config.rotation_speed_deg,
            core: RefCell::new(None),
            frame: RefCell::new(None),
            image_listeners: RefCell::new(Vec::new()),
            form,
        });

        let weak = Rc::downgrade(&shared);
        let on_load = EventListener::once(&image, "load", move |_event| {
            if let Some(shared) = weak.upgrade() {
                shared.start();
            }
        });
        let on_error = EventListener::once(&image, "error", |_event| {
            log::warn!("visual hash image failed to decode; animation not started");
        });
        shared.image_listeners.borrow_mut().push(on_load);
        shared.image_listeners.borrow_mut().push(on_error);
        image.set_src(&image_url);

        Ok(Self { shared })
    }

    /// Whether the image has decoded and frames are being scheduled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.shared.frame.borrow().is_some()
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        let core = self.shared.core.borrow();
        core.as_ref().map_or(0, RotationCore::frames_drawn)
    }
}

impl Drop for RotationRenderer {
    fn drop(&mut self) {
        self.shared.frame.borrow_mut().take();
        self.shared.image_listeners.borrow_mut().clear();
        if let Some(form) = &self.shared.form {
            form.remove();
        }
    }
}

fn install_download_controls(
    document: &Document,
    config: &PageConfig,
    name: &str,
) -> Result<Option<HtmlFormElement>, EnhanceError> {
    let Some(container) = document.get_element_by_id(&config.download_container_id) else {
        log::debug!(
            "no #{} on page; skipping download form",
            config.download_container_id
        );
        return Ok(None);
    };
    let spec = DownloadForm::for_name(config, name);
    let form = spec.install(document, &container)?;
    nudge_controls(document, config)?;
    Ok(Some(form))
}
