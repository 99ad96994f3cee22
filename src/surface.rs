//! [`Surface`] backed by a real `<canvas>` 2D context.
//!
//! This is the only module that touches [`web_sys::CanvasRenderingContext2d`].

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::EnhanceError;
use crate::rotation::Surface;

/// Fixed pixel size of the drawing surface, read once at setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTarget {
    pub width: f64,
    pub height: f64,
}

impl DisplayTarget {
    #[must_use]
    pub fn of(canvas: &HtmlCanvasElement) -> Self {
        Self {
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        }
    }
}

/// Look up the 2D context of `canvas`.
///
/// # Errors
///
/// Returns [`EnhanceError::ContextUnavailable`] when the browser has no 2D
/// context for the element (or it already carries a different one).
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, EnhanceError> {
    let unavailable = || EnhanceError::ContextUnavailable { id: canvas.id() };
    canvas
        .get_context("2d")?
        .ok_or_else(unavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| unavailable())
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
    target: DisplayTarget,
    image_size: (f64, f64),
}

impl CanvasSurface {
    /// Bind a decoded image to the context. Call only after the image's
    /// `load` event; before that its natural size is zero.
    #[must_use]
    pub fn new(
        ctx: CanvasRenderingContext2d,
        image: HtmlImageElement,
        target: DisplayTarget,
    ) -> Self {
        let image_size = (
            f64::from(image.natural_width()),
            f64::from(image.natural_height()),
        );
        Self {
            ctx,
            image,
            target,
            image_size,
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.target.width, self.target.height)
    }

    fn image_size(&self) -> (f64, f64) {
        self.image_size
    }

    fn clear(&mut self) {
        let DisplayTarget { width, height } = self.target;
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), EnhanceError> {
        Ok(self.ctx.translate(x, y)?)
    }

    fn rotate(&mut self, radians: f64) -> Result<(), EnhanceError> {
        Ok(self.ctx.rotate(radians)?)
    }

    fn draw_image(&mut self, x: f64, y: f64) -> Result<(), EnhanceError> {
        let image = &self.image;
        self.ctx.draw_image_with_html_image_element(image, x, y)?;
        Ok(())
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
