//! Rotation math and per-frame draw sequence, independent of the browser.
//!
//! [`RotationCore`] is what the animation loop in [`crate::renderer`] drives
//! once per display refresh. It talks to the canvas only through the
//! [`Surface`] trait so the frame ordering can be checked natively.

use crate::consts::FULL_TURN_DEG;
use crate::error::EnhanceError;

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

/// Rotation angle plus the fixed step applied after every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    rotation_deg: f64,
    speed_deg_per_frame: f64,
}

impl RenderState {
    #[must_use]
    pub fn new(speed_deg_per_frame: f64) -> Self {
        Self {
            rotation_deg: 0.0,
            speed_deg_per_frame,
        }
    }

    /// Current angle in degrees, always in `[0, 360)`.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    #[must_use]
    pub fn rotation_rad(&self) -> f64 {
        self.rotation_deg.to_radians()
    }

    #[must_use]
    pub fn speed_deg_per_frame(&self) -> f64 {
        self.speed_deg_per_frame
    }

    /// Step the angle forward by one frame, wrapping at a full turn.
    pub fn advance(&mut self) {
        self.rotation_deg = (self.rotation_deg + self.speed_deg_per_frame) % FULL_TURN_DEG;
    }
}

/// The drawing operations one frame needs.
///
/// Coordinates are in surface pixels. `draw_image` places the image's top-left
/// corner at `(x, y)` in the current transformed space.
pub trait Surface {
    /// Surface `(width, height)`, fixed for the lifetime of the animation.
    fn size(&self) -> (f64, f64);
    /// Decoded image `(width, height)`.
    fn image_size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn save(&mut self);
    /// # Errors
    /// Propagates a rejected canvas call.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), EnhanceError>;
    /// # Errors
    /// Propagates a rejected canvas call.
    fn rotate(&mut self, radians: f64) -> Result<(), EnhanceError>;
    /// # Errors
    /// Propagates a rejected canvas call.
    fn draw_image(&mut self, x: f64, y: f64) -> Result<(), EnhanceError>;
    fn restore(&mut self);
}

/// Draw the image centered on the surface at the current angle.
///
/// The surface is cleared first so nothing from the previous frame survives,
/// and the transform is restored even when a canvas call fails.
///
/// # Errors
///
/// Returns the first failing canvas call. The angle is not advanced in that case.
pub fn draw_frame<S: Surface>(
    state: &mut RenderState,
    surface: &mut S,
) -> Result<(), EnhanceError> {
    let (width, height) = surface.size();
    let (image_w, image_h) = surface.image_size();

    surface.clear();
    surface.save();
    let drawn = surface
        .translate(width / 2.0, height / 2.0)
        .and_then(|()| surface.rotate(state.rotation_rad()))
        .and_then(|()| surface.draw_image(-image_w / 2.0, -image_h / 2.0));
    surface.restore();
    drawn?;

    state.advance();
    Ok(())
}

/// Render state bound to its surface. One call to [`RotationCore::on_frame`]
/// per scheduled refresh.
pub struct RotationCore<S: Surface> {
    state: RenderState,
    surface: S,
    frames_drawn: u64,
}

impl<S: Surface> RotationCore<S> {
    #[must_use]
    pub fn new(surface: S, speed_deg_per_frame: f64) -> Self {
        Self {
            state: RenderState::new(speed_deg_per_frame),
            surface,
            frames_drawn: 0,
        }
    }

    /// Draw one frame and advance the angle.
    ///
    /// # Errors
    ///
    /// Propagates a failed canvas call from [`draw_frame`].
    pub fn on_frame(&mut self) -> Result<(), EnhanceError> {
        draw_frame(&mut self.state, &mut self.surface)?;
        self.frames_drawn += 1;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}
