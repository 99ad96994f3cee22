//! Shared constants for the page enhancements.

// ── Rotation ────────────────────────────────────────────────────

/// Degrees added to the rotation angle on every rendered frame.
pub const ROTATION_SPEED_DEG_PER_FRAME: f64 = 0.5;

/// One full turn. The rotation angle is always kept in `[0, FULL_TURN_DEG)`.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Page elements ───────────────────────────────────────────────

/// Canvas that displays the rendered visual hash.
pub const SURFACE_ID: &str = "visual-hash-canvas";

/// Text input holding the name the hash is generated from.
pub const NAME_INPUT_ID: &str = "name";

/// Button that asks the server for a random name.
pub const RANDOM_NAME_BUTTON_ID: &str = "random-name-btn";

/// Container that receives the injected download form.
pub const DOWNLOAD_CONTAINER_ID: &str = "download-btn-container";

/// Class of the "generate" submit control, nudged next to the download button.
pub const GENERATE_CLASS: &str = "generate";

/// Class of the "random name" control.
pub const RANDOM_NAME_CLASS: &str = "random-name";

/// Attribute on the surface carrying the image URL (usually a `data:` URL).
pub const IMAGE_ATTR: &str = "data-image";

/// Attribute on the surface carrying the name the image was generated from.
pub const NAME_ATTR: &str = "data-name";

// ── Endpoints ───────────────────────────────────────────────────

pub const RANDOM_NAME_ENDPOINT: &str = "/random-name";
pub const DOWNLOAD_ENDPOINT: &str = "/download-plot";

/// Form field the download endpoint reads the name from.
pub const DOWNLOAD_FIELD: &str = "name";

pub const DOWNLOAD_LABEL: &str = "Download";
