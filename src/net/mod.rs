//! HTTP helpers for the endpoints the page talks to programmatically.
//!
//! The download endpoint is not here: it is reached by a native form post.

pub mod api;
