// Certificate form model, validation, and document rendering.
// Adaptive line sizes come from crate::layout; this module applies them.

pub mod handlers;
pub mod models;
pub mod render;
pub mod templates;
pub mod validation;

pub use render::{CertificateRenderer, FrameGeometry};
