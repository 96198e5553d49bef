// Adaptive text layout for the certificate face.
// Implements: font metric tables, shrink-to-fit sizing, per-field fit profiles.
// Fitting is pure; callers apply the resulting sizes to their presentation layer.

pub mod fields;
pub mod fitter;
pub mod font_metrics;
pub mod handlers;

// Re-export the public API consumed by other modules (certificate rendering, handlers).
pub use fields::{fit_certificate_fields, CertificateField, FitReport, LayoutSnapshot};
pub use font_metrics::FontFamily;
