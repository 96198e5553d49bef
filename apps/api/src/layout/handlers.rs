//! Axum route handlers for the Layout API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::fitter::{fit_target, FitOutcome, FitRange, FitTarget};
use crate::layout::font_metrics::{get_metrics, FontFamily};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FitRequest {
    pub text: String,
    pub container_width_px: f32,
    pub font: FontFamily,
    pub range: FitRange,
}

#[derive(Debug, Serialize)]
pub struct FitResponse {
    /// False when the inputs were degenerate and the caller should keep its current size.
    pub applied: bool,
    pub outcome: Option<FitOutcome>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout/fit
///
/// Fits a single text line. Degenerate geometry, empty text or a range that is
/// unusable (including one with too many steps) is never an error: the response
/// reports `applied: false`.
pub async fn handle_fit(Json(request): Json<FitRequest>) -> Json<FitResponse> {
    let target = FitTarget {
        text: request.text,
        container_width_px: request.container_width_px,
        range: request.range,
    };
    let outcome = fit_target(&target, get_metrics(&request.font));

    debug!(
        font = ?request.font,
        container_width_px = target.container_width_px,
        font_size_px = outcome.map(|o| o.font_size_px),
        "Fitted single line"
    );

    Json(FitResponse {
        applied: outcome.is_some(),
        outcome,
    })
}
