//! Axum route handlers for the Certificate API.

use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::certificate::models::{CertificateDetails, CertificateType};
use crate::certificate::validation::validate_certificate;
use crate::errors::AppError;
use crate::layout::{fit_certificate_fields, FitReport, LayoutSnapshot};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CertificateRequest {
    pub certificate: CertificateDetails,
    /// Container widths measured by the client after its layout settled.
    #[serde(default)]
    pub layout: LayoutSnapshot,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub certificate_id: Uuid,
    pub fit_report: FitReport,
    pub html: String,
    pub download_filename: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/certificates/defaults
///
/// Initial form values.
pub async fn handle_defaults() -> Json<CertificateDetails> {
    Json(CertificateDetails::default())
}

/// GET /api/v1/certificates/types
pub async fn handle_types() -> Json<Vec<CertificateType>> {
    Json(CertificateType::ALL.to_vec())
}

/// POST /api/v1/certificates/preview
///
/// Validates the form snapshot, fits the adaptive lines, and renders the preview fragment.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<CertificateRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let (details, fit_report) = prepare(&state, request).await?;
    let certificate_id = Uuid::new_v4();
    let geometry = state.config.frame_geometry();

    let html = state
        .renderer
        .render_preview(certificate_id, &details, &fit_report, &geometry)?;

    info!(%certificate_id, kind = details.certificate_type.label(), "Rendered certificate preview");

    Ok(Json(PreviewResponse {
        certificate_id,
        fit_report,
        html,
        download_filename: details.download_filename(),
    }))
}

/// POST /api/v1/certificates/print
///
/// Same pipeline as preview, returning a standalone landscape document for printing.
pub async fn handle_print(
    State(state): State<AppState>,
    Json(request): Json<CertificateRequest>,
) -> Result<Html<String>, AppError> {
    let (details, fit_report) = prepare(&state, request).await?;
    let certificate_id = Uuid::new_v4();
    let geometry = state.config.frame_geometry();

    let html = state
        .renderer
        .render_print(certificate_id, &details, &fit_report, &geometry)?;

    info!(%certificate_id, "Rendered print document");
    Ok(Html(html))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Validation followed by the fit pass on the blocking pool.
async fn prepare(
    state: &AppState,
    request: CertificateRequest,
) -> Result<(CertificateDetails, FitReport), AppError> {
    let CertificateRequest {
        certificate: details,
        layout,
    } = request;

    validate_certificate(&details, state.config.max_signature_bytes)?;

    let texts = details.adaptive_texts();
    let content_width_px = state.config.frame_geometry().content_width_px();
    let fit_report = tokio::task::spawn_blocking(move || {
        fit_certificate_fields(&texts, &layout, content_width_px)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in fit pass: {e}")))?;

    let overflowing: Vec<_> = fit_report.overflowing().map(|f| f.field).collect();
    if !overflowing.is_empty() {
        warn!(
            fields = ?overflowing,
            "Certificate text overflows at minimum font size"
        );
    }

    Ok((details, fit_report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    fn request(details: CertificateDetails) -> CertificateRequest {
        CertificateRequest {
            certificate: details,
            layout: LayoutSnapshot::default(),
        }
    }

    #[tokio::test]
    async fn test_defaults_match_initial_form() {
        let Json(details) = handle_defaults().await;
        assert_eq!(details.student_name, "JANE DOE");
        assert_eq!(details.college_name, "TECH UNIVERSITY");
        assert_eq!(details.certificate_type, CertificateType::Participation);
    }

    #[tokio::test]
    async fn test_types_lists_all_options() {
        let Json(types) = handle_types().await;
        assert_eq!(types.len(), 4);
    }

    #[tokio::test]
    async fn test_preview_returns_fit_report_and_html() {
        let Json(response) = handle_preview(
            State(test_state()),
            Json(request(CertificateDetails::default())),
        )
        .await
        .unwrap();

        assert_eq!(response.fit_report.fields.len(), 3);
        assert!(response.html.contains("JANE DOE"));
        assert_eq!(response.download_filename, "Certificate_JANE_DOE.png");
        assert!(response
            .html
            .contains(&response.certificate_id.to_string()));
    }

    #[tokio::test]
    async fn test_preview_uses_reported_container_widths() {
        let details = CertificateDetails {
            college_name: "International Institute of Information Technology".to_string(),
            ..CertificateDetails::default()
        };
        let req = CertificateRequest {
            certificate: details,
            layout: LayoutSnapshot {
                college_name_px: Some(400.0),
                ..LayoutSnapshot::default()
            },
        };
        let Json(response) = handle_preview(State(test_state()), Json(req)).await.unwrap();
        let college = response
            .fit_report
            .get(crate::layout::CertificateField::CollegeName)
            .unwrap();
        assert_eq!(college.container_width_px, 400.0);
        assert!(college.outcome.unwrap().font_size_px < 40.0);
    }

    #[tokio::test]
    async fn test_preview_rejects_missing_fields() {
        let details = CertificateDetails {
            event_name: String::new(),
            ..CertificateDetails::default()
        };
        let result = handle_preview(State(test_state()), Json(request(details))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_print_returns_full_document() {
        let Html(html) = handle_print(
            State(test_state()),
            Json(request(CertificateDetails::default())),
        )
        .await
        .unwrap();
        assert!(html.contains("<title>Print Certificate</title>"));
    }
}
