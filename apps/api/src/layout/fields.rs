//! Shrink-to-fit profiles for the three adaptive lines on the certificate face.
//!
//! Each field is fitted independently against its own container with its own range.

use serde::{Deserialize, Serialize};

use crate::layout::fitter::{fit_target, FitOutcome, FitRange, FitTarget};
use crate::layout::font_metrics::{get_metrics, FontFamily};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateField {
    /// Issuing institution, printed upper-cased across the top.
    CollegeName,
    /// Recipient name, script face.
    StudentName,
    /// Event title, the longest of the three lines.
    EventName,
}

impl CertificateField {
    pub const ALL: [CertificateField; 3] = [
        CertificateField::CollegeName,
        CertificateField::StudentName,
        CertificateField::EventName,
    ];

    pub fn fit_range(&self) -> FitRange {
        match self {
            CertificateField::CollegeName => FitRange::new(40.0, 24.0, 1.0),
            CertificateField::StudentName => FitRange::new(36.0, 18.0, 1.0),
            CertificateField::EventName => FitRange::new(22.0, 14.0, 1.0),
        }
    }

    pub fn font(&self) -> FontFamily {
        match self {
            CertificateField::CollegeName => FontFamily::Garamond,
            CertificateField::StudentName => FontFamily::BrushScript,
            CertificateField::EventName => FontFamily::TimesNewRoman,
        }
    }

    /// The text as it appears on the certificate.
    pub fn display_text(&self, raw: &str) -> String {
        match self {
            CertificateField::CollegeName => raw.trim().to_uppercase(),
            CertificateField::StudentName | CertificateField::EventName => raw.trim().to_string(),
        }
    }
}

/// Container widths reported by the presentation layer once its layout has settled.
///
/// Missing or non-positive entries fall back to the configured certificate content width.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub college_name_px: Option<f32>,
    pub student_name_px: Option<f32>,
    pub event_name_px: Option<f32>,
}

impl LayoutSnapshot {
    pub fn container_width(&self, field: CertificateField, fallback_px: f32) -> f32 {
        let reported = match field {
            CertificateField::CollegeName => self.college_name_px,
            CertificateField::StudentName => self.student_name_px,
            CertificateField::EventName => self.event_name_px,
        };
        reported
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(fallback_px)
    }
}

/// Fitted result for one field. `outcome` is `None` when the fit was a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldFit {
    pub field: CertificateField,
    pub text: String,
    pub container_width_px: f32,
    pub outcome: Option<FitOutcome>,
}

/// Per-certificate fit pass over all adaptive fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub fields: Vec<FieldFit>,
}

impl FitReport {
    pub fn get(&self, field: CertificateField) -> Option<&FieldFit> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Inline style for a field, or `None` to leave the presentation default in place.
    pub fn css_for(&self, field: CertificateField) -> Option<String> {
        self.get(field)
            .and_then(|f| f.outcome.as_ref())
            .map(FitOutcome::css)
    }

    pub fn overflowing(&self) -> impl Iterator<Item = &FieldFit> {
        self.fields
            .iter()
            .filter(|f| f.outcome.map_or(false, |o| o.overflows))
    }
}

/// Fits every adaptive field. `texts` yields the raw (untransformed) field values.
pub fn fit_certificate_fields(
    texts: &[(CertificateField, String)],
    snapshot: &LayoutSnapshot,
    content_width_px: f32,
) -> FitReport {
    let fields = texts
        .iter()
        .map(|(field, raw)| {
            let target = FitTarget {
                text: field.display_text(raw),
                container_width_px: snapshot.container_width(*field, content_width_px),
                range: field.fit_range(),
            };
            let outcome = fit_target(&target, get_metrics(&field.font()));
            FieldFit {
                field: *field,
                text: target.text,
                container_width_px: target.container_width_px,
                outcome,
            }
        })
        .collect();

    FitReport { fields }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn default_texts() -> Vec<(CertificateField, String)> {
        vec![
            (CertificateField::CollegeName, "Tech University".to_string()),
            (CertificateField::StudentName, "JANE DOE".to_string()),
            (
                CertificateField::EventName,
                "NATIONAL LEVEL TECHNICAL SYMPOSIUM".to_string(),
            ),
        ]
    }

    #[test]
    fn test_ranges_are_independent_and_usable() {
        for field in CertificateField::ALL {
            assert!(field.fit_range().is_usable(), "{field:?}");
        }
        assert_eq!(CertificateField::CollegeName.fit_range().max_px, 40.0);
        assert_eq!(CertificateField::StudentName.fit_range().min_px, 18.0);
        assert_eq!(CertificateField::EventName.fit_range().max_px, 22.0);
    }

    #[test]
    fn test_college_name_is_upper_cased_for_display() {
        assert_eq!(
            CertificateField::CollegeName.display_text("  Tech University "),
            "TECH UNIVERSITY"
        );
        assert_eq!(CertificateField::StudentName.display_text(" Jane Doe "), "Jane Doe");
    }

    #[test]
    fn test_snapshot_overrides_fallback_only_when_positive() {
        let snapshot = LayoutSnapshot {
            college_name_px: Some(600.0),
            student_name_px: Some(0.0),
            event_name_px: None,
        };
        assert_eq!(snapshot.container_width(CertificateField::CollegeName, 956.0), 600.0);
        assert_eq!(snapshot.container_width(CertificateField::StudentName, 956.0), 956.0);
        assert_eq!(snapshot.container_width(CertificateField::EventName, 956.0), 956.0);
    }

    #[test]
    fn test_default_certificate_fits_at_max_sizes() {
        let report = fit_certificate_fields(&default_texts(), &LayoutSnapshot::default(), 956.0);
        assert_eq!(report.fields.len(), 3);
        for fit in &report.fields {
            let outcome = fit.outcome.expect("default text should be fitted");
            assert_eq!(outcome.font_size_px, fit.field.fit_range().max_px, "{:?}", fit.field);
            assert!(!outcome.overflows);
        }
        assert_eq!(report.overflowing().count(), 0);
    }

    #[test]
    fn test_narrow_container_shrinks_only_that_field() {
        let snapshot = LayoutSnapshot {
            event_name_px: Some(300.0),
            ..LayoutSnapshot::default()
        };
        let report = fit_certificate_fields(&default_texts(), &snapshot, 956.0);
        let event = report.get(CertificateField::EventName).unwrap();
        let college = report.get(CertificateField::CollegeName).unwrap();
        assert!(event.outcome.unwrap().font_size_px < 22.0);
        assert_eq!(college.outcome.unwrap().font_size_px, 40.0);
    }

    #[test]
    fn test_zero_content_width_leaves_sizes_unchanged() {
        let report = fit_certificate_fields(&default_texts(), &LayoutSnapshot::default(), 0.0);
        for field in CertificateField::ALL {
            assert!(report.css_for(field).is_none(), "{field:?}");
        }
    }

    #[test]
    fn test_css_for_fitted_field() {
        let report = fit_certificate_fields(&default_texts(), &LayoutSnapshot::default(), 956.0);
        assert_eq!(
            report.css_for(CertificateField::StudentName).as_deref(),
            Some("font-size: 36px; line-height: 43.2px")
        );
    }
}
