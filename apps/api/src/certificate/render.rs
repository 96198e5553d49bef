//! Certificate document rendering.
//!
//! Applying fitted sizes happens here: each adaptive line gets an inline
//! `font-size` / `line-height` when its fit produced an outcome, and keeps the
//! stylesheet default otherwise.

use serde::Serialize;
use tera::{Context, Tera};
use uuid::Uuid;

use crate::certificate::models::{CertificateDetails, Signatory};
use crate::certificate::templates::{
    CERTIFICATE_TEMPLATE, CERTIFICATE_TEMPLATE_NAME, PRINT_TEMPLATE, PRINT_TEMPLATE_NAME,
};
use crate::errors::AppError;
use crate::layout::{CertificateField, FitReport, FontFamily};

/// Outer geometry of the certificate frame, in CSS pixels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameGeometry {
    pub width_px: f32,
    pub border_px: f32,
    pub padding_px: f32,
}

impl FrameGeometry {
    /// Width left for a text line once border and padding are taken on both sides.
    pub fn content_width_px(&self) -> f32 {
        (self.width_px - 2.0 * (self.border_px + self.padding_px)).max(0.0)
    }
}

#[derive(Serialize)]
struct LineView {
    text: String,
    font: &'static str,
    fit: Option<String>,
}

#[derive(Serialize)]
struct SignerView<'a> {
    role: &'static str,
    name: &'a str,
    title: &'a str,
    signature: Option<&'a str>,
}

#[derive(Serialize)]
struct CertificateView<'a> {
    certificate_id: Uuid,
    width_px: f32,
    border_px: f32,
    padding_px: f32,
    body_font: &'static str,
    college: LineView,
    student: LineView,
    event: LineView,
    certificate_type: &'static str,
    held_on: String,
    /// Coordinator on the left, authority on the right.
    signatories: [SignerView<'a>; 2],
}

pub struct CertificateRenderer {
    tera: Tera,
}

impl CertificateRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (CERTIFICATE_TEMPLATE_NAME, CERTIFICATE_TEMPLATE),
            (PRINT_TEMPLATE_NAME, PRINT_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// The certificate fragment shown in the preview pane.
    pub fn render_preview(
        &self,
        certificate_id: Uuid,
        details: &CertificateDetails,
        report: &FitReport,
        geometry: &FrameGeometry,
    ) -> Result<String, AppError> {
        self.render(
            CERTIFICATE_TEMPLATE_NAME,
            certificate_id,
            details,
            report,
            geometry,
        )
    }

    /// A standalone landscape page wrapping the certificate, ready for the print dialog.
    pub fn render_print(
        &self,
        certificate_id: Uuid,
        details: &CertificateDetails,
        report: &FitReport,
        geometry: &FrameGeometry,
    ) -> Result<String, AppError> {
        self.render(PRINT_TEMPLATE_NAME, certificate_id, details, report, geometry)
    }

    fn render(
        &self,
        template: &str,
        certificate_id: Uuid,
        details: &CertificateDetails,
        report: &FitReport,
        geometry: &FrameGeometry,
    ) -> Result<String, AppError> {
        let view = build_view(certificate_id, details, report, geometry);
        let context = Context::from_serialize(&view)?;
        Ok(self.tera.render(template, &context)?)
    }
}

fn line(field: CertificateField, details: &CertificateDetails, report: &FitReport) -> LineView {
    LineView {
        text: field.display_text(details.raw_text(field)),
        font: field.font().css_stack(),
        fit: report.css_for(field),
    }
}

fn build_view<'a>(
    certificate_id: Uuid,
    details: &'a CertificateDetails,
    report: &FitReport,
    geometry: &FrameGeometry,
) -> CertificateView<'a> {
    let signer = |role, s: &'a Signatory| SignerView {
        role,
        name: &s.name,
        title: &s.title,
        signature: s.signature.as_deref(),
    };

    CertificateView {
        certificate_id,
        width_px: geometry.width_px,
        border_px: geometry.border_px,
        padding_px: geometry.padding_px,
        body_font: FontFamily::TimesNewRoman.css_stack(),
        college: line(CertificateField::CollegeName, details, report),
        student: line(CertificateField::StudentName, details, report),
        event: line(CertificateField::EventName, details, report),
        certificate_type: details.certificate_type.label(),
        held_on: details.formatted_date(),
        signatories: [
            signer("Coordinator", &details.coordinator),
            signer("Authority", &details.authority),
        ],
    }
}
