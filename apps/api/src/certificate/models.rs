use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::layout::CertificateField;

/// Certificate headline shown under the college name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CertificateType {
    #[default]
    #[serde(rename = "Certificate of Participation")]
    Participation,
    #[serde(rename = "Certificate of Achievement")]
    Achievement,
    #[serde(rename = "Winner's Certificate")]
    Winner,
    #[serde(rename = "Volunteer Certificate")]
    Volunteer,
}

impl CertificateType {
    pub const ALL: [CertificateType; 4] = [
        CertificateType::Participation,
        CertificateType::Achievement,
        CertificateType::Winner,
        CertificateType::Volunteer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CertificateType::Participation => "Certificate of Participation",
            CertificateType::Achievement => "Certificate of Achievement",
            CertificateType::Winner => "Winner's Certificate",
            CertificateType::Volunteer => "Volunteer Certificate",
        }
    }
}

/// A person signing the certificate.
///
/// `signature` is an embedded image (`data:image/png;base64,...`) produced by the
/// form's file picker; it is optional and rendered above the name rule when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signatory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub signature: Option<String>,
}

impl Signatory {
    fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            signature: None,
        }
    }
}

fn default_authority() -> Signatory {
    Signatory::new("Dr. Alan Smith", "Head of Department")
}

fn default_coordinator() -> Signatory {
    Signatory::new("Prof. Susan Jones", "Staff Coordinator")
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Snapshot of the certificate form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateDetails {
    pub student_name: String,
    pub event_name: String,
    pub college_name: String,
    #[serde(default = "today")]
    pub date: NaiveDate,
    #[serde(default)]
    pub certificate_type: CertificateType,
    #[serde(default = "default_authority")]
    pub authority: Signatory,
    #[serde(default = "default_coordinator")]
    pub coordinator: Signatory,
}

impl Default for CertificateDetails {
    fn default() -> Self {
        Self {
            student_name: "JANE DOE".to_string(),
            event_name: "NATIONAL LEVEL TECHNICAL SYMPOSIUM".to_string(),
            college_name: "TECH UNIVERSITY".to_string(),
            date: today(),
            certificate_type: CertificateType::default(),
            authority: default_authority(),
            coordinator: default_coordinator(),
        }
    }
}

impl CertificateDetails {
    /// The form value behind an adaptive line, before any display transform.
    pub fn raw_text(&self, field: CertificateField) -> &str {
        match field {
            CertificateField::CollegeName => &self.college_name,
            CertificateField::StudentName => &self.student_name,
            CertificateField::EventName => &self.event_name,
        }
    }

    /// Raw values of the fields that get shrink-to-fit treatment.
    pub fn adaptive_texts(&self) -> Vec<(CertificateField, String)> {
        CertificateField::ALL
            .iter()
            .map(|field| (*field, self.raw_text(*field).to_string()))
            .collect()
    }

    /// Event date as printed, e.g. "March 7, 2026".
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// Suggested name for the rasterized download.
    pub fn download_filename(&self) -> String {
        format!("Certificate_{}.png", self.student_name.replace(' ', "_"))
    }
}
