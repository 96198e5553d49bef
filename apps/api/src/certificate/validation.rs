use thiserror::Error;

use crate::certificate::models::{CertificateDetails, Signatory};
use crate::errors::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all the required fields.";

/// Reasons an embedded signature image is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum SignatureError {
    #[error("expected a data: URL")]
    NotDataUrl,
    #[error("media type '{0}' is not an image")]
    NotImage(String),
    #[error("payload must be base64-encoded")]
    NotBase64,
    #[error("image payload is empty")]
    Empty,
    #[error("image is {bytes} bytes, limit is {limit}")]
    TooLarge { bytes: usize, limit: usize },
}

/// Names of required form fields that are blank.
pub fn missing_required_fields(details: &CertificateDetails) -> Vec<&'static str> {
    [
        ("student_name", &details.student_name),
        ("event_name", &details.event_name),
        ("college_name", &details.college_name),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}

/// Checks an embedded `data:image/<subtype>;base64,<payload>` URL.
///
/// The decoded size is estimated from the payload length; nothing is decoded.
pub fn validate_signature_data_url(url: &str, max_bytes: usize) -> Result<(), SignatureError> {
    let rest = url.strip_prefix("data:").ok_or(SignatureError::NotDataUrl)?;
    let (meta, payload) = rest.split_once(',').ok_or(SignatureError::NotDataUrl)?;

    let media_type = meta.split(';').next().unwrap_or_default();
    if !media_type.starts_with("image/") || media_type.len() <= "image/".len() {
        return Err(SignatureError::NotImage(media_type.to_string()));
    }
    if !meta.split(';').skip(1).any(|param| param == "base64") {
        return Err(SignatureError::NotBase64);
    }

    let payload = payload.trim_end_matches('=');
    if payload.is_empty() {
        return Err(SignatureError::Empty);
    }
    if !payload
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
    {
        return Err(SignatureError::NotBase64);
    }

    let bytes = payload.len() * 3 / 4;
    if bytes > max_bytes {
        return Err(SignatureError::TooLarge {
            bytes,
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Validates a form snapshot before it is fitted and rendered.
pub fn validate_certificate(
    details: &CertificateDetails,
    max_signature_bytes: usize,
) -> Result<(), AppError> {
    let missing = missing_required_fields(details);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "{REQUIRED_FIELDS_MESSAGE} Missing: {}",
            missing.join(", ")
        )));
    }

    check_signatory("authority", &details.authority, max_signature_bytes)?;
    check_signatory("coordinator", &details.coordinator, max_signature_bytes)?;
    Ok(())
}

fn check_signatory(role: &str, signatory: &Signatory, max_bytes: usize) -> Result<(), AppError> {
    match &signatory.signature {
        Some(url) => validate_signature_data_url(url, max_bytes)
            .map_err(|e| AppError::UnprocessableEntity(format!("{role} signature: {e}"))),
        None => Ok(()),
    }
}
