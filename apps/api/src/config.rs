use anyhow::{Context, Result};

use crate::certificate::FrameGeometry;

/// Border drawn around the certificate face, in CSS pixels.
const FRAME_BORDER_PX: f32 = 10.0;

/// Allowance for everything in a certificate request besides the two signatures.
const REQUEST_FIELDS_ALLOWANCE_BYTES: usize = 64 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Outer width of the rendered certificate (11in landscape at 96dpi by default).
    pub certificate_width_px: f32,
    /// Border plus padding on each side of the certificate face.
    pub frame_inset_px: f32,
    /// Upper bound on a decoded signature image.
    pub max_signature_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            certificate_width_px: parse_env("CERTIFICATE_WIDTH_PX", 1056.0)?,
            frame_inset_px: parse_env("CERTIFICATE_FRAME_INSET_PX", 50.0)?,
            max_signature_bytes: parse_env("MAX_SIGNATURE_BYTES", 2 * 1024 * 1024)?,
        };

        anyhow::ensure!(
            config.certificate_width_px > 0.0,
            "CERTIFICATE_WIDTH_PX must be positive"
        );
        anyhow::ensure!(
            config.frame_inset_px >= FRAME_BORDER_PX,
            "CERTIFICATE_FRAME_INSET_PX must be at least the {FRAME_BORDER_PX}px border"
        );
        Ok(config)
    }

    pub fn frame_geometry(&self) -> FrameGeometry {
        FrameGeometry {
            width_px: self.certificate_width_px,
            border_px: FRAME_BORDER_PX,
            padding_px: self.frame_inset_px - FRAME_BORDER_PX,
        }
    }

    /// Largest JSON body accepted: two base64 signatures at the size limit plus
    /// the remaining form fields.
    pub fn request_body_limit(&self) -> usize {
        let encoded_signature = self.max_signature_bytes.div_ceil(3).saturating_mul(4);
        encoded_signature
            .saturating_mul(2)
            .saturating_add(REQUEST_FIELDS_ALLOWANCE_BYTES)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            certificate_width_px: 1056.0,
            frame_inset_px: 50.0,
            max_signature_bytes: 2 * 1024 * 1024,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
