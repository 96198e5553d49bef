use std::sync::Arc;

use crate::certificate::CertificateRenderer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled certificate templates. Built once at startup.
    pub renderer: Arc<CertificateRenderer>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let renderer = CertificateRenderer::new()?;
        Ok(AppState {
            config,
            renderer: Arc::new(renderer),
        })
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(Config::default()).expect("embedded templates must compile")
}
