use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document backend. Default: UploadTextExtractor (PDF + plain text).
    pub extractor: Arc<dyn DocumentExtractor>,
}
