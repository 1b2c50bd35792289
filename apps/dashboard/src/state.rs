use std::sync::Arc;

use crate::config::Config;
use crate::source::RecordSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record producer. Default: `HttpRecordSource` against the
    /// ranking backend; tests swap in `StaticRecordSource`.
    pub source: Arc<dyn RecordSource>,
    pub config: Config,
}
