use std::sync::Arc;

use crate::analysis::roles::RoleCatalog;
use crate::analysis::strategy::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable after startup: analyses never share mutable
/// state, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Injected alias table + skill taxonomy. Swappable via ROLE_CATALOG_PATH.
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable scoring strategy. Default: DeterministicAnalyzer. Swap via
    /// ENABLE_LLM_SCORING env.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
