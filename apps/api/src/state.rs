use std::sync::Arc;

use sqlx::PgPool;

use crate::company::CompanyDataSource;
use crate::llm_client::TextGenerator;
use crate::mock_interview::relay::RealtimeRelay;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Text-generation provider. `LlmClient` in production.
    pub llm: Arc<dyn TextGenerator>,
    /// Company search/format collaborator. `HttpCompanyDataSource` in production.
    pub company: Arc<dyn CompanyDataSource>,
    pub relay: RealtimeRelay,
}
