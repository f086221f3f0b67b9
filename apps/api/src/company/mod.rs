//! Company Information Resolver - fetches raw company background and coerces
//! it into a `CompanyProfile`.
//!
//! Flow: search (raw data) → format (schema coercion) → parse.
//! Two sequential round-trips, no retry, no caching.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::company::CompanyProfile;

pub mod client;
pub mod handlers;
pub mod parse;

pub use client::HttpCompanyDataSource;

#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Failed to {step} company data: {reason}")]
    UpstreamFetch { step: &'static str, reason: String },

    #[error("Malformed company data: {0}")]
    MalformedResponse(String),
}

/// The two upstream steps the resolver depends on.
#[async_trait]
pub trait CompanyDataSource: Send + Sync {
    /// Raw, unspecified-shape background data for a company.
    async fn search(&self, company_name: &str) -> Result<Value, CompanyError>;

    /// Asks the formatter to coerce `raw` into the profile schema.
    /// Returns the formatter's full response body (`{ "result": ... }`).
    async fn format(&self, raw: &Value) -> Result<Value, CompanyError>;
}

pub async fn resolve_company(
    source: &dyn CompanyDataSource,
    company_name: &str,
) -> Result<CompanyProfile, CompanyError> {
    info!("Fetching company data for '{company_name}'");
    let raw = source.search(company_name).await?;

    if is_empty_payload(&raw) {
        warn!("Retrieved company data for '{company_name}' is empty");
    }

    info!("Formatting company data for '{company_name}'");
    let formatted = source.format(&raw).await?;

    let profile = parse::parse_format_response(&formatted)?;
    info!(
        "Resolved company profile for '{}' ({} values)",
        company_name,
        profile.values.pairs().len()
    );
    Ok(profile)
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
