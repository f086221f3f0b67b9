use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::company::resolve_company;
use crate::errors::AppError;
use crate::models::company::CompanyProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompanyQuery {
    pub name: String,
}

/// GET /api/v1/company?name=
pub async fn handle_get_company(
    State(state): State<AppState>,
    Query(params): Query<CompanyQuery>,
) -> Result<Json<CompanyProfile>, AppError> {
    if params.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let profile = resolve_company(state.company.as_ref(), &params.name).await?;
    Ok(Json(profile))
}
