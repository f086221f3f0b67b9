//! Axum route handlers for token balances and the default resume.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::accounts::default_resume::{get_default_resume, save_default_resume};
use crate::accounts::tokens::{add_tokens, get_balance};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub user_id: String,
    pub balance: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreditRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultResumeBody {
    pub resume: String,
}

/// GET /api/v1/tokens/:user_id
pub async fn handle_get_balance(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = get_balance(&state.db, &user_id).await?;
    Ok(Json(BalanceResponse { user_id, balance }))
}

/// POST /api/v1/tokens/:user_id/credit
///
/// Called once the payment provider has confirmed a purchase.
pub async fn handle_credit_tokens(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<CreditRequest>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = add_tokens(&state.db, &user_id, req.amount).await?;
    Ok(Json(BalanceResponse { user_id, balance }))
}

/// GET /api/v1/users/:user_id/resume
pub async fn handle_get_default_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DefaultResumeBody>, AppError> {
    let resume = get_default_resume(&state.db, &user_id).await?;
    Ok(Json(DefaultResumeBody { resume }))
}

/// PUT /api/v1/users/:user_id/resume
pub async fn handle_save_default_resume(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<DefaultResumeBody>,
) -> Result<StatusCode, AppError> {
    save_default_resume(&state.db, &user_id, &body.resume).await?;
    Ok(StatusCode::NO_CONTENT)
}
