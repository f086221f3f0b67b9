pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::company::handlers as company;
use crate::generation::handlers as generation;
use crate::mock_interview::handlers as mock_interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Company profile
        .route("/api/v1/company", get(company::handle_get_company))
        // Generations
        .route(
            "/api/v1/generations",
            post(generation::handle_generate).get(generation::handle_list_generations),
        )
        .route(
            "/api/v1/generations/:id",
            get(generation::handle_get_generation).delete(generation::handle_delete_generation),
        )
        // Accounts
        .route("/api/v1/tokens/:user_id", get(accounts::handle_get_balance))
        .route(
            "/api/v1/tokens/:user_id/credit",
            post(accounts::handle_credit_tokens),
        )
        .route(
            "/api/v1/users/:user_id/resume",
            get(accounts::handle_get_default_resume).put(accounts::handle_save_default_resume),
        )
        // Live mock interview
        .route("/api/rtc-connect", post(mock_interview::handle_rtc_connect))
        .with_state(state)
}
