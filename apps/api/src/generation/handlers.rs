//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::company::resolve_company;
use crate::errors::AppError;
use crate::generation::orchestrator::generate_content;
use crate::generation::store::{delete_generation, get_generation, list_generations, save_generation};
use crate::models::generation::{SavedGeneration, UserInput};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub user_id: String,
    pub input: UserInput,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generations
///
/// Full pipeline: resolve company → generate all three artifacts → persist.
/// Nothing is stored unless every step succeeds, so a failed request can be
/// resubmitted as-is.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<SavedGeneration>), AppError> {
    validate_input(&request.input)?;

    let company = resolve_company(state.company.as_ref(), &request.input.company_name).await?;
    let output = generate_content(state.llm.as_ref(), &request.input, &company).await?;
    let saved = save_generation(&state.db, &request.user_id, request.input, output).await?;

    info!("Saved generation {} for user {}", saved.id, saved.user_id);
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/generations?userId=
pub async fn handle_list_generations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SavedGeneration>>, AppError> {
    Ok(Json(list_generations(&state.db, &params.user_id).await?))
}

/// GET /api/v1/generations/:id?userId=
pub async fn handle_get_generation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedGeneration>, AppError> {
    Ok(Json(get_generation(&state.db, &params.user_id, id).await?))
}

/// DELETE /api/v1/generations/:id?userId=
pub async fn handle_delete_generation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    delete_generation(&state.db, &params.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_input(input: &UserInput) -> Result<(), AppError> {
    let fields = [
        ("resume", &input.resume),
        ("jobDescription", &input.job_description),
        ("companyName", &input.company_name),
        ("jobTitle", &input.job_title),
    ];

    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(AppError::Validation(format!("{name} cannot be empty"))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> UserInput {
        UserInput {
            resume: "R".to_string(),
            job_description: "JD".to_string(),
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
        }
    }

    #[test]
    fn test_validate_input_accepts_complete_input() {
        assert!(validate_input(&input()).is_ok());
    }

    #[test]
    fn test_validate_input_names_first_blank_field() {
        let mut blank = input();
        blank.company_name = "   ".to_string();
        match validate_input(&blank) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "companyName cannot be empty"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_request_deserialization() {
        let json = serde_json::json!({
            "userId": "user-1",
            "input": {
                "resume": "R",
                "jobDescription": "JD",
                "companyName": "Acme",
                "jobTitle": "Engineer"
            }
        });
        let request: GenerateRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.user_id, "user-1");
        assert_eq!(request.input, input());
    }
}
