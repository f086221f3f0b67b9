//! Persistence of completed generations. Only whole results are ever written.

use chrono::{SubsecRound, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::generation::{GeneratedContent, GenerationRow, SavedGeneration, UserInput};

pub async fn save_generation(
    pool: &PgPool,
    user_id: &str,
    input: UserInput,
    output: GeneratedContent,
) -> Result<SavedGeneration, AppError> {
    let generation = new_generation(user_id, input, output);

    sqlx::query(
        r#"
        INSERT INTO generations (id, user_id, input, output, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(generation.id)
    .bind(&generation.user_id)
    .bind(Json(&generation.input))
    .bind(Json(&generation.output))
    .bind(generation.timestamp)
    .execute(pool)
    .await?;

    Ok(generation)
}

fn new_generation(user_id: &str, input: UserInput, output: GeneratedContent) -> SavedGeneration {
    SavedGeneration {
        id: Uuid::new_v4(),
        // timestamptz keeps microseconds
        timestamp: Utc::now().trunc_subsecs(6),
        input,
        output,
        user_id: user_id.to_string(),
    }
}

/// All of a user's generations, newest first.
pub async fn list_generations(pool: &PgPool, user_id: &str) -> Result<Vec<SavedGeneration>, AppError> {
    let rows = sqlx::query_as::<_, GenerationRow>(
        "SELECT * FROM generations WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SavedGeneration::from).collect())
}

pub async fn get_generation(
    pool: &PgPool,
    user_id: &str,
    id: Uuid,
) -> Result<SavedGeneration, AppError> {
    sqlx::query_as::<_, GenerationRow>("SELECT * FROM generations WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .map(SavedGeneration::from)
        .ok_or_else(|| AppError::NotFound(format!("Generation {id} not found")))
}

pub async fn delete_generation(pool: &PgPool, user_id: &str, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM generations WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Generation {id} not found")));
    }
    Ok(())
}
