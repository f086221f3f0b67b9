use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::account::UserRow;

/// Stores the user's default resume, replacing any previous one.
pub async fn save_default_resume(pool: &PgPool, user_id: &str, resume: &str) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO users (id, default_resume)
        VALUES ($1, $2)
        ON CONFLICT (id) DO UPDATE SET default_resume = EXCLUDED.default_resume
        "#,
    )
    .bind(user_id)
    .bind(resume)
    .execute(pool)
    .await?;

    Ok(())
}

/// The user's default resume, or an empty string if none was saved.
pub async fn get_default_resume(pool: &PgPool, user_id: &str) -> Result<String, AppError> {
    let user = sqlx::query_as::<_, UserRow>("SELECT id, default_resume FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user.and_then(|u| u.default_resume).unwrap_or_default())
}
