//! Token balances. One token buys one live mock interview.
//!
//! Balances are only ever changed with single atomic statements so concurrent
//! deductions cannot drive a balance below zero.

use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::account::TokenBalanceRow;

/// Returns the user's balance, creating a zero balance on first access.
pub async fn get_balance(pool: &PgPool, user_id: &str) -> Result<i64, AppError> {
    let row = sqlx::query_as::<_, TokenBalanceRow>(
        r#"
        INSERT INTO token_balances (user_id, balance, last_updated)
        VALUES ($1, 0, now())
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING user_id, balance, last_updated
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.balance)
}

/// Spends one token. Returns `false` if the user has none.
pub async fn deduct_token(pool: &PgPool, user_id: &str) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE token_balances
        SET balance = balance - 1, last_updated = now()
        WHERE user_id = $1 AND balance >= 1
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    let deducted = result.rows_affected() == 1;
    if deducted {
        info!("Deducted 1 token from user {user_id}");
    }
    Ok(deducted)
}

/// Credits `amount` tokens, creating the balance row if needed.
pub async fn add_tokens(pool: &PgPool, user_id: &str, amount: i64) -> Result<i64, AppError> {
    validate_credit_amount(amount)?;

    let row = sqlx::query_as::<_, TokenBalanceRow>(
        r#"
        INSERT INTO token_balances (user_id, balance, last_updated)
        VALUES ($1, $2, now())
        ON CONFLICT (user_id) DO UPDATE
            SET balance = token_balances.balance + EXCLUDED.balance,
                last_updated = now()
        RETURNING user_id, balance, last_updated
        "#,
    )
    .bind(user_id)
    .bind(amount)
    .fetch_one(pool)
    .await?;

    info!("Credited {amount} tokens to user {user_id} (balance {})", row.balance);
    Ok(row.balance)
}

fn validate_credit_amount(amount: i64) -> Result<(), AppError> {
    if amount <= 0 {
        return Err(AppError::Validation(format!(
            "Token amount must be positive, got {amount}"
        )));
    }
    Ok(())
}
