//! Test fixtures and data generators
//!
//! Accounts and users are inserted directly; the services only ever read them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use anyhow::Result;
use chrono::Utc;
use crm_core::{Snowflake, SnowflakeGenerator};
use crm_db::PgPool;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Fixture ids come from the highest worker id so they never collide with
/// ids minted by the service under test
pub fn fixture_id() -> Snowflake {
    static GENERATOR: OnceLock<SnowflakeGenerator> = OnceLock::new();
    GENERATOR.get_or_init(|| SnowflakeGenerator::new(1023)).generate()
}

/// A company name no other test uses
pub fn unique_company_name(base: &str) -> String {
    format!("{base} {}-{}", std::process::id(), unique_suffix())
}

/// An account with one member
#[derive(Debug, Clone, Copy)]
pub struct SeededAccount {
    pub account_id: Snowflake,
    pub author_id: Snowflake,
}

/// Insert an account and a user belonging to it
pub async fn seed_account(pool: &PgPool) -> Result<SeededAccount> {
    let account_id = fixture_id();
    sqlx::query("INSERT INTO accounts (id, created_at) VALUES ($1, $2)")
        .bind(account_id.into_inner())
        .bind(Utc::now())
        .execute(pool)
        .await?;

    let author_id = seed_user(pool, account_id, "Rachel", Some("Green")).await?;

    Ok(SeededAccount {
        account_id,
        author_id,
    })
}

/// Insert a user into an existing account
pub async fn seed_user(
    pool: &PgPool,
    account_id: Snowflake,
    first_name: &str,
    last_name: Option<&str>,
) -> Result<Snowflake> {
    let id = fixture_id();
    sqlx::query(
        "INSERT INTO users (id, account_id, first_name, last_name, email, created_at) VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id.into_inner())
    .bind(account_id.into_inner())
    .bind(first_name)
    .bind(last_name)
    .bind(format!("{}_{id}@example.com", first_name.to_lowercase()))
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(id)
}

/// Remove everything stored under an account
pub async fn cleanup_account(pool: &PgPool, account_id: Snowflake) -> Result<()> {
    for table in ["companies", "users"] {
        sqlx::query(&format!("DELETE FROM {table} WHERE account_id = $1"))
            .bind(account_id.into_inner())
            .execute(pool)
            .await?;
    }
    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(account_id.into_inner())
        .execute(pool)
        .await?;
    Ok(())
}
