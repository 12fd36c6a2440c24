use anyhow::Context;
use rust_decimal::Decimal;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

use crate::spending::repo::SpendingRecord;

pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Create the two tables if they are missing, then seed demo spending
/// rows. Any DDL failure is an error; seeding is best-effort.
pub async fn init_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("create users table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS spending (
            id SERIAL PRIMARY KEY,
            category TEXT NOT NULL,
            amount NUMERIC(10, 2) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("create spending table")?;

    seed_spending(pool).await;

    Ok(())
}

/// Insert the demo rows when the spending table is empty. A failed
/// count or insert is logged and skipped, never fatal.
async fn seed_spending(pool: &PgPool) {
    let count = match SpendingRecord::count(pool).await {
        Ok(n) => n,
        Err(e) => {
            warn!(error = %e, "could not count spending rows, skipping seed");
            return;
        }
    };
    if count > 0 {
        return;
    }

    for (category, amount) in seed_rows() {
        if let Err(e) = SpendingRecord::insert(pool, category, amount).await {
            warn!(error = %e, category, "failed to insert seed row");
        }
    }
    info!("inserted mock spending data");
}

fn seed_rows() -> [(&'static str, Decimal); 4] {
    [
        ("Food", Decimal::new(15050, 2)),
        ("Transport", Decimal::new(7500, 2)),
        ("Entertainment", Decimal::new(20000, 2)),
        ("Utilities", Decimal::new(12000, 2)),
    ]
}
