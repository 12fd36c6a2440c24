use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::StoreError;

/// One spending row. `amount` serializes as a JSON number, which is
/// what the dashboard expects.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SpendingRecord {
    pub category: String,
    pub amount: Decimal,
}

impl SpendingRecord {
    /// All spending rows in insertion order.
    pub async fn all(db: &PgPool) -> Result<Vec<SpendingRecord>, StoreError> {
        let rows = sqlx::query_as::<_, SpendingRecord>(
            r#"
            SELECT category, amount
            FROM spending
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn count(db: &PgPool) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM spending")
            .fetch_one(db)
            .await?;
        Ok(count)
    }

    pub async fn insert(db: &PgPool, category: &str, amount: Decimal) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO spending (category, amount) VALUES ($1, $2)")
            .bind(category)
            .bind(amount)
            .execute(db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_serializes_as_json_number() {
        let record = SpendingRecord {
            category: "Food".into(),
            amount: Decimal::new(15050, 2),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, serde_json::json!({ "category": "Food", "amount": 150.5 }));
        assert!(value["amount"].is_number());
    }
}
