//! Postgres-backed record store.
//!
//! Every operation executes as exactly one SQL statement. Update and
//! delete use `RETURNING` / affected-row counts to distinguish a missing
//! record from a successful mutation without a separate existence check.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{Cupcake, CupcakeStore, NewCupcake, StoreError, StoreResult};

/// Table definition for the single `cupcakes` relation
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS cupcakes (
    id BIGSERIAL PRIMARY KEY,
    flavor TEXT NOT NULL,
    size TEXT NOT NULL,
    rating DOUBLE PRECISION NOT NULL,
    image TEXT NOT NULL
)
"#;

/// Postgres cupcake store backed by a bounded connection pool.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database at `url`.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(8))
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Create the cupcakes table when it does not exist yet.
    ///
    /// Idempotent, so it runs both from `init` and on every `serve` boot.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CupcakeStore for PgStore {
    async fn list_all(&self) -> StoreResult<Vec<Cupcake>> {
        let rows = sqlx::query_as::<_, Cupcake>(
            "SELECT id, flavor, size, rating, image FROM cupcakes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> StoreResult<Cupcake> {
        sqlx::query_as::<_, Cupcake>(
            "SELECT id, flavor, size, rating, image FROM cupcakes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, fields: NewCupcake) -> StoreResult<Cupcake> {
        let row = sqlx::query_as::<_, Cupcake>(
            r#"
            INSERT INTO cupcakes (flavor, size, rating, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, flavor, size, rating, image
            "#,
        )
        .bind(&fields.flavor)
        .bind(&fields.size)
        .bind(fields.rating)
        .bind(&fields.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, fields: NewCupcake) -> StoreResult<Cupcake> {
        sqlx::query_as::<_, Cupcake>(
            r#"
            UPDATE cupcakes
            SET flavor = $2, size = $3, rating = $4, image = $5
            WHERE id = $1
            RETURNING id, flavor, size, rating, image
            "#,
        )
        .bind(id)
        .bind(&fields.flavor)
        .bind(&fields.size)
        .bind(fields.rating)
        .bind(&fields.image)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM cupcakes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}
