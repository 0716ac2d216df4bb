//! Readiness probe for the PostgreSQL database.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use super::pool::DbPool;
use crate::domain::ports::DependencyHealthCheck;

/// Name used for the database entry in the readiness report.
pub const DATABASE_CHECK_NAME: &str = "Database";

/// Checks out a pooled connection and runs `SELECT 1`.
#[derive(Clone)]
pub struct DatabaseHealthCheck {
    pool: DbPool,
}

impl DatabaseHealthCheck {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DependencyHealthCheck for DatabaseHealthCheck {
    fn name(&self) -> &'static str {
        DATABASE_CHECK_NAME
    }

    async fn check(&self) -> Result<(), String> {
        let mut conn = self.pool.get().await.map_err(|err| err.to_string())?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| err.to_string())
    }
}
