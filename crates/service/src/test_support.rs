#![cfg(test)]
use sea_orm::DatabaseConnection;

/// Fresh isolated store per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::testing::memory_db().await
}
