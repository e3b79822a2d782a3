//! Isolated store for tests: a single-connection in-memory SQLite pool with
//! the `cakes` and `services` tables created from the entity definitions.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::db::{connect_with_config, DatabaseConfig};
use crate::{cake, service};

pub fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        // one connection keeps the in-memory database alive for the whole test
        max_connections: 1,
        min_connections: 1,
        acquire_timeout_secs: 10,
        ..DatabaseConfig::default()
    }
}

pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&memory_config()).await?;
    create_tables(&db).await?;
    Ok(db)
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(cake::Entity))).await?;
    db.execute(backend.build(&schema.create_table_from_entity(service::Entity))).await?;
    Ok(())
}
