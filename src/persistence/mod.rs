// src/persistence/mod.rs

//! Relational backend for a future migration off the in-memory registries.
//!
//! The live service never reads or writes these tables. The schema is
//! kept current alongside the in-memory records so the registries in
//! [`crate::store`] can be swapped for a database-backed implementation
//! without touching handler call sites; [`schema`] carries the row types
//! and the conversions a migration job would use.

pub mod schema;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

/// Embedded migrations for the relational schema.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connects to the relational backend and applies pending migrations.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
