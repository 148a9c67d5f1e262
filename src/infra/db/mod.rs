//! Database connection and initialization.

use std::time::Duration;

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;

use crate::config::{Config, DB_CONNECT_ATTEMPTS, DB_CONNECT_RETRY_DELAY_SECONDS};

pub mod migrations;

pub use migrations::{Migrator, USERS_EMAIL_UNIQUE_INDEX};

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect with the default retry policy and run pending migrations.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect_with_retry(
            &config.database_url(),
            DB_CONNECT_ATTEMPTS,
            Duration::from_secs(DB_CONNECT_RETRY_DELAY_SECONDS),
        )
        .await?;

        db.run_migrations().await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect, retrying up to `attempts` times with a fixed `delay`.
    ///
    /// An attempt only succeeds once the connection answers a ping.
    pub async fn connect_with_retry(
        database_url: &str,
        attempts: u32,
        delay: Duration,
    ) -> Result<Self, DbErr> {
        retry_fixed(attempts, delay, move || async move {
            let db = Self::connect_without_migrations(database_url).await?;
            db.ping().await?;
            Ok(db)
        })
        .await
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(database_url: &str) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(database_url).await?;
        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations: Vec<(String, bool)> = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

/// Run `op` until it succeeds or `attempts` runs out, sleeping `delay`
/// between failures. The last error is returned on exhaustion.
pub async fn retry_fixed<T, E, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= attempts => {
                tracing::error!("Giving up after {} attempts: {}", attempts, e);
                return Err(e);
            }
            Err(e) => {
                tracing::warn!("Waiting for DB... ({}/{}): {}", attempt, attempts, e);
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
