use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
pub const DEFAULT_DATABASE_URL: &str = "sqlite:patients.db";

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// DbConnection owns the connection pool shared by all repositories
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize an in-memory database with a unique name.
    ///
    /// Each call gets its own database, so tests never see each other's rows.
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().simple().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // AUTOINCREMENT keeps ids of deleted rows from being handed out again
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS patient (
                patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
                surname TEXT NOT NULL,
                name TEXT NOT NULL,
                middle_name TEXT,
                symptoms TEXT,
                is_having_trip_abroad TEXT,
                contact_with_patients TEXT
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_schema_is_created() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");

        let row = sqlx::query("SELECT COUNT(*) AS count FROM patient")
            .fetch_one(db.pool())
            .await
            .expect("patient table should exist");

        let count: i64 = row.get("count");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_test_databases_are_isolated() {
        let first = DbConnection::init_test().await.unwrap();
        let second = DbConnection::init_test().await.unwrap();

        sqlx::query("INSERT INTO patient (surname, name) VALUES ('Ivanov', 'Petr')")
            .execute(first.pool())
            .await
            .unwrap();

        let row = sqlx::query("SELECT COUNT(*) AS count FROM patient")
            .fetch_one(second.pool())
            .await
            .unwrap();
        let count: i64 = row.get("count");
        assert_eq!(count, 0, "Second database should not see rows from the first");
    }

    #[tokio::test]
    async fn test_schema_setup_is_idempotent() {
        let db = DbConnection::init_test().await.unwrap();

        DbConnection::setup_schema(db.pool())
            .await
            .expect("Running schema setup twice should succeed");
    }
}
