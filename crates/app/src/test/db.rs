//! Per-test `PostgreSQL` databases inside one shared container.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};

const DB_USER: &str = "vitrina_test";
const DB_PASSWORD: &str = "vitrina_test_password";

static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static DROP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

/// Database names are interpolated into DDL, so only plain identifiers pass.
fn is_safe_database_name(name: &str) -> bool {
    (1..=63).contains(&name.len())
        && name.starts_with(|c: char| c.is_ascii_lowercase() || c == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(DB_USER)
        .with_password(DB_PASSWORD)
        .with_db_name("vitrina_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn server_url(database: &str) -> String {
    let container = POSTGRES_CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{database}")
}

async fn spawn_drop_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if !is_safe_database_name(&name) {
                continue;
            }

            if let Ok(mut conn) = PgConnection::connect(&server_url("postgres").await).await {
                let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
                    .execute(&mut conn)
                    .await;
                let _ = conn.close().await;
            }
        }
    });

    sender
}

/// A uniquely named, migrated database dropped when the value goes away.
#[derive(Debug)]
pub struct TestDb {
    pub pool: PgPool,
    pub name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub async fn new() -> Self {
        DROP_SENDER.get_or_init(spawn_drop_task).await;

        let name = format!("vitrina_test_{}", uuid::Uuid::now_v7().simple());

        assert!(is_safe_database_name(&name), "unsafe database name {name}");

        let mut conn = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("Failed to create pool for database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_database_names() {
        assert!(is_safe_database_name("vitrina_test_0190"));
        assert!(is_safe_database_name("_scratch"));
        assert!(!is_safe_database_name(""));
        assert!(!is_safe_database_name("1abc"));
        assert!(!is_safe_database_name("has-hyphen"));
        assert!(!is_safe_database_name("quote\"d"));
        assert!(!is_safe_database_name(&"a".repeat(64)));
    }

    #[tokio::test]
    async fn migrated_database_has_clients_table() {
        let db = TestDb::new().await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(db.pool())
            .await
            .expect("Failed to count clients");

        assert_eq!(count, 0);
    }
}
