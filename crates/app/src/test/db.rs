//! Throwaway databases for integration tests

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

use crate::database::MIGRATOR;

const USER: &str = "roster_test";
const PASSWORD: &str = "roster_test_password";

/// One PostgreSQL container shared by every test in the binary.
static CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases waiting to be dropped once their `TestDb` goes away.
static DROPS: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("roster_test")
        .with_tag("17-alpine")
        .start()
        .await
        .expect("failed to start PostgreSQL container")
}

async fn server_url(database: &str) -> String {
    let container = CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("failed to read container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

async fn spawn_dropper() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Ok(mut conn) = PgConnection::connect(&server_url("postgres").await).await {
                let _ = query(&format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"))
                    .execute(&mut conn)
                    .await;
                let _ = conn.close().await;
            }
        }
    });

    sender
}

/// A freshly migrated database private to one test.
///
/// Services commit normally; isolation comes from every test getting its own
/// database, which is dropped in the background when this value is dropped.
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        DROPS.get_or_init(spawn_dropper).await;

        let name = format!("roster_test_{}", Uuid::new_v4().simple());

        let mut admin = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("failed to connect to postgres database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("failed to create test database");

        admin.close().await.expect("failed to close admin connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("failed to connect to test database");

        MIGRATOR
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Self { pool, name }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROPS.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_resource_tables() {
        let db = TestDb::new().await;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_name IN ('tenants', 'roles') \
             ORDER BY table_name",
        )
        .fetch_all(db.pool())
        .await
        .expect("failed to list tables");

        assert_eq!(tables, ["roles", "tenants"]);
    }

    #[tokio::test]
    async fn each_test_db_is_isolated() {
        let a = TestDb::new().await;
        let b = TestDb::new().await;

        sqlx::query("INSERT INTO tenants (tenant_id) VALUES ('only-in-a')")
            .execute(a.pool())
            .await
            .expect("failed to insert");

        let count: i64 = sqlx::query_scalar("SELECT count(*) FROM tenants")
            .fetch_one(b.pool())
            .await
            .expect("failed to count");

        assert_eq!(count, 0);
    }
}
