use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use strandplan_infrastructure::persistence::Database;

/// Single-connection in-memory database with migrations applied. Enough for
/// everything except multi-connection concurrency tests.
pub async fn setup_in_memory_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory db");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}

/// File-backed database in a temp directory, so a multi-connection pool
/// shares real state across tasks.
pub async fn setup_file_db(dir: &tempfile::TempDir) -> SqlitePool {
    let db_path = dir.path().join("test.db");
    let database = Database::new(db_path.to_str().expect("utf-8 temp path"))
        .await
        .expect("open file db");
    database.run_migrations().await.expect("run migrations");
    database.pool().clone()
}
