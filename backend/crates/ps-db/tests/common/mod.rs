#![allow(dead_code)]

use ps_core::User;
use ps_db::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ps_db::migrate(&pool).await.expect("Failed to run migrations");

    pool
}

/// Inserts a user for foreign key constraints, returns it
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> User {
    let user = User::new(
        email.to_string(),
        "$2b$04$testhashtesthashtesthashte".to_string(),
    );

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    user
}
