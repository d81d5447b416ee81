use crate::{DbError, Result as DbErrorResult};

use ps_core::User;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one user inside its own transaction.
    ///
    /// The UNIQUE constraint on email is the authority on duplicates; a
    /// violation rolls the transaction back so no partial row is visible.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp_millis();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
              INSERT INTO users (id, email, password_hash, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Case-sensitive exact-match lookup.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, email, password_hash, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user_row).transpose()
    }
}

fn map_user_row(row: SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::decode(format!("user id: {e}")))?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: DateTime::from_timestamp_millis(created_at)
            .ok_or_else(|| DbError::decode("user created_at out of range"))?,
    })
}
