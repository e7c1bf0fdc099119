use eyre::Result;
use sqlx::SqliteConnection;

use crate::domain::account::Account;

pub struct AuthRepository<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> AuthRepository<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    pub async fn find_id_by_email(&mut self, email: &str) -> Result<Option<String>> {
        sqlx::query_scalar(
            r#"
            SELECT id FROM auth
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *self.db)
        .await
        .map_err(Into::into)
    }

    pub async fn update_password(&mut self, email: &str, password: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE auth
            SET password = ?
            WHERE email = ?
            "#,
        )
        .bind(password)
        .bind(email)
        .execute(&mut *self.db)
        .await?;
        Ok(())
    }

    pub async fn insert(&mut self, account: &Account) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO auth (id, email, password, active)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&account.id)
        .bind(&account.email)
        .bind(&account.password)
        .bind(account.active)
        .execute(&mut *self.db)
        .await?;
        Ok(())
    }
}
