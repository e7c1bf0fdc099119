use eyre::Result;
use sqlx::SqliteConnection;

use crate::domain::account::Account;

pub struct UserRepository<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> UserRepository<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    pub async fn find_id_by_email(&mut self, email: &str) -> Result<Option<String>> {
        sqlx::query_scalar(
            r#"
            SELECT id FROM user
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *self.db)
        .await
        .map_err(Into::into)
    }

    // Full overwrite of the profile columns; id, email and created_at stay as
    // they were first written.
    pub async fn update(&mut self, account: &Account) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE user
            SET name = ?, role = ?, profile_image_url = ?, api_key = ?,
                updated_at = ?, last_active_at = ?, settings = ?, info = ?, oauth_sub = ?
            WHERE email = ?
            "#,
        )
        .bind(&account.name)
        .bind(&account.role)
        .bind(&account.profile_image_url)
        .bind(account.api_key.as_deref())
        .bind(account.updated_at)
        .bind(account.last_active_at)
        .bind(&account.settings)
        .bind(&account.info)
        .bind(account.oauth_sub.as_deref())
        .bind(&account.email)
        .execute(&mut *self.db)
        .await?;
        Ok(())
    }

    pub async fn insert(&mut self, account: &Account) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user (id, name, email, role, profile_image_url, api_key,
                              created_at, updated_at, last_active_at, settings, info, oauth_sub)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.role)
        .bind(&account.profile_image_url)
        .bind(account.api_key.as_deref())
        .bind(account.created_at)
        .bind(account.updated_at)
        .bind(account.last_active_at)
        .bind(&account.settings)
        .bind(&account.info)
        .bind(account.oauth_sub.as_deref())
        .execute(&mut *self.db)
        .await?;
        Ok(())
    }
}
