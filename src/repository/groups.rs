use eyre::Result;
use sqlx::SqliteConnection;

use crate::domain::membership;
use crate::error::Error;

pub struct GroupRepository<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> GroupRepository<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    pub async fn members(&mut self, name: &str) -> Result<Vec<String>> {
        let raw: Option<String> = sqlx::query_scalar(
            r#"
            SELECT user_ids FROM "group"
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *self.db)
        .await?;
        let raw = raw.ok_or_else(|| Error::GroupNotFound(name.to_string()))?;
        membership::parse(&raw)
    }

    pub async fn replace_members(&mut self, name: &str, ids: &[String]) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE "group"
            SET user_ids = ?
            WHERE name = ?
            "#,
        )
        .bind(membership::serialize(ids))
        .bind(name)
        .execute(&mut *self.db)
        .await?;
        Ok(())
    }
}
