use eyre::{Result, WrapErr};
use log::info;
use sqlx::MySqlPool;

use crate::domain::doctor::DoctorRecord;
use crate::error::Error;

#[cfg_attr(test, faux::create)]
#[derive(Clone)]
pub struct DoctorRegistrationRepository {
    pool: MySqlPool,
}

#[cfg_attr(test, faux::methods)]
impl DoctorRegistrationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn fetch_doctors(&self) -> Result<Vec<DoctorRecord>> {
        sqlx::query_as(
            r#"
            SELECT EmailId email,
                   password plaintext_password,
                   concat_ws(" ", Fname, Lname) AS name
            FROM doctors_registration
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .wrap_err(Error::SourceQuery)
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Source database connection closed");
    }
}
