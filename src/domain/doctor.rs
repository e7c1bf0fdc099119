use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DoctorRecord {
    pub email: String,
    pub plaintext_password: String,
    pub name: String,
}
