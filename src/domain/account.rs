use eyre::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::doctor::DoctorRecord;

pub const HASH_COST: u32 = 10;
pub const DEFAULT_ROLE: &str = "user";
pub const DEFAULT_PROFILE_IMAGE: &str = "/user.png";
pub const DEFAULT_INFO: &str = "null";
pub const DEFAULT_CHAT_MODEL: &str = "dti6302_chatbot";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub models: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub ui: UiSettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            ui: UiSettings {
                models: vec![DEFAULT_CHAT_MODEL.to_string()],
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub profile_image_url: String,
    pub api_key: Option<String>,
    pub settings: String,
    pub info: String,
    pub oauth_sub: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub last_active_at: i64,
    pub active: i64,
}

impl Account {
    pub fn from_doctor(doctor: DoctorRecord, now: i64) -> Result<Self> {
        let password = bcrypt::hash(&doctor.plaintext_password, HASH_COST)?;
        Ok(Account {
            id: Uuid::new_v4().to_string(),
            name: doctor.name,
            email: doctor.email,
            password,
            role: DEFAULT_ROLE.to_string(),
            profile_image_url: DEFAULT_PROFILE_IMAGE.to_string(),
            api_key: None,
            settings: serde_json::to_string(&UserSettings::default())?,
            info: DEFAULT_INFO.to_string(),
            oauth_sub: None,
            created_at: now,
            updated_at: now,
            last_active_at: now,
            active: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(email: &str, password: &str, name: &str) -> DoctorRecord {
        DoctorRecord {
            email: email.to_string(),
            plaintext_password: password.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn hash_verifies_against_the_plaintext() {
        let account = Account::from_doctor(doctor("a@x.com", "pw1", "A B"), 1_700_000_000).unwrap();
        assert!(bcrypt::verify("pw1", &account.password).unwrap());
        assert!(!bcrypt::verify("pw2", &account.password).unwrap());
    }

    #[test]
    fn salt_is_regenerated_for_every_hash() {
        let first = Account::from_doctor(doctor("a@x.com", "pw1", "A B"), 1_700_000_000).unwrap();
        let second = Account::from_doctor(doctor("a@x.com", "pw1", "A B"), 1_700_000_000).unwrap();
        assert_ne!(first.password, second.password);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn applies_profile_defaults() {
        let account = Account::from_doctor(doctor("a@x.com", "pw1", "A B"), 1_700_000_000).unwrap();
        assert_eq!(account.name, "A B");
        assert_eq!(account.email, "a@x.com");
        assert_eq!(account.role, "user");
        assert_eq!(account.profile_image_url, "/user.png");
        assert_eq!(account.api_key, None);
        assert_eq!(account.info, "null");
        assert_eq!(account.oauth_sub, None);
        assert_eq!(account.active, 1);
        assert_eq!(account.created_at, 1_700_000_000);
        assert_eq!(account.updated_at, account.created_at);
        assert_eq!(account.last_active_at, account.created_at);

        let settings: serde_json::Value = serde_json::from_str(&account.settings).unwrap();
        assert_eq!(settings["ui"]["models"][0], "dti6302_chatbot");
    }
}
