use chrono::Utc;
use eyre::Result;
use itertools::Itertools;
use log::info;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::account::Account;
use crate::domain::doctor::DoctorRecord;
use crate::repository::auth::AuthRepository;
use crate::repository::groups::GroupRepository;
use crate::repository::source::DoctorRegistrationRepository;
use crate::repository::users::UserRepository;

pub const GROUP_NAME: &str = "DTI6302";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    pub inserted: usize,
    pub updated: usize,
}

impl TableSummary {
    pub fn total(&self) -> usize {
        self.inserted + self.updated
    }
}

#[derive(Debug, Default, Clone)]
pub struct SyncSummary {
    pub auth: TableSummary,
    pub users: TableSummary,
    pub new_member_ids: Vec<String>,
}

pub struct SyncService {
    pub source: DoctorRegistrationRepository,
    pub target: SqlitePool,
}

impl SyncService {
    pub async fn run(&self) -> Result<SyncSummary> {
        // The source connection is released before anything touches the
        // local store, whether or not the rows materialized.
        let doctors = self.source.fetch_doctors().await;
        self.source.close().await;
        let doctors = doctors?;
        info!("Loaded {} doctor registrations", doctors.len());

        let accounts = transform(doctors)?;

        let mut summary = SyncSummary::default();

        let mut tx = self.target.begin().await?;
        summary.auth = reconcile_auth(&mut *tx, &accounts, &mut summary.new_member_ids).await?;
        update_group_members(&mut *tx, GROUP_NAME, &summary.new_member_ids).await?;
        tx.commit().await?;

        let mut tx = self.target.begin().await?;
        summary.users = reconcile_users(&mut *tx, &accounts).await?;
        tx.commit().await?;

        Ok(summary)
    }
}

// One timestamp per invocation, shared by every derived account.
pub fn transform(doctors: Vec<DoctorRecord>) -> Result<Vec<Account>> {
    let now = Utc::now().timestamp();
    doctors
        .into_iter()
        .map(|doctor| Account::from_doctor(doctor, now))
        .collect()
}

async fn reconcile_auth(
    db: &mut SqliteConnection,
    accounts: &[Account],
    new_member_ids: &mut Vec<String>,
) -> Result<TableSummary> {
    let mut repo = AuthRepository::new(db);
    let mut summary = TableSummary::default();
    for account in accounts {
        if repo.find_id_by_email(&account.email).await?.is_some() {
            repo.update_password(&account.email, &account.password)
                .await?;
            summary.updated += 1;
            info!("Updated password for {}", account.email);
        } else {
            repo.insert(account).await?;
            summary.inserted += 1;
            new_member_ids.push(account.id.clone());
            info!("Inserted new auth record for {}", account.email);
        }
    }
    Ok(summary)
}

async fn update_group_members(
    db: &mut SqliteConnection,
    name: &str,
    new_member_ids: &[String],
) -> Result<()> {
    let mut repo = GroupRepository::new(db);
    let current = repo.members(name).await?;
    let merged: Vec<String> = current
        .into_iter()
        .chain(new_member_ids.iter().cloned())
        .unique()
        .collect();
    repo.replace_members(name, &merged).await?;
    info!("Group {} now lists {} members", name, merged.len());
    Ok(())
}

async fn reconcile_users(db: &mut SqliteConnection, accounts: &[Account]) -> Result<TableSummary> {
    let mut repo = UserRepository::new(db);
    let mut summary = TableSummary::default();
    for account in accounts {
        if repo.find_id_by_email(&account.email).await?.is_some() {
            repo.update(account).await?;
            summary.updated += 1;
            info!("Updated user record for {}", account.email);
        } else {
            repo.insert(account).await?;
            summary.inserted += 1;
            info!("Inserted new user record for {}", account.email);
        }
    }
    Ok(summary)
}
