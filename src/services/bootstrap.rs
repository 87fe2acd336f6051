//! Startup sequence: migrations, then one-time seed data.
use std::time::Duration;

use crate::app_state::AppState;
use crate::domain::{Email, MemberStore, NewLeader, NewMember, Role, UserStore};
use crate::errors::BootstrapError;
use crate::migrations;

use super::auth::hash_password;

pub const SEED_LEADER_NAME: &str = "Pastor Líder";
pub const SEED_LEADER_EMAIL: &str = "lider@adfidelidade.com";
pub const SEED_LEADER_PASSWORD: &str = "admin123";

pub const SEED_MEMBERS: [(&str, &str, &str); 6] = [
    ("João Silva", "Louvor", "(11) 99999-9999"),
    ("Maria Santos", "Intercessão", "(11) 98888-8888"),
    ("Pedro Costa", "Recepção", "(11) 97777-7777"),
    ("Ana Oliveira", "Louvor", "(11) 96666-6666"),
    ("Carlos Pereira", "Intercessão", "(11) 95555-5555"),
    ("Fernando Alexandre Fernandes", "Evangelismo", "(11) 98217-0425"),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub leaders_created: usize,
    pub members_created: usize,
}

/// Seeds the default leader and the example roster, each only into an empty table.
pub async fn seed(
    user_store: &dyn UserStore,
    member_store: &dyn MemberStore,
) -> Result<SeedReport, BootstrapError> {
    let mut report = SeedReport::default();

    if user_store.count_users().await? == 0 {
        let password_hash = hash_password(SEED_LEADER_PASSWORD)
            .await
            .map_err(|e| BootstrapError::Seed(e.to_string()))?;
        let email = Email::parse(SEED_LEADER_EMAIL.to_string()).map_err(BootstrapError::Seed)?;
        user_store
            .add_leader(NewLeader {
                nome: SEED_LEADER_NAME.to_string(),
                email,
                password_hash,
                role: Role::Lider,
            })
            .await?;
        report.leaders_created = 1;
        log::info!("leader account created: {}", SEED_LEADER_EMAIL);
    }

    if member_store.count_members().await? == 0 {
        let members = SEED_MEMBERS
            .iter()
            .map(|(nome, grupo, telefone)| NewMember::new(*nome, *grupo).with_contact(*telefone, ""))
            .collect();
        report.members_created = member_store.add_members(members).await?;
        log::info!("{} example members inserted", report.members_created);
    }

    Ok(report)
}

pub async fn bootstrap(state: &AppState) -> Result<SeedReport, BootstrapError> {
    let client = state.database.client().await?;
    migrations::up(client)
        .await
        .map_err(|e| BootstrapError::Migration(e.to_string()))?;
    seed(state.user_store.as_ref(), state.member_store.as_ref()).await
}

/// Runs [`bootstrap`] up to `attempts` times. Giving up is logged, not fatal:
/// the server still starts and requests fail individually.
pub async fn bootstrap_with_retry(
    state: &AppState,
    attempts: u32,
    delay: Duration,
) -> Option<SeedReport> {
    for attempt in 1..=attempts {
        match bootstrap(state).await {
            Ok(report) => {
                log::info!("database initialized");
                return Some(report);
            }
            Err(e) => {
                log::warn!("bootstrap attempt {} of {} failed: {}", attempt, attempts, e);
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    log::error!("database initialization failed after {} attempts", attempts);
    None
}
