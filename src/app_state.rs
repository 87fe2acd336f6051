use std::sync::Arc;

use tera::Tera;

use crate::domain::{AtaStore, MemberStore, UserStore};
use crate::services::{Database, SqlAtaStore, SqlMemberStore, SqlUserStore};
use crate::utils::Config;
use crate::views;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<dyn UserStore>;
pub type MemberStoreType = Arc<dyn MemberStore>;
pub type AtaStoreType = Arc<dyn AtaStore>;
pub type ConfigType = Arc<Config>;
pub type TemplatesType = Arc<Tera>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub member_store: MemberStoreType,
    pub ata_store: AtaStoreType,
    pub config: ConfigType,
    pub templates: TemplatesType,
    pub database: Arc<Database>,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        member_store: MemberStoreType,
        ata_store: AtaStoreType,
        config: ConfigType,
        templates: TemplatesType,
        database: Arc<Database>,
    ) -> Self {
        Self {
            user_store,
            member_store,
            ata_store,
            config,
            templates,
            database,
        }
    }

    /// State backed by the SQL stores over one shared connection handle.
    pub fn with_sql_stores(config: ConfigType, database: Arc<Database>) -> Result<Self, tera::Error> {
        let templates = Arc::new(views::build_templates()?);
        Ok(Self::new(
            Arc::new(SqlUserStore::new(database.clone())),
            Arc::new(SqlMemberStore::new(database.clone())),
            Arc::new(SqlAtaStore::new(database.clone())),
            config,
            templates,
            database,
        ))
    }
}
