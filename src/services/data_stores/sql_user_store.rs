use std::sync::Arc;

use async_trait::async_trait;
use welds::prelude::DbState;

use crate::domain::{
    now_timestamp, Email, Leader, NewLeader, Role, StoreError, StoredLeader, UserModel, UserStore,
};
use crate::services::Database;

pub struct SqlUserStore {
    db: Arc<Database>,
}

impl SqlUserStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Convert database UserModel to domain StoredLeader
    fn from_user_model(user_model: UserModel) -> Result<StoredLeader, StoreError> {
        let email = Email::parse(user_model.email)
            .map_err(|_| StoreError::InvalidData("invalid email in database".to_string()))?;
        let role = user_model
            .tipo
            .parse::<Role>()
            .map_err(StoreError::InvalidData)?;

        Ok(StoredLeader {
            leader: Leader {
                id: user_model.id,
                nome: user_model.nome,
                email,
                role,
            },
            password_hash: user_model.senha,
        })
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn count_users(&self) -> Result<u64, StoreError> {
        let client = self.db.client().await?;
        Ok(UserModel::all().count(client).await?)
    }

    async fn add_leader(&self, leader: NewLeader) -> Result<Leader, StoreError> {
        let client = self.db.client().await?;

        let mut user_model: DbState<UserModel> = UserModel::new();
        user_model.nome = leader.nome;
        user_model.email = leader.email.as_ref().to_string();
        user_model.senha = leader.password_hash;
        user_model.tipo = leader.role.as_str().to_string();
        user_model.criado = now_timestamp();
        user_model.save(client).await?;

        Ok(Self::from_user_model(user_model.into_inner())?.leader)
    }

    async fn find_leader(&self, email: &Email) -> Result<StoredLeader, StoreError> {
        let client = self.db.client().await?;
        let found = UserModel::where_col(|u| u.email.equal(email.as_ref()))
            .where_col(|u| u.tipo.equal(Role::Lider.as_str()))
            .limit(1)
            .run(client)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)?;

        Self::from_user_model(found.into_inner())
    }
}
