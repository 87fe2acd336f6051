use std::sync::Arc;

use async_trait::async_trait;
use welds::prelude::DbState;
use welds::TransactStart;

use crate::domain::{
    now_timestamp, Location, Member, MemberModel, MemberStore, NewMember, StoreError,
};
use crate::services::Database;

pub struct SqlMemberStore {
    db: Arc<Database>,
}

impl SqlMemberStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Convert domain NewMember to database MemberModel
    fn to_member_model(member: &NewMember) -> DbState<MemberModel> {
        let mut member_model = MemberModel::new();
        member_model.nome = member.nome.clone();
        member_model.grupo = member.grupo.clone();
        member_model.telefone = member.telefone.clone();
        member_model.email = member.email.clone();
        member_model.observacoes = member.observacoes.clone();
        member_model.presente = false;
        member_model.data_checkin = None;
        member_model.latitude = None;
        member_model.longitude = None;
        member_model.criado = now_timestamp();
        member_model
    }

    // Convert database MemberModel to domain Member
    fn from_member_model(member_model: MemberModel) -> Member {
        let location = match (member_model.latitude, member_model.longitude) {
            (Some(latitude), Some(longitude)) => Some(Location {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Member {
            id: member_model.id,
            nome: member_model.nome,
            grupo: member_model.grupo,
            telefone: member_model.telefone,
            email: member_model.email,
            observacoes: member_model.observacoes,
            presente: member_model.presente,
            data_checkin: member_model.data_checkin,
            location,
            criado: member_model.criado,
        }
    }
}

#[async_trait]
impl MemberStore for SqlMemberStore {
    async fn count_members(&self) -> Result<u64, StoreError> {
        let client = self.db.client().await?;
        Ok(MemberModel::all().count(client).await?)
    }

    async fn add_member(&self, member: NewMember) -> Result<Member, StoreError> {
        let client = self.db.client().await?;
        let mut member_model = Self::to_member_model(&member);
        member_model.save(client).await?;
        Ok(Self::from_member_model(member_model.into_inner()))
    }

    async fn add_members(&self, members: Vec<NewMember>) -> Result<usize, StoreError> {
        let client = self.db.client().await?;
        let transaction = client.begin().await?;

        // Dropping the transaction on an early return rolls everything back.
        for member in &members {
            let mut member_model = Self::to_member_model(member);
            member_model.save(&transaction).await?;
        }
        transaction.commit().await?;

        Ok(members.len())
    }

    async fn get_member(&self, id: i64) -> Result<Member, StoreError> {
        let client = self.db.client().await?;
        let member_model = MemberModel::find_by_id(client, id)
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(Self::from_member_model(member_model.into_inner()))
    }

    async fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        let client = self.db.client().await?;
        let rows = MemberModel::all()
            .order_by_asc(|m| m.nome)
            .run(client)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| Self::from_member_model(row.into_inner()))
            .collect())
    }

    async fn list_present(&self) -> Result<Vec<Member>, StoreError> {
        let client = self.db.client().await?;
        let rows = MemberModel::where_col(|m| m.presente.equal(true))
            .order_by_asc(|m| m.nome)
            .run(client)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| Self::from_member_model(row.into_inner()))
            .collect())
    }

    async fn delete_member(&self, id: i64) -> Result<(), StoreError> {
        let client = self.db.client().await?;
        let mut member_model = MemberModel::find_by_id(client, id)
            .await?
            .ok_or(StoreError::NotFound)?;
        member_model.delete(client).await?;
        Ok(())
    }

    async fn self_check_in(
        &self,
        nome: &str,
        grupo: &str,
        location: Option<Location>,
    ) -> Result<Member, StoreError> {
        let client = self.db.client().await?;
        let transaction = client.begin().await?;

        // Duplicate (nome, grupo) pairs are not prevented; the oldest row wins.
        let mut member_model = MemberModel::where_col(|m| m.nome.equal(nome))
            .where_col(|m| m.grupo.equal(grupo))
            .order_by_asc(|m| m.id)
            .limit(1)
            .run(&transaction)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)?;

        member_model.presente = true;
        member_model.data_checkin = Some(now_timestamp());
        member_model.latitude = location.map(|l| l.latitude);
        member_model.longitude = location.map(|l| l.longitude);
        member_model.save(&transaction).await?;
        transaction.commit().await?;

        Ok(Self::from_member_model(member_model.into_inner()))
    }

    async fn set_presence(&self, id: i64, presente: bool) -> Result<Member, StoreError> {
        let client = self.db.client().await?;
        let transaction = client.begin().await?;

        let mut member_model = MemberModel::find_by_id(&transaction, id)
            .await?
            .ok_or(StoreError::NotFound)?;
        member_model.presente = presente;
        member_model.data_checkin = presente.then(now_timestamp);
        member_model.save(&transaction).await?;
        transaction.commit().await?;

        Ok(Self::from_member_model(member_model.into_inner()))
    }
}
