use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use welds::prelude::DbState;
use welds::TransactStart;

use crate::domain::{
    now_timestamp, Ata, AtaModel, AtaState, AtaStore, Attendee, Department, MeetingType,
    MemberModel, NewAta, StoreError, DATE_FORMAT,
};
use crate::services::Database;

pub struct SqlAtaStore {
    db: Arc<Database>,
}

impl SqlAtaStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn to_ata_model(ata: &NewAta, presentes: &[Attendee]) -> Result<DbState<AtaModel>, StoreError> {
        let presentes = serde_json::to_string(presentes)
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;

        let mut ata_model = AtaModel::new();
        ata_model.data = ata.data.format(DATE_FORMAT).to_string();
        ata_model.tipo = ata.tipo.as_str().to_string();
        ata_model.departamento = ata.departamento.as_str().to_string();
        ata_model.tema = ata.tema.clone();
        ata_model.local_reuniao = ata.local.clone();
        ata_model.observacoes = ata.observacoes.clone();
        ata_model.presentes = presentes;
        ata_model.arquivada = false;
        ata_model.criado = now_timestamp();
        Ok(ata_model)
    }

    fn from_ata_model(ata_model: AtaModel) -> Result<Ata, StoreError> {
        let data = NaiveDate::parse_from_str(&ata_model.data, DATE_FORMAT)
            .map_err(|e| StoreError::InvalidData(format!("ata {} date: {}", ata_model.id, e)))?;
        let tipo = ata_model
            .tipo
            .parse::<MeetingType>()
            .map_err(StoreError::InvalidData)?;
        let departamento = ata_model
            .departamento
            .parse::<Department>()
            .map_err(StoreError::InvalidData)?;
        let presentes: Vec<Attendee> = serde_json::from_str(&ata_model.presentes)
            .map_err(|e| StoreError::InvalidData(format!("ata {} attendees: {}", ata_model.id, e)))?;

        Ok(Ata {
            id: ata_model.id,
            data,
            tipo,
            departamento,
            tema: ata_model.tema,
            local: ata_model.local_reuniao,
            observacoes: ata_model.observacoes,
            presentes,
            state: AtaState::from_archived(ata_model.arquivada),
            criado: ata_model.criado,
        })
    }
}

#[async_trait]
impl AtaStore for SqlAtaStore {
    async fn create_ata(&self, ata: NewAta) -> Result<Ata, StoreError> {
        let client = self.db.client().await?;
        let transaction = client.begin().await?;

        // Ids that no longer resolve are left out of the snapshot.
        let mut presentes = Vec::with_capacity(ata.attendee_ids.len());
        for id in &ata.attendee_ids {
            if let Some(member) = MemberModel::find_by_id(&transaction, *id).await? {
                presentes.push(Attendee {
                    id: member.id,
                    nome: member.nome.clone(),
                    grupo: member.grupo.clone(),
                });
            }
        }

        let mut ata_model = Self::to_ata_model(&ata, &presentes)?;
        ata_model.save(&transaction).await?;
        transaction.commit().await?;

        Self::from_ata_model(ata_model.into_inner())
    }

    async fn get_ata(&self, id: i64) -> Result<Ata, StoreError> {
        let client = self.db.client().await?;
        let ata_model = AtaModel::find_by_id(client, id)
            .await?
            .ok_or(StoreError::NotFound)?;
        Self::from_ata_model(ata_model.into_inner())
    }

    async fn list_atas(&self, archived: bool) -> Result<Vec<Ata>, StoreError> {
        let client = self.db.client().await?;
        let rows = AtaModel::where_col(|a| a.arquivada.equal(archived))
            .order_by_desc(|a| a.data)
            .order_by_desc(|a| a.id)
            .run(client)
            .await?;
        rows.into_iter()
            .map(|row| Self::from_ata_model(row.into_inner()))
            .collect()
    }

    async fn archive_ata(&self, id: i64) -> Result<Ata, StoreError> {
        let client = self.db.client().await?;
        let transaction = client.begin().await?;

        let mut ata_model = AtaModel::find_by_id(&transaction, id)
            .await?
            .ok_or(StoreError::NotFound)?;
        let state = AtaState::from_archived(ata_model.arquivada);
        if !state.is_archived() {
            ata_model.arquivada = state.archive().is_archived();
            ata_model.save(&transaction).await?;
        }
        transaction.commit().await?;

        Self::from_ata_model(ata_model.into_inner())
    }
}
