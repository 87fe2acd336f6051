use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ata::{Department, MeetingType, NewAta, DATE_FORMAT};
use crate::errors::AtaError;

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AtaRequestBody {
    pub data: String,
    pub tipo: String,
    pub departamento: String,
    #[serde(default)]
    pub tema: String,
    #[serde(default)]
    pub local: String,
    #[serde(default)]
    pub observacoes: String,
    #[serde(default)]
    pub presentes: Vec<i64>,
}

impl AtaRequestBody {
    pub fn try_into_new_ata(self) -> Result<NewAta, AtaError> {
        let data = NaiveDate::parse_from_str(self.data.trim(), DATE_FORMAT)
            .map_err(|_| AtaError::InvalidDate)?;
        let tipo = self
            .tipo
            .parse::<MeetingType>()
            .map_err(|_| AtaError::InvalidType)?;
        let departamento = self
            .departamento
            .parse::<Department>()
            .map_err(|_| AtaError::InvalidDepartment)?;

        let mut seen = HashSet::new();
        let mut attendee_ids = self.presentes;
        attendee_ids.retain(|id| seen.insert(*id));

        Ok(NewAta {
            data,
            tipo,
            departamento,
            tema: self.tema.trim().to_owned(),
            local: self.local.trim().to_owned(),
            observacoes: self.observacoes.trim().to_owned(),
            attendee_ids,
        })
    }
}
