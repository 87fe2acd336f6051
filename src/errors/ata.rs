use axum::response::IntoResponse;
use thiserror::Error;

use super::notice_redirect;
use crate::domain::StoreError;
use crate::utils::FlashKind;

#[derive(Error, Debug)]
pub enum AtaError {
    #[error("Ata não encontrada.")]
    NotFound,

    #[error("Informe uma data válida para a reunião.")]
    InvalidDate,

    #[error("Dados do formulário inválidos.")]
    InvalidForm,

    #[error("Tipo de reunião inválido.")]
    InvalidType,

    #[error("Departamento inválido.")]
    InvalidDepartment,

    #[error("Erro ao gerar o PDF da ata.")]
    Pdf(String),

    #[error("Erro ao salvar a ata. Tente novamente.")]
    Store(StoreError),
}

impl From<StoreError> for AtaError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => AtaError::NotFound,
            other => AtaError::Store(other),
        }
    }
}

impl IntoResponse for AtaError {
    fn into_response(self) -> axum::response::Response {
        let (to, kind) = match &self {
            AtaError::NotFound => ("/painel_lider", FlashKind::Warning),
            AtaError::InvalidForm
            | AtaError::InvalidDate
            | AtaError::InvalidType
            | AtaError::InvalidDepartment => {
                ("/ata", FlashKind::Warning)
            }
            AtaError::Pdf(e) => {
                log::error!("pdf rendering failed: {}", e);
                ("/painel_lider", FlashKind::Danger)
            }
            AtaError::Store(e) => {
                log::error!("ata operation failed: {}", e);
                ("/painel_lider", FlashKind::Danger)
            }
        };
        notice_redirect(to, kind, self.to_string())
    }
}
