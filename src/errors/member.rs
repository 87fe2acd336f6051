use axum::response::IntoResponse;
use thiserror::Error;

use super::notice_redirect;
use crate::domain::StoreError;
use crate::utils::FlashKind;

/// Failures of the leader's roster operations.
#[derive(Error, Debug)]
pub enum MemberError {
    #[error("Obreiro não encontrado.")]
    NotFound,

    #[error("Informe o nome do obreiro.")]
    MissingName,

    #[error("Dados do formulário inválidos.")]
    InvalidForm,

    #[error("Erro ao atualizar os obreiros. Tente novamente.")]
    Store(StoreError),
}

impl From<StoreError> for MemberError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => MemberError::NotFound,
            other => MemberError::Store(other),
        }
    }
}

impl IntoResponse for MemberError {
    fn into_response(self) -> axum::response::Response {
        let kind = match &self {
            MemberError::NotFound | MemberError::MissingName | MemberError::InvalidForm => {
                FlashKind::Warning
            }
            MemberError::Store(e) => {
                log::error!("roster operation failed: {}", e);
                FlashKind::Danger
            }
        };
        notice_redirect("/painel_lider", kind, self.to_string())
    }
}
