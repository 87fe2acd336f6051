use axum::response::IntoResponse;
use thiserror::Error;

use super::notice_redirect;
use crate::domain::StoreError;
use crate::utils::FlashKind;

#[derive(Error, Debug)]
pub enum CheckinError {
    #[error("Obreiro não encontrado. Verifique nome e grupo.")]
    NotFound,

    #[error("Informe nome e grupo para o check-in.")]
    InvalidForm,

    #[error("Erro ao realizar check-in. Tente novamente.")]
    Store(StoreError),
}

impl From<StoreError> for CheckinError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => CheckinError::NotFound,
            other => CheckinError::Store(other),
        }
    }
}

impl IntoResponse for CheckinError {
    fn into_response(self) -> axum::response::Response {
        let kind = match &self {
            CheckinError::NotFound | CheckinError::InvalidForm => FlashKind::Warning,
            CheckinError::Store(e) => {
                log::error!("self check-in failed: {}", e);
                FlashKind::Danger
            }
        };
        notice_redirect("/", kind, self.to_string())
    }
}
