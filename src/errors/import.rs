use axum::response::IntoResponse;
use thiserror::Error;

use super::notice_redirect;
use crate::domain::StoreError;
use crate::utils::FlashKind;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Selecione uma planilha para importar.")]
    MissingFile,

    #[error("Modelo de planilha inválido. Colunas obrigatórias ausentes: {0}.")]
    InvalidTemplate(String),

    #[error("Não foi possível ler a planilha: {0}")]
    Unreadable(String),

    #[error("Erro ao importar obreiros. Nenhum obreiro foi importado.")]
    Store(#[from] StoreError),

    #[error("Erro ao gerar o modelo de planilha.")]
    Template(String),
}

impl IntoResponse for ImportError {
    fn into_response(self) -> axum::response::Response {
        let kind = match &self {
            ImportError::MissingFile
            | ImportError::InvalidTemplate(_)
            | ImportError::Unreadable(_) => FlashKind::Warning,
            ImportError::Store(e) => {
                log::error!("bulk import aborted: {}", e);
                FlashKind::Danger
            }
            ImportError::Template(e) => {
                log::error!("template generation failed: {}", e);
                FlashKind::Danger
            }
        };
        notice_redirect("/painel_lider", kind, self.to_string())
    }
}
