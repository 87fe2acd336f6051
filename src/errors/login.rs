use axum::response::IntoResponse;
use thiserror::Error;

use super::notice_redirect;
use crate::domain::StoreError;
use crate::utils::FlashKind;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Credenciais inválidas ou acesso não autorizado")]
    InvalidCredentials,

    #[error("Erro no login. Tente novamente mais tarde.")]
    Session(#[from] jsonwebtoken::errors::Error),

    #[error("Erro no login. Tente novamente mais tarde.")]
    Store(#[from] StoreError),

    #[error("Erro no login. Tente novamente mais tarde.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let kind = match &self {
            LoginError::InvalidCredentials => FlashKind::Danger,
            LoginError::Session(e) => {
                log::error!("failed to issue session: {}", e);
                FlashKind::Danger
            }
            LoginError::Store(e) => {
                log::error!("login lookup failed: {}", e);
                FlashKind::Danger
            }
            LoginError::InternalServerError => FlashKind::Danger,
        };
        notice_redirect("/login_lider", kind, self.to_string())
    }
}
