use axum::response::IntoResponse;
use thiserror::Error;

use super::notice_redirect;
use crate::utils::FlashKind;

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("Acesso restrito para líderes. Faça login primeiro.")]
    Unauthorized,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        notice_redirect("/login_lider", FlashKind::Warning, self.to_string())
    }
}
