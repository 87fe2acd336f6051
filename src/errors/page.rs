use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use super::notice_redirect;
use crate::domain::StoreError;
use crate::utils::FlashKind;

/// Failures while building a rendered page.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Erro ao carregar a página. Tente novamente.")]
    Store(#[from] StoreError),

    #[error("Algo deu errado. Tente novamente mais tarde.")]
    Render(#[from] tera::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        match self {
            PageError::Store(e) => {
                log::error!("page data unavailable: {}", e);
                notice_redirect(
                    "/login_lider",
                    FlashKind::Danger,
                    PageError::Store(e).to_string(),
                )
            }
            PageError::Render(e) => {
                log::error!("template rendering failed: {:?}", e);
                let message = PageError::Render(e).to_string();
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
