use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::errors::ImportError;
use crate::services::bulk_import::{parse_roster, template_csv, TEMPLATE_FILE_NAME};
use crate::utils::{redirect_with_flash, FlashKind, LeaderSession};

const UPLOAD_FIELD: &str = "arquivo";

pub async fn download_modelo_obreiro(
    _session: LeaderSession,
) -> Result<impl IntoResponse, ImportError> {
    let body = template_csv()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", TEMPLATE_FILE_NAME),
            ),
        ],
        body,
    ))
}

/// Imports every row of the uploaded roster in one transaction.
pub async fn upload_obreiros(
    State(state): State<AppState>,
    _session: LeaderSession,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Redirect), ImportError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ImportError::Unreadable(e.body_text()))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ImportError::Unreadable(e.body_text()))?;
            upload = Some(bytes);
        }
    }
    let upload = upload
        .filter(|bytes| !bytes.is_empty())
        .ok_or(ImportError::MissingFile)?;

    let members = parse_roster(&upload)?;
    let imported = state.member_store.add_members(members).await?;
    log::info!("{} members imported from spreadsheet", imported);

    Ok(redirect_with_flash(
        jar,
        "/painel_lider",
        FlashKind::Success,
        format!("{} obreiros importados com sucesso!", imported),
    ))
}
