use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect};
use axum_extra::extract::{CookieJar, Form, FormRejection};
use chrono::Local;

use crate::app_state::AppState;
use crate::domain::{AtaRequestBody, DATE_FORMAT};
use crate::errors::{AtaError, PageError};
use crate::services::ata_pdf;
use crate::utils::{redirect_with_flash, take_flash, FlashKind, LeaderSession};
use crate::views::{
    base_context, department_options, meeting_type_options, render, AtaRow, MemberRow,
};

/// Minutes form, pre-listing the members currently present.
pub async fn ata_form(
    State(state): State<AppState>,
    session: LeaderSession,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let present = state.member_store.list_present().await?;

    let (jar, flash) = take_flash(jar);
    let mut context = base_context(flash, Some(&session.nome));
    context.insert(
        "presentes",
        &present.iter().map(MemberRow::from).collect::<Vec<_>>(),
    );
    context.insert("tipos", &meeting_type_options());
    context.insert("departamentos", &department_options());
    context.insert(
        "hoje",
        &Local::now().date_naive().format(DATE_FORMAT).to_string(),
    );

    let page = render(&state.templates, "ata.html", &context)?;
    Ok((jar, page))
}

pub async fn create_ata(
    State(state): State<AppState>,
    session: LeaderSession,
    jar: CookieJar,
    form: Result<Form<AtaRequestBody>, FormRejection>,
) -> Result<(CookieJar, Redirect), AtaError> {
    let Form(request) = form.map_err(|_| AtaError::InvalidForm)?;
    let new_ata = request.try_into_new_ata()?;
    let ata = state.ata_store.create_ata(new_ata).await?;
    log::info!(
        "leader {} recorded ata {} with {} attendees",
        session.user_id,
        ata.id,
        ata.presentes.len()
    );

    Ok(redirect_with_flash(
        jar,
        "/painel_lider",
        FlashKind::Success,
        "Ata registrada com sucesso!",
    ))
}

pub async fn gerar_ata_pdf(
    State(state): State<AppState>,
    _session: LeaderSession,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AtaError> {
    let ata = state.ata_store.get_ata(id).await?;
    let pdf = ata_pdf::generate(&ata).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"ata_{}_{}.pdf\"", ata.id, ata.data),
            ),
        ],
        pdf,
    ))
}

pub async fn arquivar_ata(
    State(state): State<AppState>,
    _session: LeaderSession,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<(CookieJar, Redirect), AtaError> {
    state.ata_store.archive_ata(id).await?;
    log::info!("ata {} archived", id);

    Ok(redirect_with_flash(
        jar,
        "/painel_lider",
        FlashKind::Success,
        "Ata arquivada com sucesso!",
    ))
}

pub async fn visualizar_atas_arquivadas(
    State(state): State<AppState>,
    session: LeaderSession,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let atas = state.ata_store.list_atas(true).await?;

    let (jar, flash) = take_flash(jar);
    let mut context = base_context(flash, Some(&session.nome));
    context.insert("atas", &atas.iter().map(AtaRow::from).collect::<Vec<_>>());

    let page = render(&state.templates, "atas_arquivadas.html", &context)?;
    Ok((jar, page))
}
