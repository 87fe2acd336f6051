use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{CheckinRequestBody, LeaderCheckinRequestBody};
use crate::errors::{CheckinError, MemberError};
use crate::utils::{redirect_with_flash, FlashKind, LeaderSession};

/// Public check-in: the volunteer identifies by name and group.
pub async fn checkin_obreiro(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<CheckinRequestBody>, FormRejection>,
) -> Result<(CookieJar, Redirect), CheckinError> {
    let Form(request) = form.map_err(|_| CheckinError::InvalidForm)?;
    let location = request.location();
    let member = state
        .member_store
        .self_check_in(request.nome.trim(), request.grupo.trim(), location)
        .await?;
    log::info!("member {} checked in", member.id);

    Ok(redirect_with_flash(
        jar,
        "/",
        FlashKind::Success,
        "Check-in realizado com sucesso! Deus te abençoe!",
    ))
}

pub async fn checkin_lider(
    State(state): State<AppState>,
    session: LeaderSession,
    jar: CookieJar,
    form: Result<Form<LeaderCheckinRequestBody>, FormRejection>,
) -> Result<(CookieJar, Redirect), MemberError> {
    let Form(request) = form.map_err(|_| MemberError::InvalidForm)?;
    let presente = request.is_present();
    state
        .member_store
        .set_presence(request.membro_id, presente)
        .await?;
    log::info!(
        "leader {} set presence of member {} to {}",
        session.user_id,
        request.membro_id,
        presente
    );

    Ok(redirect_with_flash(
        jar,
        "/painel_lider",
        FlashKind::Success,
        "Check-in atualizado com sucesso!",
    ))
}
