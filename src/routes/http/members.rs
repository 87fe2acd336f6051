use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::NewMemberRequestBody;
use crate::errors::MemberError;
use crate::utils::{redirect_with_flash, FlashKind, LeaderSession};

pub async fn cadastrar_obreiro(
    State(state): State<AppState>,
    _session: LeaderSession,
    jar: CookieJar,
    form: Result<Form<NewMemberRequestBody>, FormRejection>,
) -> Result<(CookieJar, Redirect), MemberError> {
    let Form(request) = form.map_err(|_| MemberError::InvalidForm)?;
    let member = request.into_new_member().ok_or(MemberError::MissingName)?;
    let member = state.member_store.add_member(member).await?;
    log::info!("member {} registered", member.id);

    Ok(redirect_with_flash(
        jar,
        "/painel_lider",
        FlashKind::Success,
        "Obreiro cadastrado com sucesso!",
    ))
}

pub async fn remover_obreiro(
    State(state): State<AppState>,
    _session: LeaderSession,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<(CookieJar, Redirect), MemberError> {
    state.member_store.delete_member(id).await?;
    log::info!("member {} removed", id);

    Ok(redirect_with_flash(
        jar,
        "/painel_lider",
        FlashKind::Success,
        "Obreiro removido com sucesso!",
    ))
}
