use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::errors::PageError;
use crate::utils::{take_flash, LeaderSession};
use crate::views::{base_context, render, AtaRow, MemberRow};

/// Leader dashboard: roster with presence counts and the active atas.
pub async fn painel_lider(
    State(state): State<AppState>,
    session: LeaderSession,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let members = state.member_store.list_members().await?;
    let atas = state.ata_store.list_atas(false).await?;

    let total = members.len();
    let presentes = members.iter().filter(|m| m.presente).count();

    let (jar, flash) = take_flash(jar);
    let mut context = base_context(flash, Some(&session.nome));
    context.insert(
        "obreiros",
        &members.iter().map(MemberRow::from).collect::<Vec<_>>(),
    );
    context.insert("atas", &atas.iter().map(AtaRow::from).collect::<Vec<_>>());
    context.insert("total", &total);
    context.insert("presentes", &presentes);
    context.insert("ausentes", &(total - presentes));

    let page = render(&state.templates, "painel_lider.html", &context)?;
    Ok((jar, page))
}
