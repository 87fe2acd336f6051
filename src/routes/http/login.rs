use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, Password};
use crate::errors::{LoginError, PageError};
use crate::services::AuthService;
use crate::utils::{generate_session_cookie, redirect_with_flash, take_flash, FlashKind};
use crate::views::{base_context, render};

pub async fn login_lider(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (jar, flash) = take_flash(jar);
    let page = render(&state.templates, "login_lider.html", &base_context(flash, None))?;
    Ok((jar, page))
}

pub async fn auth_lider(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<LoginRequestBody>, FormRejection>,
) -> Result<(CookieJar, Redirect), LoginError> {
    let Form(request) = form.map_err(|_| LoginError::InvalidCredentials)?;
    let email = Email::parse(request.email).or(Err(LoginError::InvalidCredentials))?;
    let password = Password::parse(request.senha).or(Err(LoginError::InvalidCredentials))?;

    let leader = AuthService::login(state.user_store.as_ref(), email, password).await?;
    let cookie = generate_session_cookie(&leader, &state.config)?;

    Ok(redirect_with_flash(
        jar.add(cookie),
        "/painel_lider",
        FlashKind::Success,
        "Login bem-sucedido!",
    ))
}
