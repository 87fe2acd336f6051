use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::errors::PageError;
use crate::utils::take_flash;
use crate::views::{base_context, render};

pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (jar, flash) = take_flash(jar);
    let page = render(&state.templates, "index.html", &base_context(flash, None))?;
    Ok((jar, page))
}
