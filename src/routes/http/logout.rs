use axum::response::Redirect;
use axum_extra::extract::CookieJar;

use crate::utils::{clear_cookie, redirect_with_flash, FlashKind, SESSION_COOKIE_NAME};

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    redirect_with_flash(
        jar.add(clear_cookie(SESSION_COOKIE_NAME, "/")),
        "/",
        FlashKind::Info,
        "Logout realizado com sucesso.",
    )
}
