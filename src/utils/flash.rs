//! One-shot notices carried across a redirect in a short-lived cookie.
use axum::response::Redirect;
use axum_extra::extract::CookieJar;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as B64_URL, Engine};
use serde::{Deserialize, Serialize};

use super::consts::{FLASH_COOKIE_NAME, FLASH_TTL_SECONDS};
use super::cookie_helpers::{clear_cookie, short_lived_cookie};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn new(kind: FlashKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn encode(&self) -> String {
        // Serializing a struct of a unit enum and a String cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        B64_URL.encode(json)
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let bytes = B64_URL.decode(raw).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Removes the pending notice from the jar, returning it for rendering.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar
        .get(FLASH_COOKIE_NAME)
        .and_then(|cookie| Flash::decode(cookie.value()));
    match flash {
        Some(flash) => (jar.add(clear_cookie(FLASH_COOKIE_NAME, "/")), Some(flash)),
        None => (jar, None),
    }
}

pub fn redirect_with_flash(
    jar: CookieJar,
    to: &str,
    kind: FlashKind,
    message: impl Into<String>,
) -> (CookieJar, Redirect) {
    let flash = Flash::new(kind, message);
    let jar = jar.add(short_lived_cookie(
        FLASH_COOKIE_NAME,
        &flash.encode(),
        FLASH_TTL_SECONDS,
    ));
    (jar, Redirect::to(to))
}
