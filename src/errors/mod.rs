mod ata;
mod auth;
mod bootstrap;
mod checkin;
mod import;
mod login;
mod member;
mod page;

pub use ata::*;
pub use auth::*;
pub use bootstrap::*;
pub use checkin::*;
pub use import::*;
pub use login::*;
pub use member::*;
pub use page::*;

use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use crate::utils::{redirect_with_flash, FlashKind};

/// Every route failure ends as a redirect carrying a one-shot notice.
pub(crate) fn notice_redirect(to: &str, kind: FlashKind, message: String) -> Response {
    redirect_with_flash(CookieJar::new(), to, kind, message).into_response()
}
