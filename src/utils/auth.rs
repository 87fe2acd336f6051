use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::CookieJar;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::domain::{Leader, Role};
use crate::errors::AuthError;

use super::consts::SESSION_COOKIE_NAME;
use super::cookie_helpers::session_cookie;
use super::Config;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i64,
    pub nome: String,
    pub role: Role,
    pub iat: usize,
}

/// Authenticated leader for the current request, rebuilt from the session
/// cookie on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderSession {
    pub user_id: i64,
    pub nome: String,
    pub role: Role,
}

impl From<SessionClaims> for LeaderSession {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.sub,
            nome: claims.nome,
            role: claims.role,
        }
    }
}

// Create the session cookie for a leader that passed the credential check
pub fn generate_session_cookie(
    leader: &Leader,
    config: &Config,
) -> Result<Cookie<'static>, jsonwebtoken::errors::Error> {
    let token = generate_session_token(leader, config)?;
    Ok(session_cookie(SESSION_COOKIE_NAME, &token))
}

pub fn generate_session_token(
    leader: &Leader,
    config: &Config,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = Utc::now().timestamp().max(0) as usize;
    let claims = SessionClaims {
        sub: leader.id,
        nome: leader.nome.clone(),
        role: leader.role,
        iat,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.session_secret().as_bytes()),
    )
}

pub fn decode_session_token(
    token: &str,
    config: &Config,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    // Sessions carry no expiry; only the signature is checked.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.session_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

#[async_trait]
impl FromRequestParts<AppState> for LeaderSession {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(AuthError::Unauthorized)?;

        let claims =
            decode_session_token(&token, &state.config).map_err(|_| AuthError::Unauthorized)?;

        match claims.role {
            Role::Lider => Ok(LeaderSession::from(claims)),
        }
    }
}
