use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use thiserror::Error;

use crate::domain::{Email, Leader, Password, StoreError, UserStore};
use crate::errors::LoginError;

#[derive(Error, Debug)]
pub enum PasswordHashError {
    #[error("password hashing failed")]
    Hash,
    #[error("password worker panicked")]
    Join,
}

// Hashing is CPU bound, keep it off the async workers
pub async fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let password_clone = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).map_err(|_| PasswordHashError::Hash)?,
        );
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(password_clone.as_bytes(), &salt)
            .map_err(|_| PasswordHashError::Hash)?
            .to_string();
        Ok(password_hash)
    })
    .await
    .map_err(|_| PasswordHashError::Join)?
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordHashError> {
    let password_clone = password.to_owned();
    let hash_clone = hash.to_owned();

    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&hash_clone).map_err(|_| PasswordHashError::Hash)?;
        // Parameters are read from the PHC string.
        match Argon2::default().verify_password(password_clone.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    })
    .await
    .map_err(|_| PasswordHashError::Join)?
}

pub struct AuthService;

impl AuthService {
    /// Checks leader credentials. Unknown email and wrong password are
    /// indistinguishable to the caller.
    pub async fn login(
        user_store: &dyn UserStore,
        email: Email,
        password: Password,
    ) -> Result<Leader, LoginError> {
        let stored = match user_store.find_leader(&email).await {
            Ok(stored) => stored,
            Err(StoreError::NotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => return Err(LoginError::Store(e)),
        };

        let valid = verify_password(password.as_ref(), &stored.password_hash)
            .await
            .map_err(|_| LoginError::InternalServerError)?;

        if valid {
            log::info!("leader {} logged in", stored.leader.id);
            Ok(stored.leader)
        } else {
            Err(LoginError::InvalidCredentials)
        }
    }
}
