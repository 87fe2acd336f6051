use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::email::Email;

/// Roles a stored user can hold. Only leaders exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Lider,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Lider => "lider",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lider" => Ok(Role::Lider),
            other => Err(format!("unknown role {}", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Leader {
    pub id: i64,
    pub nome: String,
    pub email: Email,
    pub role: Role,
}

/// A leader row together with its password hash, as read for a credential check.
#[derive(Debug, Clone)]
pub struct StoredLeader {
    pub leader: Leader,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewLeader {
    pub nome: String,
    pub email: Email,
    pub password_hash: String,
    pub role: Role,
}
