use serde::{Deserialize, Serialize};

use super::member::Location;

/// Public self-check-in form.
#[derive(Deserialize, Serialize, Debug)]
pub struct CheckinRequestBody {
    pub nome: String,
    pub grupo: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl CheckinRequestBody {
    pub fn location(&self) -> Option<Location> {
        Location::parse(self.latitude.as_deref(), self.longitude.as_deref())
    }
}

/// Leader-assisted check-in form. An unchecked box is simply absent.
#[derive(Deserialize, Serialize, Debug)]
pub struct LeaderCheckinRequestBody {
    pub membro_id: i64,
    #[serde(default)]
    pub presente: Option<String>,
}

impl LeaderCheckinRequestBody {
    pub fn is_present(&self) -> bool {
        self.presente.as_deref() == Some("on")
    }
}
