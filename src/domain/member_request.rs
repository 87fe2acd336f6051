use serde::{Deserialize, Serialize};

use super::member::NewMember;

#[derive(Deserialize, Serialize, Debug)]
pub struct NewMemberRequestBody {
    pub nome: String,
    #[serde(default)]
    pub grupo: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub email: String,
}

impl NewMemberRequestBody {
    /// None when the name is blank.
    pub fn into_new_member(self) -> Option<NewMember> {
        let nome = self.nome.trim();
        if nome.is_empty() {
            return None;
        }
        Some(
            NewMember::new(nome, self.grupo.trim())
                .with_contact(self.telefone.trim(), self.email.trim()),
        )
    }
}
