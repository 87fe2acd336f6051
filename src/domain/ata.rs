use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingType {
    ReuniaoObreiros,
    Culto,
    Ensaio,
    ReuniaoLideranca,
    Outro,
}

impl MeetingType {
    pub const ALL: [MeetingType; 5] = [
        MeetingType::ReuniaoObreiros,
        MeetingType::Culto,
        MeetingType::Ensaio,
        MeetingType::ReuniaoLideranca,
        MeetingType::Outro,
    ];

    /// Tag stored in the database and sent by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingType::ReuniaoObreiros => "reuniao_obreiros",
            MeetingType::Culto => "culto",
            MeetingType::Ensaio => "ensaio",
            MeetingType::ReuniaoLideranca => "reuniao_lideranca",
            MeetingType::Outro => "outro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeetingType::ReuniaoObreiros => "Reunião de Obreiros",
            MeetingType::Culto => "Culto",
            MeetingType::Ensaio => "Ensaio",
            MeetingType::ReuniaoLideranca => "Reunião de Liderança",
            MeetingType::Outro => "Outro",
        }
    }
}

impl FromStr for MeetingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeetingType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("unknown meeting type {}", s))
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Geral,
    Louvor,
    Intercessao,
    Recepcao,
    Evangelismo,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Geral,
        Department::Louvor,
        Department::Intercessao,
        Department::Recepcao,
        Department::Evangelismo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Geral => "geral",
            Department::Louvor => "louvor",
            Department::Intercessao => "intercessao",
            Department::Recepcao => "recepcao",
            Department::Evangelismo => "evangelismo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Geral => "Geral",
            Department::Louvor => "Louvor",
            Department::Intercessao => "Intercessão",
            Department::Recepcao => "Recepção",
            Department::Evangelismo => "Evangelismo",
        }
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s.trim())
            .ok_or_else(|| format!("unknown department {}", s))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of an ata's attendee snapshot. Name and group are copied at
/// creation so the snapshot survives later edits or deletion of the member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: i64,
    pub nome: String,
    pub grupo: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtaState {
    Active,
    Archived,
}

impl AtaState {
    pub fn from_archived(arquivada: bool) -> Self {
        if arquivada {
            AtaState::Archived
        } else {
            AtaState::Active
        }
    }

    /// Archiving is one-way; archiving an archived ata leaves it archived.
    pub fn archive(self) -> Self {
        AtaState::Archived
    }

    pub fn is_archived(&self) -> bool {
        matches!(self, AtaState::Archived)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ata {
    pub id: i64,
    pub data: NaiveDate,
    pub tipo: MeetingType,
    pub departamento: Department,
    pub tema: String,
    pub local: String,
    pub observacoes: String,
    pub presentes: Vec<Attendee>,
    pub state: AtaState,
    pub criado: i64,
}

impl Ata {
    pub fn data_label(&self) -> String {
        self.data.format("%d/%m/%Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAta {
    pub data: NaiveDate,
    pub tipo: MeetingType,
    pub departamento: Department,
    pub tema: String,
    pub local: String,
    pub observacoes: String,
    pub attendee_ids: Vec<i64>,
}
