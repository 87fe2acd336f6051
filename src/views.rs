//! Server-rendered pages. Templates are compiled into the binary.
use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::{format_timestamp, Ata, Department, Member, MeetingType};
use crate::errors::PageError;
use crate::utils::Flash;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("login_lider.html", include_str!("../templates/login_lider.html")),
    ("painel_lider.html", include_str!("../templates/painel_lider.html")),
    ("ata.html", include_str!("../templates/ata.html")),
    ("atas_arquivadas.html", include_str!("../templates/atas_arquivadas.html")),
];

pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    Ok(tera)
}

pub fn render(
    templates: &Tera,
    name: &str,
    context: &Context,
) -> Result<Html<String>, PageError> {
    Ok(Html(templates.render(name, context)?))
}

pub fn base_context(flash: Option<Flash>, leader_nome: Option<&str>) -> Context {
    let mut context = Context::new();
    context.insert("flash", &flash);
    context.insert("lider", &leader_nome);
    context
}

#[derive(Debug, Serialize)]
pub struct MemberRow {
    pub id: i64,
    pub nome: String,
    pub grupo: String,
    pub telefone: String,
    pub email: String,
    pub presente: bool,
    pub data_checkin: Option<String>,
    pub localizacao: Option<String>,
}

impl From<&Member> for MemberRow {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            nome: member.nome.clone(),
            grupo: member.grupo.clone(),
            telefone: member.telefone.clone(),
            email: member.email.clone(),
            presente: member.presente,
            data_checkin: member.data_checkin.map(format_timestamp),
            localizacao: member
                .location
                .map(|l| format!("{:.5}, {:.5}", l.latitude, l.longitude)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AtaRow {
    pub id: i64,
    pub data: String,
    pub tipo: &'static str,
    pub departamento: &'static str,
    pub tema: String,
    pub local: String,
    pub total_presentes: usize,
    pub arquivada: bool,
}

impl From<&Ata> for AtaRow {
    fn from(ata: &Ata) -> Self {
        Self {
            id: ata.id,
            data: ata.data_label(),
            tipo: ata.tipo.label(),
            departamento: ata.departamento.label(),
            tema: ata.tema.clone(),
            local: ata.local.clone(),
            total_presentes: ata.presentes.len(),
            arquivada: ata.state.is_archived(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn meeting_type_options() -> Vec<SelectOption> {
    MeetingType::ALL
        .iter()
        .map(|t| SelectOption {
            value: t.as_str(),
            label: t.label(),
        })
        .collect()
}

pub fn department_options() -> Vec<SelectOption> {
    Department::ALL
        .iter()
        .map(|d| SelectOption {
            value: d.as_str(),
            label: d.label(),
        })
        .collect()
}
