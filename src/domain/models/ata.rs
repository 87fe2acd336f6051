use welds::prelude::*;

#[derive(Debug, WeldsModel)]
#[welds(table = "atas")]
pub struct AtaModel {
    #[welds(primary_key)]
    pub id: i64,
    /// Meeting date as `YYYY-MM-DD`, so text order is date order.
    pub data: String,
    pub tipo: String,
    pub departamento: String,
    pub tema: String,
    pub local_reuniao: String,
    pub observacoes: String,
    /// JSON array of attendee snapshots.
    pub presentes: String,
    pub arquivada: bool,
    pub criado: i64,
}
