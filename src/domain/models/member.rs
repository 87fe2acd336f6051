use welds::prelude::*;

#[derive(Debug, WeldsModel)]
#[welds(table = "membros")]
pub struct MemberModel {
    #[welds(primary_key)]
    pub id: i64,
    pub nome: String,
    pub grupo: String,
    pub telefone: String,
    pub email: String,
    pub observacoes: String,
    pub presente: bool,
    pub data_checkin: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub criado: i64,
}
