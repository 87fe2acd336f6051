use welds::prelude::*;

#[derive(Debug, WeldsModel)]
#[welds(table = "usuarios")]
pub struct UserModel {
    #[welds(primary_key)]
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub tipo: String,
    pub criado: i64,
}
