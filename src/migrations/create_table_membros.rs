use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("membros")
        .id(|c| c("id", Type::IntBig))
        .column(|c| c("nome", Type::String))
        .column(|c| c("grupo", Type::String))
        .column(|c| c("telefone", Type::String))
        .column(|c| c("email", Type::String))
        .column(|c| c("observacoes", Type::String))
        .column(|c| c("presente", Type::Bool))
        .column(|c| c("data_checkin", Type::IntBig).is_null())
        .column(|c| c("criado", Type::IntBig));
    Ok(MigrationStep::new("create_table_membros", m))
}
