use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("atas")
        .id(|c| c("id", Type::IntBig))
        .column(|c| c("data", Type::String))
        .column(|c| c("tipo", Type::String))
        .column(|c| c("departamento", Type::String))
        .column(|c| c("tema", Type::String))
        .column(|c| c("local_reuniao", Type::String))
        .column(|c| c("observacoes", Type::String))
        .column(|c| c("presentes", Type::String))
        .column(|c| c("arquivada", Type::Bool))
        .column(|c| c("criado", Type::IntBig));
    Ok(MigrationStep::new("create_table_atas", m))
}
