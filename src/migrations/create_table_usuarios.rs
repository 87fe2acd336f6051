use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(_state: &TableState) -> Result<MigrationStep> {
    let m = create_table("usuarios")
        .id(|c| c("id", Type::IntBig))
        .column(|c| c("nome", Type::String))
        .column(|c| c("email", Type::String).create_unique_index())
        .column(|c| c("senha", Type::String))
        .column(|c| c("tipo", Type::String))
        .column(|c| c("criado", Type::IntBig));
    Ok(MigrationStep::new("create_table_usuarios", m))
}
