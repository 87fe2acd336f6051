use welds::errors::Result;
use welds::migrations::prelude::*;

pub(super) fn step(state: &TableState) -> Result<MigrationStep> {
    let alter = change_table(state, "membros")?;
    let m = alter.add_column("latitude", Type::FloatBig).null();
    Ok(MigrationStep::new("add_latitude_to_membros", m))
}
