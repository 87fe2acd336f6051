use welds::errors::Result;
use welds::migrations::prelude::*;

/// Applies every pending step in order; welds records applied steps so
/// re-running is a no-op.
pub async fn up(client: &dyn welds::TransactStart) -> Result<()> {
    let list: Vec<MigrationFn> = vec![
        create_table_usuarios::step,
        create_table_membros::step,
        add_latitude_to_membros::step,
        add_longitude_to_membros::step,
        create_table_atas::step,
    ];
    welds::migrations::up(client, list.as_slice()).await?;
    Ok(())
}

mod add_latitude_to_membros;
mod add_longitude_to_membros;
mod create_table_atas;
mod create_table_membros;
mod create_table_usuarios;
