use sqlx_migrator::{Info, Migrator};

mod m0_1;
pub mod table;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(sqlx_migrator::vec_box![m0_1::M0_1])?;

    Ok(migrator)
}
