pub use sea_orm_migration::prelude::*;

mod m20240612_000001_create_team_table;
mod m20240612_000002_create_person_table;
mod m20240612_000003_seed_default_team;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240612_000001_create_team_table::Migration),
            Box::new(m20240612_000002_create_person_table::Migration),
            Box::new(m20240612_000003_seed_default_team::Migration),
        ]
    }
}
