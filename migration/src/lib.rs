pub use sea_orm_migration::prelude::*;

mod m20230823_000001_create_character_table;
mod m20230823_000002_create_planet_table;
mod m20230823_000003_create_user_table;
mod m20230823_000004_create_favorites_table;
mod m20230824_000005_add_favorites_unique_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230823_000001_create_character_table::Migration),
            Box::new(m20230823_000002_create_planet_table::Migration),
            Box::new(m20230823_000003_create_user_table::Migration),
            Box::new(m20230823_000004_create_favorites_table::Migration),
            Box::new(m20230824_000005_add_favorites_unique_index::Migration),
        ]
    }
}
