pub use sea_orm_migration::prelude::*;

mod m20261012_000001_create_user_table;
mod m20261012_000002_create_module_table;
mod m20261012_000003_create_calendar_event_table;
mod m20261012_000004_create_event_module_table;
mod m20261012_000005_create_event_vote_table;
mod m20261012_000006_create_event_choice_table;
mod m20261012_000007_create_flight_table;
mod m20261012_000008_create_slot_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261012_000001_create_user_table::Migration),
            Box::new(m20261012_000002_create_module_table::Migration),
            Box::new(m20261012_000003_create_calendar_event_table::Migration),
            Box::new(m20261012_000004_create_event_module_table::Migration),
            Box::new(m20261012_000005_create_event_vote_table::Migration),
            Box::new(m20261012_000006_create_event_choice_table::Migration),
            Box::new(m20261012_000007_create_flight_table::Migration),
            Box::new(m20261012_000008_create_slot_table::Migration),
        ]
    }
}
