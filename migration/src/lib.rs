pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_enums_and_trigger_function;
mod m20261018_000002_create_content_tables;
mod m20261018_000003_create_contact_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_enums_and_trigger_function::Migration),
            Box::new(m20261018_000002_create_content_tables::Migration),
            Box::new(m20261018_000003_create_contact_messages_table::Migration),
        ]
    }
}
