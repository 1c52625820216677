//! Migrator for the company registry schema.
//! Running `up` at startup is idempotent; tables are created with
//! `if_not_exists`.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_companies;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_companies::Migration)]
    }
}
