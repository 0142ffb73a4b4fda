pub use sea_orm_migration::prelude::*;

mod util;
mod m20250701_084512_init;
mod m20250703_102230_seed_demo;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250701_084512_init::Migration),
            Box::new(m20250703_102230_seed_demo::Migration),
        ]
    }
}
