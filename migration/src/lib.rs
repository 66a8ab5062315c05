pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_championship_table;
mod m20260301_000003_create_stage_table;
mod m20260301_000004_create_participant_tables;
mod m20260301_000005_create_file_ref_table;
mod m20260302_000006_create_referral_code_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_championship_table::Migration),
            Box::new(m20260301_000003_create_stage_table::Migration),
            Box::new(m20260301_000004_create_participant_tables::Migration),
            Box::new(m20260301_000005_create_file_ref_table::Migration),
            Box::new(m20260302_000006_create_referral_code_table::Migration),
        ]
    }
}
