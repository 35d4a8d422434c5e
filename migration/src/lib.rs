pub use sea_orm_migration::prelude::*;

mod m20191101_000001_create_user_table;
mod m20191101_000002_create_quiz_table;
mod m20191101_000003_create_question_table;
mod m20191101_000004_create_choice_table;
mod m20191101_000005_create_player_table;
mod m20191118_000006_create_timer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20191101_000001_create_user_table::Migration),
            Box::new(m20191101_000002_create_quiz_table::Migration),
            Box::new(m20191101_000003_create_question_table::Migration),
            Box::new(m20191101_000004_create_choice_table::Migration),
            Box::new(m20191101_000005_create_player_table::Migration),
            Box::new(m20191118_000006_create_timer_table::Migration),
        ]
    }
}
