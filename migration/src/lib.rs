pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_unit_table;
mod m20260301_000003_create_vedic_sutra_table;
mod m20260301_000004_create_lesson_table;
mod m20260301_000005_create_lesson_sutra_table;
mod m20260301_000006_create_exercise_table;
mod m20260301_000007_create_quiz_table;
mod m20260301_000008_create_quiz_question_table;
mod m20260301_000009_create_quiz_attempt_table;
mod m20260301_000010_create_user_progress_table;
mod m20260301_000011_create_achievement_table;
mod m20260301_000012_create_user_achievement_table;
mod m20260301_000013_create_leaderboard_table;
mod m20260301_000014_create_daily_challenge_table;
mod m20260301_000015_create_challenge_attempt_table;
mod m20260301_000016_seed_achievements;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_unit_table::Migration),
            Box::new(m20260301_000003_create_vedic_sutra_table::Migration),
            Box::new(m20260301_000004_create_lesson_table::Migration),
            Box::new(m20260301_000005_create_lesson_sutra_table::Migration),
            Box::new(m20260301_000006_create_exercise_table::Migration),
            Box::new(m20260301_000007_create_quiz_table::Migration),
            Box::new(m20260301_000008_create_quiz_question_table::Migration),
            Box::new(m20260301_000009_create_quiz_attempt_table::Migration),
            Box::new(m20260301_000010_create_user_progress_table::Migration),
            Box::new(m20260301_000011_create_achievement_table::Migration),
            Box::new(m20260301_000012_create_user_achievement_table::Migration),
            Box::new(m20260301_000013_create_leaderboard_table::Migration),
            Box::new(m20260301_000014_create_daily_challenge_table::Migration),
            Box::new(m20260301_000015_create_challenge_attempt_table::Migration),
            Box::new(m20260301_000016_seed_achievements::Migration),
        ]
    }
}
