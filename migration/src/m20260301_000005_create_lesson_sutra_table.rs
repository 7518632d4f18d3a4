use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_vedic_sutra_table::VedicSutra,
    m20260301_000004_create_lesson_table::Lesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonSutra::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonSutra::Id))
                    .col(integer_null(LessonSutra::LessonId))
                    .col(integer(LessonSutra::SutraId))
                    .col(boolean(LessonSutra::IsPrimary).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_sutra_lesson_id")
                            .from(LessonSutra::Table, LessonSutra::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_sutra_sutra_id")
                            .from(LessonSutra::Table, LessonSutra::SutraId)
                            .to(VedicSutra::Table, VedicSutra::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonSutra::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonSutra {
    Table,
    Id,
    LessonId,
    SutraId,
    IsPrimary,
}
