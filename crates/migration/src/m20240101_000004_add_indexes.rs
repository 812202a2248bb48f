use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Module: lookups by course and cascade deletes
        manager
            .create_index(
                Index::create()
                    .name("idx_module_course")
                    .table(Module::Table)
                    .col(Module::CourseId)
                    .to_owned(),
            )
            .await?;

        // Assignment: lookups by module
        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_module")
                    .table(Assignment::Table)
                    .col(Assignment::ModuleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_assignment_module").table(Assignment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_module_course").table(Module::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Module { Table, CourseId }

#[derive(DeriveIden)]
enum Assignment { Table, ModuleId }
