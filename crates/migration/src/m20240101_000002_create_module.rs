use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Module::Table)
                    .if_not_exists()
                    .col(integer(Module::Id).primary_key())
                    .col(string(Module::Name).not_null())
                    .col(integer(Module::CourseId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_module_course")
                            .from(Module::Table, Module::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Module::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Module { Table, Id, Name, CourseId }

#[derive(DeriveIden)]
enum Course { Table, Id }
