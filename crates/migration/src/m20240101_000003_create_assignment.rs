//! Create `assignment` table.
//!
//! Leaf of the hierarchy; `grade` and `due_date` carry no range constraints.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(integer(Assignment::Id).primary_key())
                    .col(string(Assignment::Name).not_null())
                    .col(integer(Assignment::Grade).not_null())
                    .col(date_time(Assignment::DueDate).not_null())
                    .col(integer(Assignment::ModuleId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_module")
                            .from(Assignment::Table, Assignment::ModuleId)
                            .to(Module::Table, Module::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Assignment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Assignment { Table, Id, Name, Grade, DueDate, ModuleId }

#[derive(DeriveIden)]
enum Module { Table, Id }
