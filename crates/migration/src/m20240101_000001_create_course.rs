//! Create `course` table.
//!
//! Root of the containment hierarchy; ids are assigned by the caller.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(integer(Course::Id).primary_key())
                    .col(string(Course::Name).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Course::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Course { Table, Id, Name }
