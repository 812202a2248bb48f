use sea_orm::{entity::prelude::*, PaginatorTrait};
use serde::{Deserialize, Serialize};

use crate::{errors, module};

/// `grade` and `due_date` are stored as given; no range is enforced.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub grade: i32,
    pub due_date: DateTime,
    pub module_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Module,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Module => Entity::belongs_to(module::Entity).from(Column::ModuleId).to(module::Column::Id).into() }
    }
}

impl Related<module::Entity> for Entity {
    fn to() -> RelationDef { Relation::Module.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(id: i32) -> Result<(), errors::ModelError> {
    errors::validate_id("assignment", id)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id).count(db).await? > 0)
}
