use sea_orm::{entity::prelude::*, PaginatorTrait};
use serde::{Deserialize, Serialize};

use crate::{errors, module};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Module,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Module => Entity::has_many(module::Entity).into() }
    }
}

impl Related<module::Entity> for Entity {
    fn to() -> RelationDef { Relation::Module.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("course name required".into())); }
    Ok(())
}

pub fn validate(id: i32, name: &str) -> Result<(), errors::ModelError> {
    errors::validate_id("course", id)?;
    validate_name(name)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id).count(db).await? > 0)
}
