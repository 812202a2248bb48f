use sea_orm::{entity::prelude::*, PaginatorTrait};
use serde::{Deserialize, Serialize};

use crate::{assignment, course, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "module")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub course_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Course,
    Assignment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Course => Entity::belongs_to(course::Entity).from(Column::CourseId).to(course::Column::Id).into(),
            Relation::Assignment => Entity::has_many(assignment::Entity).into(),
        }
    }
}

impl Related<course::Entity> for Entity {
    fn to() -> RelationDef { Relation::Course.def() }
}

impl Related<assignment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Assignment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(id: i32) -> Result<(), errors::ModelError> {
    errors::validate_id("module", id)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id).count(db).await? > 0)
}
