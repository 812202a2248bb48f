use crate::{assignment, course, module};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use anyhow::Result;

use super::{due, setup_test_db};

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<()> {
    course::ActiveModel { id: Set(1), name: Set("C1".into()) }.insert(db).await?;
    module::ActiveModel { id: Set(10), name: Set("M10".into()), course_id: Set(1) }.insert(db).await?;
    module::ActiveModel { id: Set(11), name: Set("M11".into()), course_id: Set(1) }.insert(db).await?;
    for (id, module_id) in [(100, 10), (101, 10), (110, 11)] {
        assignment::ActiveModel {
            id: Set(id),
            name: Set(format!("A{id}")),
            grade: Set(100),
            due_date: Set(due(2024, 1, 1)),
            module_id: Set(module_id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

/// Related lookups follow the one-directional foreign keys
#[tokio::test]
async fn test_find_related() -> Result<()> {
    let db = setup_test_db().await?;
    seed(&db).await?;

    let c = course::Entity::find_by_id(1).one(&db).await?.expect("course");
    let modules = c.find_related(module::Entity).all(&db).await?;
    assert_eq!(modules.len(), 2);

    let m = module::Entity::find_by_id(10).one(&db).await?.expect("module");
    assert_eq!(m.find_related(assignment::Entity).all(&db).await?.len(), 2);
    assert_eq!(m.find_related(course::Entity).one(&db).await?.map(|c| c.id), Some(1));
    Ok(())
}

/// Schema rejects a module pointing at a missing course
#[tokio::test]
async fn test_foreign_key_enforced() -> Result<()> {
    let db = setup_test_db().await?;
    let res = module::ActiveModel { id: Set(1), name: Set("orphan".into()), course_id: Set(99) }
        .insert(&db)
        .await;
    assert!(res.is_err());
    assert!(module::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

/// ON DELETE CASCADE is declared on both foreign keys
#[tokio::test]
async fn test_schema_cascade() -> Result<()> {
    let db = setup_test_db().await?;
    seed(&db).await?;

    course::Entity::delete_by_id(1).exec(&db).await?;
    assert!(module::Entity::find().all(&db).await?.is_empty());
    assert!(assignment::Entity::find().all(&db).await?.is_empty());
    Ok(())
}
