use crate::{course, module};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use anyhow::Result;

use super::setup_test_db;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    course::ActiveModel { id: Set(1), name: Set("C1".into()) }.insert(&txn).await?;
    module::ActiveModel { id: Set(1), name: Set("M1".into()), course_id: Set(1) }.insert(&txn).await?;
    txn.commit().await?;

    assert!(course::exists(&db, 1).await?);
    assert!(module::exists(&db, 1).await?);
    Ok(())
}

/// A failed child insert rolls the parent back with it
#[tokio::test]
async fn test_transaction_rollback_on_error() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    course::ActiveModel { id: Set(1), name: Set("C1".into()) }.insert(&txn).await?;
    // course 2 does not exist: FK violation
    let child = module::ActiveModel { id: Set(1), name: Set("M1".into()), course_id: Set(2) }
        .insert(&txn)
        .await;
    assert!(child.is_err());
    txn.rollback().await?;

    assert!(course::Entity::find().all(&db).await?.is_empty());
    assert!(module::Entity::find().all(&db).await?.is_empty());
    Ok(())
}
