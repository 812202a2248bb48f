use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_in_memory;



/// Relation definitions and schema-level foreign keys
pub mod relation_tests;

/// Transaction handling tests
pub mod transaction_tests;

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) fn due(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(23, 59, 0))
        .expect("valid test date")
}
