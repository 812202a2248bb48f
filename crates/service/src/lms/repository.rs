use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use models::{assignment, course, module};

use super::domain::{CascadeSummary, CourseWithModules, ModuleWithAssignments, NewAssignment, NewCourse, NewModule};

/// Signals the persistence layer hands back to the services.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// An update matched no row: the record was removed or changed since it was read.
    #[error("concurrency fault: {0}")]
    Concurrency(String),
    #[error("duplicate identity: {0}")]
    Duplicate(String),
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotUpdated => return StoreError::Concurrency(err.to_string()),
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => return StoreError::Unavailable(err.to_string()),
            _ => {}
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StoreError::Duplicate(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StoreError::ForeignKey(msg),
            _ => StoreError::Db(err.to_string()),
        }
    }
}

/// Keyed course store.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<course::Model>, StoreError>;
    async fn find_course(&self, id: i32) -> Result<Option<course::Model>, StoreError>;
    /// Insert the course and every embedded module / assignment atomically.
    async fn insert_course_graph(&self, input: NewCourse) -> Result<CourseWithModules, StoreError>;
    async fn update_course(&self, course: course::Model) -> Result<course::Model, StoreError>;
    /// `None` when the course does not exist.
    async fn delete_course_cascade(&self, id: i32) -> Result<Option<CascadeSummary>, StoreError>;
}

/// Keyed module store.
#[async_trait]
pub trait ModuleStore: Send + Sync {
    async fn list_modules(&self) -> Result<Vec<module::Model>, StoreError>;
    async fn find_module(&self, id: i32) -> Result<Option<module::Model>, StoreError>;
    async fn list_modules_by_course(&self, course_id: i32) -> Result<Vec<module::Model>, StoreError>;
    async fn insert_module_graph(&self, input: NewModule) -> Result<ModuleWithAssignments, StoreError>;
    async fn update_module(&self, module: module::Model) -> Result<module::Model, StoreError>;
    async fn delete_module_cascade(&self, id: i32) -> Result<Option<CascadeSummary>, StoreError>;
}

/// Keyed assignment store.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn list_assignments(&self) -> Result<Vec<assignment::Model>, StoreError>;
    async fn find_assignment(&self, id: i32) -> Result<Option<assignment::Model>, StoreError>;
    async fn list_assignments_by_module(&self, module_id: i32) -> Result<Vec<assignment::Model>, StoreError>;
    async fn insert_assignment(&self, input: NewAssignment) -> Result<assignment::Model, StoreError>;
    async fn update_assignment(&self, assignment: assignment::Model) -> Result<assignment::Model, StoreError>;
    async fn delete_assignment(&self, id: i32) -> Result<bool, StoreError>;
}

/// The full persistence collaborator consumed by the three services.
pub trait LmsStore: CourseStore + ModuleStore + AssignmentStore {}

impl<T: CourseStore + ModuleStore + AssignmentStore> LmsStore for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_updated_is_a_concurrency_fault() {
        assert!(matches!(StoreError::from(DbErr::RecordNotUpdated), StoreError::Concurrency(_)));
    }

    #[test]
    fn connection_errors_mean_the_store_is_unavailable() {
        let acquire = DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout);
        let closed = DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::ConnectionClosed);
        let conn = DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".into()));
        for err in [acquire, closed, conn] {
            assert!(matches!(StoreError::from(err), StoreError::Unavailable(_)));
        }
    }

    #[test]
    fn other_errors_stay_generic() {
        assert!(matches!(StoreError::from(DbErr::Custom("boom".into())), StoreError::Db(_)));
    }
}
