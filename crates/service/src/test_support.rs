use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use models::db::{connect_in_memory, connect_with_config, DatabaseConfig};
use models::{assignment, course, module};

use crate::lms::domain::{CascadeSummary, CourseWithModules, ModuleWithAssignments, NewAssignment, NewCourse, NewModule};
use crate::lms::repo::SeaOrmLmsStore;
use crate::lms::repository::{AssignmentStore, CourseStore, ModuleStore, StoreError};
use crate::LmsServices;

/// Fresh migrated in-memory database, private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// In-memory database whose single connection times out after one second when busy.
pub async fn pinned_pool() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout_secs: 1,
        ..Default::default()
    };
    connect_with_config(&cfg).await
}

pub fn due(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(23, 59, 0)).expect("valid date")
}

pub async fn services() -> Result<LmsServices<SeaOrmLmsStore>, anyhow::Error> {
    Ok(LmsServices::new(Arc::new(SeaOrmLmsStore::new(get_db().await?))))
}

pub async fn faulty_services() -> Result<LmsServices<ConcurrencyFaultStore<SeaOrmLmsStore>>, anyhow::Error> {
    let inner = SeaOrmLmsStore::new(get_db().await?);
    Ok(LmsServices::new(Arc::new(ConcurrencyFaultStore(inner))))
}

pub fn unavailable_services() -> LmsServices<UnavailableStore> {
    LmsServices::new(Arc::new(UnavailableStore))
}

/// Delegates everything, but every update reports the row as changed underneath it.
pub struct ConcurrencyFaultStore<R>(pub R);

fn fault() -> StoreError {
    StoreError::Concurrency("row version changed".into())
}

#[async_trait]
impl<R: CourseStore> CourseStore for ConcurrencyFaultStore<R> {
    async fn list_courses(&self) -> Result<Vec<course::Model>, StoreError> { self.0.list_courses().await }
    async fn find_course(&self, id: i32) -> Result<Option<course::Model>, StoreError> { self.0.find_course(id).await }
    async fn insert_course_graph(&self, input: NewCourse) -> Result<CourseWithModules, StoreError> {
        self.0.insert_course_graph(input).await
    }
    async fn update_course(&self, _course: course::Model) -> Result<course::Model, StoreError> { Err(fault()) }
    async fn delete_course_cascade(&self, id: i32) -> Result<Option<CascadeSummary>, StoreError> {
        self.0.delete_course_cascade(id).await
    }
}

#[async_trait]
impl<R: ModuleStore> ModuleStore for ConcurrencyFaultStore<R> {
    async fn list_modules(&self) -> Result<Vec<module::Model>, StoreError> { self.0.list_modules().await }
    async fn find_module(&self, id: i32) -> Result<Option<module::Model>, StoreError> { self.0.find_module(id).await }
    async fn list_modules_by_course(&self, course_id: i32) -> Result<Vec<module::Model>, StoreError> {
        self.0.list_modules_by_course(course_id).await
    }
    async fn insert_module_graph(&self, input: NewModule) -> Result<ModuleWithAssignments, StoreError> {
        self.0.insert_module_graph(input).await
    }
    async fn update_module(&self, _module: module::Model) -> Result<module::Model, StoreError> { Err(fault()) }
    async fn delete_module_cascade(&self, id: i32) -> Result<Option<CascadeSummary>, StoreError> {
        self.0.delete_module_cascade(id).await
    }
}

#[async_trait]
impl<R: AssignmentStore> AssignmentStore for ConcurrencyFaultStore<R> {
    async fn list_assignments(&self) -> Result<Vec<assignment::Model>, StoreError> { self.0.list_assignments().await }
    async fn find_assignment(&self, id: i32) -> Result<Option<assignment::Model>, StoreError> {
        self.0.find_assignment(id).await
    }
    async fn list_assignments_by_module(&self, module_id: i32) -> Result<Vec<assignment::Model>, StoreError> {
        self.0.list_assignments_by_module(module_id).await
    }
    async fn insert_assignment(&self, input: NewAssignment) -> Result<assignment::Model, StoreError> {
        self.0.insert_assignment(input).await
    }
    async fn update_assignment(&self, _assignment: assignment::Model) -> Result<assignment::Model, StoreError> {
        Err(fault())
    }
    async fn delete_assignment(&self, id: i32) -> Result<bool, StoreError> { self.0.delete_assignment(id).await }
}

/// Every call fails as if the connection pool could not hand out a connection.
pub struct UnavailableStore;

fn down<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable("connection pool exhausted".into()))
}

#[async_trait]
impl CourseStore for UnavailableStore {
    async fn list_courses(&self) -> Result<Vec<course::Model>, StoreError> { down() }
    async fn find_course(&self, _id: i32) -> Result<Option<course::Model>, StoreError> { down() }
    async fn insert_course_graph(&self, _input: NewCourse) -> Result<CourseWithModules, StoreError> { down() }
    async fn update_course(&self, _course: course::Model) -> Result<course::Model, StoreError> { down() }
    async fn delete_course_cascade(&self, _id: i32) -> Result<Option<CascadeSummary>, StoreError> { down() }
}

#[async_trait]
impl ModuleStore for UnavailableStore {
    async fn list_modules(&self) -> Result<Vec<module::Model>, StoreError> { down() }
    async fn find_module(&self, _id: i32) -> Result<Option<module::Model>, StoreError> { down() }
    async fn list_modules_by_course(&self, _course_id: i32) -> Result<Vec<module::Model>, StoreError> { down() }
    async fn insert_module_graph(&self, _input: NewModule) -> Result<ModuleWithAssignments, StoreError> { down() }
    async fn update_module(&self, _module: module::Model) -> Result<module::Model, StoreError> { down() }
    async fn delete_module_cascade(&self, _id: i32) -> Result<Option<CascadeSummary>, StoreError> { down() }
}

#[async_trait]
impl AssignmentStore for UnavailableStore {
    async fn list_assignments(&self) -> Result<Vec<assignment::Model>, StoreError> { down() }
    async fn find_assignment(&self, _id: i32) -> Result<Option<assignment::Model>, StoreError> { down() }
    async fn list_assignments_by_module(&self, _module_id: i32) -> Result<Vec<assignment::Model>, StoreError> {
        down()
    }
    async fn insert_assignment(&self, _input: NewAssignment) -> Result<assignment::Model, StoreError> { down() }
    async fn update_assignment(&self, _assignment: assignment::Model) -> Result<assignment::Model, StoreError> {
        down()
    }
    async fn delete_assignment(&self, _id: i32) -> Result<bool, StoreError> { down() }
}
