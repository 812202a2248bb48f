use std::sync::Arc;

use tracing::{info, instrument};

use models::{assignment, module};

use crate::errors::ServiceError;
use crate::lms::course_service::CourseService;
use crate::lms::domain::{CascadeSummary, ModuleWithAssignments, NewModule};
use crate::lms::integrity::{ensure_same_id, resolve_update};
use crate::lms::repository::{LmsStore, StoreError};

/// Owns module records; every write is checked against the owning course first.
pub struct ModuleService<R: LmsStore> {
    repo: Arc<R>,
    courses: Arc<CourseService<R>>,
}

impl<R: LmsStore> ModuleService<R> {
    pub fn new(repo: Arc<R>, courses: Arc<CourseService<R>>) -> Self { Self { repo, courses } }

    pub async fn list(&self) -> Result<Vec<module::Model>, ServiceError> {
        Ok(self.repo.list_modules().await?)
    }

    pub async fn get(&self, id: i32) -> Result<module::Model, ServiceError> {
        self.repo.find_module(id).await?.ok_or_else(|| ServiceError::not_found("Module"))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.repo.find_module(id).await?.is_some())
    }

    #[instrument(skip(self, input), fields(module_id = input.id, course_id = input.course_id))]
    pub async fn create(&self, input: NewModule) -> Result<ModuleWithAssignments, ServiceError> {
        input.validate()?;
        if !self.courses.exists(input.course_id).await? {
            return Err(ServiceError::not_found("Course"));
        }
        // The course can still disappear between the check and the insert.
        let created = match self.repo.insert_module_graph(input).await {
            Err(StoreError::ForeignKey(_)) => return Err(ServiceError::not_found("Course")),
            other => other?,
        };
        info!(module_id = created.module.id, assignments = created.assignments.len(), "module_created");
        Ok(created)
    }

    #[instrument(skip(self, module), fields(module_id = id, course_id = module.course_id))]
    pub async fn update(&self, id: i32, module: module::Model) -> Result<module::Model, ServiceError> {
        ensure_same_id("Module", id, module.id)?;
        if !self.courses.exists(module.course_id).await? {
            return Err(invalid_course_reference());
        }
        let outcome = match self.repo.update_module(module).await {
            Err(StoreError::ForeignKey(_)) => return Err(invalid_course_reference()),
            other => other,
        };
        let updated = resolve_update("Module", id, outcome, || self.exists(id)).await?;
        info!(module_id = id, "module_updated");
        Ok(updated)
    }

    /// Delete the module together with its assignments.
    #[instrument(skip(self), fields(module_id = id))]
    pub async fn delete(&self, id: i32) -> Result<CascadeSummary, ServiceError> {
        let summary = self
            .repo
            .delete_module_cascade(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Module"))?;
        info!(module_id = id, assignments = summary.assignments, "module_deleted");
        Ok(summary)
    }

    /// Assignments of a module. An unknown module yields an empty list.
    pub async fn list_assignments_in_module(&self, module_id: i32) -> Result<Vec<assignment::Model>, ServiceError> {
        Ok(self.repo.list_assignments_by_module(module_id).await?)
    }
}

fn invalid_course_reference() -> ServiceError {
    ServiceError::BadRequest("invalid course reference".into())
}
