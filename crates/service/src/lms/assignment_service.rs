use std::sync::Arc;

use tracing::{info, instrument};

use models::assignment;

use crate::errors::ServiceError;
use crate::lms::domain::NewAssignment;
use crate::lms::integrity::{ensure_same_id, resolve_update};
use crate::lms::module_service::ModuleService;
use crate::lms::repository::{LmsStore, StoreError};

/// Owns assignment records; writes are checked against the owning module.
pub struct AssignmentService<R: LmsStore> {
    repo: Arc<R>,
    modules: Arc<ModuleService<R>>,
}

impl<R: LmsStore> AssignmentService<R> {
    pub fn new(repo: Arc<R>, modules: Arc<ModuleService<R>>) -> Self { Self { repo, modules } }

    pub async fn list(&self) -> Result<Vec<assignment::Model>, ServiceError> {
        Ok(self.repo.list_assignments().await?)
    }

    pub async fn get(&self, id: i32) -> Result<assignment::Model, ServiceError> {
        self.repo.find_assignment(id).await?.ok_or_else(|| ServiceError::not_found("Assignment"))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.repo.find_assignment(id).await?.is_some())
    }

    #[instrument(skip(self, input), fields(assignment_id = input.id, module_id = input.module_id))]
    pub async fn create(&self, input: NewAssignment) -> Result<assignment::Model, ServiceError> {
        input.validate()?;
        if !self.modules.exists(input.module_id).await? {
            return Err(ServiceError::not_found("Module"));
        }
        let created = match self.repo.insert_assignment(input).await {
            Err(StoreError::ForeignKey(_)) => return Err(ServiceError::not_found("Module")),
            other => other?,
        };
        info!(assignment_id = created.id, "assignment_created");
        Ok(created)
    }

    #[instrument(skip(self, assignment), fields(assignment_id = id, module_id = assignment.module_id))]
    pub async fn update(&self, id: i32, assignment: assignment::Model) -> Result<assignment::Model, ServiceError> {
        ensure_same_id("Assignment", id, assignment.id)?;
        if !self.modules.exists(assignment.module_id).await? {
            return Err(invalid_module_reference());
        }
        let outcome = match self.repo.update_assignment(assignment).await {
            Err(StoreError::ForeignKey(_)) => return Err(invalid_module_reference()),
            other => other,
        };
        let updated = resolve_update("Assignment", id, outcome, || self.exists(id)).await?;
        info!(assignment_id = id, "assignment_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(assignment_id = id))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete_assignment(id).await? {
            return Err(ServiceError::not_found("Assignment"));
        }
        info!(assignment_id = id, "assignment_deleted");
        Ok(())
    }
}

fn invalid_module_reference() -> ServiceError {
    ServiceError::BadRequest("invalid module reference".into())
}
