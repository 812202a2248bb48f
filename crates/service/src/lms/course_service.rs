use std::sync::Arc;

use tracing::{info, instrument};

use models::{course, module};

use crate::errors::ServiceError;
use crate::lms::domain::{CascadeSummary, CourseWithModules, NewCourse};
use crate::lms::integrity::{ensure_same_id, resolve_update};
use crate::lms::repository::LmsStore;

/// Owns course records. Courses have no parent, so create has no existence precondition.
pub struct CourseService<R: LmsStore> {
    repo: Arc<R>,
}

impl<R: LmsStore> CourseService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<course::Model>, ServiceError> {
        Ok(self.repo.list_courses().await?)
    }

    pub async fn get(&self, id: i32) -> Result<course::Model, ServiceError> {
        self.repo.find_course(id).await?.ok_or_else(|| ServiceError::not_found("Course"))
    }

    /// Existence check other services validate their foreign keys against.
    pub async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.repo.find_course(id).await?.is_some())
    }

    /// Insert the course and any embedded modules in one unit of work.
    #[instrument(skip(self, input), fields(course_id = input.id, modules = input.modules.len()))]
    pub async fn create(&self, input: NewCourse) -> Result<CourseWithModules, ServiceError> {
        input.validate()?;
        let created = self.repo.insert_course_graph(input).await?;
        info!(course_id = created.course.id, modules = created.modules.len(), "course_created");
        Ok(created)
    }

    #[instrument(skip(self, course), fields(course_id = id))]
    pub async fn update(&self, id: i32, course: course::Model) -> Result<course::Model, ServiceError> {
        ensure_same_id("Course", id, course.id)?;
        course::validate_name(&course.name)?;
        let outcome = self.repo.update_course(course).await;
        let updated = resolve_update("Course", id, outcome, || self.exists(id)).await?;
        info!(course_id = id, "course_updated");
        Ok(updated)
    }

    /// Delete the course together with its modules and their assignments.
    #[instrument(skip(self), fields(course_id = id))]
    pub async fn delete(&self, id: i32) -> Result<CascadeSummary, ServiceError> {
        let summary = self
            .repo
            .delete_course_cascade(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Course"))?;
        info!(course_id = id, modules = summary.modules, assignments = summary.assignments, "course_deleted");
        Ok(summary)
    }

    /// Modules of a course. An unknown course yields an empty list.
    pub async fn list_modules(&self, course_id: i32) -> Result<Vec<module::Model>, ServiceError> {
        Ok(self.repo.list_modules_by_course(course_id).await?)
    }
}
