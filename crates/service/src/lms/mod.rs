//! Course / module / assignment management.
//!
//! Three peer services, each validating upward before delegating to the store:
//! assignments check their module, modules check their course.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod integrity;
pub mod course_service;
pub mod module_service;
pub mod assignment_service;

use std::sync::Arc;

pub use assignment_service::AssignmentService;
pub use course_service::CourseService;
pub use module_service::ModuleService;
pub use repository::LmsStore;

/// The three services wired over one store.
pub struct LmsServices<R: LmsStore> {
    pub courses: Arc<CourseService<R>>,
    pub modules: Arc<ModuleService<R>>,
    pub assignments: Arc<AssignmentService<R>>,
}

impl<R: LmsStore> LmsServices<R> {
    pub fn new(repo: Arc<R>) -> Self {
        let courses = Arc::new(CourseService::new(Arc::clone(&repo)));
        let modules = Arc::new(ModuleService::new(Arc::clone(&repo), Arc::clone(&courses)));
        let assignments = Arc::new(AssignmentService::new(repo, Arc::clone(&modules)));
        Self { courses, modules, assignments }
    }
}

impl<R: LmsStore> Clone for LmsServices<R> {
    fn clone(&self) -> Self {
        Self {
            courses: Arc::clone(&self.courses),
            modules: Arc::clone(&self.modules),
            assignments: Arc::clone(&self.assignments),
        }
    }
}
