use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Error body returned by every failing endpoint.
#[derive(ToSchema)]
pub struct ProblemDoc { pub status: u16, pub title: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct CourseDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ModuleDoc { pub id: i32, pub name: String, pub courseId: i32 }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct AssignmentDoc {
    pub id: i32,
    pub name: String,
    pub grade: i32,
    #[schema(example = "2024-05-01T23:59:00")]
    pub dueDate: String,
    pub moduleId: i32,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct NestedAssignmentDoc {
    pub id: i32,
    pub name: String,
    pub grade: i32,
    #[schema(example = "2024-05-01T23:59:00")]
    pub dueDate: String,
}

#[derive(ToSchema)]
pub struct NestedModuleDoc {
    pub id: i32,
    pub name: String,
    pub assignments: Vec<NestedAssignmentDoc>,
}

#[derive(ToSchema)]
pub struct NewCourseDoc {
    pub id: i32,
    pub name: String,
    pub modules: Vec<NestedModuleDoc>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct NewModuleDoc {
    pub id: i32,
    pub name: String,
    pub courseId: i32,
    pub assignments: Vec<NestedAssignmentDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::courses::list,
        crate::routes::courses::get,
        crate::routes::courses::create,
        crate::routes::courses::update,
        crate::routes::courses::delete,
        crate::routes::courses::list_modules,
        crate::routes::modules::list,
        crate::routes::modules::get,
        crate::routes::modules::create,
        crate::routes::modules::update,
        crate::routes::modules::delete,
        crate::routes::modules::list_assignments,
        crate::routes::assignments::list,
        crate::routes::assignments::get,
        crate::routes::assignments::create,
        crate::routes::assignments::update,
        crate::routes::assignments::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProblemDoc,
            CourseDoc,
            ModuleDoc,
            AssignmentDoc,
            NestedAssignmentDoc,
            NestedModuleDoc,
            NewCourseDoc,
            NewModuleDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "courses"),
        (name = "modules"),
        (name = "assignments")
    )
)]
pub struct ApiDoc;
