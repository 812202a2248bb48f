use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
    ActiveValue::{Set, Unchanged},
};
use tracing::debug;

use models::{assignment, course, module};

use crate::lms::domain::{
    CascadeSummary, CourseWithModules, ModuleWithAssignments, NestedAssignment, NewAssignment, NewCourse, NewModule,
};
use crate::lms::repository::{AssignmentStore, CourseStore, ModuleStore, StoreError};

/// SeaORM-backed store; one instance serves all three entity types.
#[derive(Clone)]
pub struct SeaOrmLmsStore {
    pub db: DatabaseConnection,
}

impl SeaOrmLmsStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

async fn insert_assignment_row<C: ConnectionTrait>(conn: &C, input: NewAssignment) -> Result<assignment::Model, StoreError> {
    if assignment::exists(conn, input.id).await? {
        return Err(StoreError::Duplicate(format!("assignment {} already exists", input.id)));
    }
    if !module::exists(conn, input.module_id).await? {
        return Err(StoreError::ForeignKey(format!("module {} does not exist", input.module_id)));
    }
    let am = assignment::ActiveModel {
        id: Set(input.id),
        name: Set(input.name),
        grade: Set(input.grade),
        due_date: Set(input.due_date),
        module_id: Set(input.module_id),
    };
    Ok(am.insert(conn).await?)
}

async fn insert_module_tree<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    name: String,
    course_id: i32,
    assignments: Vec<NestedAssignment>,
) -> Result<ModuleWithAssignments, StoreError> {
    if module::exists(conn, id).await? {
        return Err(StoreError::Duplicate(format!("module {id} already exists")));
    }
    if !course::exists(conn, course_id).await? {
        return Err(StoreError::ForeignKey(format!("course {course_id} does not exist")));
    }
    let module = module::ActiveModel { id: Set(id), name: Set(name), course_id: Set(course_id) }
        .insert(conn)
        .await?;
    let mut inserted = Vec::with_capacity(assignments.len());
    for a in assignments {
        inserted.push(insert_assignment_row(conn, a.into_new(module.id)).await?);
    }
    Ok(ModuleWithAssignments { module, assignments: inserted })
}

/// Remove every assignment of the given modules, then the modules themselves.
async fn delete_modules_with_assignments<C: ConnectionTrait>(conn: &C, module_ids: Vec<i32>) -> Result<CascadeSummary, StoreError> {
    if module_ids.is_empty() {
        return Ok(CascadeSummary::default());
    }
    let assignments = assignment::Entity::delete_many()
        .filter(assignment::Column::ModuleId.is_in(module_ids.clone()))
        .exec(conn)
        .await?
        .rows_affected;
    let modules = module::Entity::delete_many()
        .filter(module::Column::Id.is_in(module_ids))
        .exec(conn)
        .await?
        .rows_affected;
    Ok(CascadeSummary { modules, assignments })
}

#[async_trait::async_trait]
impl CourseStore for SeaOrmLmsStore {
    async fn list_courses(&self) -> Result<Vec<course::Model>, StoreError> {
        Ok(course::Entity::find().order_by_asc(course::Column::Id).all(&self.db).await?)
    }

    async fn find_course(&self, id: i32) -> Result<Option<course::Model>, StoreError> {
        Ok(course::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn insert_course_graph(&self, input: NewCourse) -> Result<CourseWithModules, StoreError> {
        let txn = self.db.begin().await?;
        if course::exists(&txn, input.id).await? {
            return Err(StoreError::Duplicate(format!("course {} already exists", input.id)));
        }
        let course = course::ActiveModel { id: Set(input.id), name: Set(input.name) }.insert(&txn).await?;
        let mut modules = Vec::with_capacity(input.modules.len());
        for m in input.modules {
            modules.push(insert_module_tree(&txn, m.id, m.name, course.id, m.assignments).await?);
        }
        txn.commit().await?;
        Ok(CourseWithModules { course, modules })
    }

    async fn update_course(&self, course: course::Model) -> Result<course::Model, StoreError> {
        let am = course::ActiveModel { id: Unchanged(course.id), name: Set(course.name) };
        Ok(am.update(&self.db).await?)
    }

    async fn delete_course_cascade(&self, id: i32) -> Result<Option<CascadeSummary>, StoreError> {
        let txn = self.db.begin().await?;
        if !course::exists(&txn, id).await? {
            return Ok(None);
        }
        let module_ids: Vec<i32> = module::Entity::find()
            .filter(module::Column::CourseId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();
        let summary = delete_modules_with_assignments(&txn, module_ids).await?;
        course::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        debug!(course_id = id, modules = summary.modules, assignments = summary.assignments, "course cascade committed");
        Ok(Some(summary))
    }
}

#[async_trait::async_trait]
impl ModuleStore for SeaOrmLmsStore {
    async fn list_modules(&self) -> Result<Vec<module::Model>, StoreError> {
        Ok(module::Entity::find().order_by_asc(module::Column::Id).all(&self.db).await?)
    }

    async fn find_module(&self, id: i32) -> Result<Option<module::Model>, StoreError> {
        Ok(module::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn list_modules_by_course(&self, course_id: i32) -> Result<Vec<module::Model>, StoreError> {
        let rows = module::Entity::find()
            .filter(module::Column::CourseId.eq(course_id))
            .order_by_asc(module::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insert_module_graph(&self, input: NewModule) -> Result<ModuleWithAssignments, StoreError> {
        let txn = self.db.begin().await?;
        let created = insert_module_tree(&txn, input.id, input.name, input.course_id, input.assignments).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn update_module(&self, module: module::Model) -> Result<module::Model, StoreError> {
        let am = module::ActiveModel {
            id: Unchanged(module.id),
            name: Set(module.name),
            course_id: Set(module.course_id),
        };
        Ok(am.update(&self.db).await?)
    }

    async fn delete_module_cascade(&self, id: i32) -> Result<Option<CascadeSummary>, StoreError> {
        let txn = self.db.begin().await?;
        if !module::exists(&txn, id).await? {
            return Ok(None);
        }
        let summary = delete_modules_with_assignments(&txn, vec![id]).await?;
        txn.commit().await?;
        debug!(module_id = id, assignments = summary.assignments, "module cascade committed");
        Ok(Some(summary))
    }
}

#[async_trait::async_trait]
impl AssignmentStore for SeaOrmLmsStore {
    async fn list_assignments(&self) -> Result<Vec<assignment::Model>, StoreError> {
        Ok(assignment::Entity::find().order_by_asc(assignment::Column::Id).all(&self.db).await?)
    }

    async fn find_assignment(&self, id: i32) -> Result<Option<assignment::Model>, StoreError> {
        Ok(assignment::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn list_assignments_by_module(&self, module_id: i32) -> Result<Vec<assignment::Model>, StoreError> {
        let rows = assignment::Entity::find()
            .filter(assignment::Column::ModuleId.eq(module_id))
            .order_by_asc(assignment::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insert_assignment(&self, input: NewAssignment) -> Result<assignment::Model, StoreError> {
        let txn = self.db.begin().await?;
        let created = insert_assignment_row(&txn, input).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn update_assignment(&self, assignment: assignment::Model) -> Result<assignment::Model, StoreError> {
        let am = assignment::ActiveModel {
            id: Unchanged(assignment.id),
            name: Set(assignment.name),
            grade: Set(assignment.grade),
            due_date: Set(assignment.due_date),
            module_id: Set(assignment.module_id),
        };
        Ok(am.update(&self.db).await?)
    }

    async fn delete_assignment(&self, id: i32) -> Result<bool, StoreError> {
        let res = assignment::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
