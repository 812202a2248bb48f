use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use models::{assignment, course, errors::ModelError, module};

/// Course create input; embedded modules are inserted with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub modules: Vec<NestedModule>,
}

/// Module embedded in a course create; takes the course id as its foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedModule {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub assignments: Vec<NestedAssignment>,
}

/// Module create input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModule {
    pub id: i32,
    pub name: String,
    pub course_id: i32,
    #[serde(default)]
    pub assignments: Vec<NestedAssignment>,
}

/// Assignment embedded in a module create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedAssignment {
    pub id: i32,
    pub name: String,
    pub grade: i32,
    pub due_date: NaiveDateTime,
}

/// Assignment create input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub id: i32,
    pub name: String,
    pub grade: i32,
    pub due_date: NaiveDateTime,
    pub module_id: i32,
}

/// Created course together with the children inserted alongside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseWithModules {
    #[serde(flatten)]
    pub course: course::Model,
    pub modules: Vec<ModuleWithAssignments>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleWithAssignments {
    #[serde(flatten)]
    pub module: module::Model,
    pub assignments: Vec<assignment::Model>,
}

/// Rows removed together with a deleted parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeSummary {
    pub modules: u64,
    pub assignments: u64,
}

impl NewCourse {
    pub fn validate(&self) -> Result<(), ModelError> {
        course::validate(self.id, &self.name)?;
        self.modules.iter().try_for_each(NestedModule::validate)
    }
}

impl NestedModule {
    pub fn validate(&self) -> Result<(), ModelError> {
        module::validate(self.id)?;
        self.assignments.iter().try_for_each(NestedAssignment::validate)
    }

    pub fn into_new(self, course_id: i32) -> NewModule {
        NewModule { id: self.id, name: self.name, course_id, assignments: self.assignments }
    }
}

impl NewModule {
    pub fn validate(&self) -> Result<(), ModelError> {
        module::validate(self.id)?;
        self.assignments.iter().try_for_each(NestedAssignment::validate)
    }
}

impl NestedAssignment {
    pub fn validate(&self) -> Result<(), ModelError> {
        assignment::validate(self.id)
    }

    pub fn into_new(self, module_id: i32) -> NewAssignment {
        NewAssignment { id: self.id, name: self.name, grade: self.grade, due_date: self.due_date, module_id }
    }
}

impl NewAssignment {
    pub fn validate(&self) -> Result<(), ModelError> {
        assignment::validate(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_graph_deserializes_with_defaults() {
        let input: NewCourse = serde_json::from_str(
            r#"{"id":1,"name":"C1","modules":[{"id":1,"name":"M1"},{"id":2,"name":"M2","assignments":[
                {"id":5,"name":"A5","grade":90,"dueDate":"2024-05-01T23:59:00"}]}]}"#,
        )
        .unwrap();
        assert_eq!(input.modules.len(), 2);
        assert!(input.modules[0].assignments.is_empty());
        assert_eq!(input.modules[1].assignments[0].grade, 90);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validation_walks_the_graph() {
        let mut input = NewCourse { id: 1, name: "C1".into(), modules: vec![] };
        input.modules.push(NestedModule { id: 0, name: "bad".into(), assignments: vec![] });
        assert!(input.validate().is_err());
        input.modules[0].id = 3;
        assert!(input.validate().is_ok());
        input.name = " ".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn created_graph_serializes_flat() {
        let created = CourseWithModules {
            course: course::Model { id: 1, name: "C1".into() },
            modules: vec![ModuleWithAssignments {
                module: module::Model { id: 2, name: "M2".into(), course_id: 1 },
                assignments: vec![],
            }],
        };
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["modules"][0]["courseId"], 1);
        assert_eq!(json["modules"][0]["assignments"], serde_json::json!([]));
    }
}
