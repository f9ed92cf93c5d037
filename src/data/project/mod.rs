use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::{Named, WorkType};
use crate::validation::{Validate, Violations};

pub mod request;

pub use request::{ProjectCreateRequest, ProjectUpdateRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub work_type: WorkType,
    pub remote_possible: bool,
    pub active: bool,

    pub min_students: i32,
    pub max_students: i32,
    /// No seat left.
    #[serde(rename = "complet")]
    pub full: bool,

    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,

    /// Names of the required skills.
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Labels of the keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ProjectResponse {
    /// Applies the scalar fields of an update. Skill and keyword ids have to be
    /// resolved to names by the caller.
    ///
    /// Capacity is checked against the merged values, so lowering only
    /// `maxStudents` under the current minimum is rejected.
    pub fn apply_update(&mut self, request: &ProjectUpdateRequest) -> Result<(), Violations> {
        request.validate()?;

        let min = request.min_students.unwrap_or(self.min_students);
        let max = request.max_students.unwrap_or(self.max_students);
        if let Some(violation) = request::capacity_violation(Some(min), Some(max)) {
            tracing::debug!(id = self.id, min, max, "project capacity rejected");
            return Err(violation.into());
        }

        if let Some(title) = &request.title {
            self.title = title.clone();
        }
        if let Some(description) = &request.description {
            self.description = description.clone();
        }
        if let Some(work_type) = request.work_type.as_ref().and_then(Named::known) {
            self.work_type = work_type;
        }
        if let Some(remote_possible) = request.remote_possible {
            self.remote_possible = remote_possible;
        }
        if let Some(active) = request.active {
            self.active = active;
        }
        self.min_students = min;
        self.max_students = max;

        Ok(())
    }

    /// Whether a student may still pick this project.
    pub fn is_open(&self) -> bool {
        self.active && !self.full
    }
}
