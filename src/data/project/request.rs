use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::{Named, WorkType};
use crate::validation::{Check, Validate, Violation, Violations};

pub const TITLE_MAX_CHARS: usize = 150;
pub const DESCRIPTION_MAX_CHARS: usize = 3000;
pub const MIN_CAPACITY: i64 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<WorkType>)]
    pub work_type: Option<Named<WorkType>>,
    pub remote_possible: Option<bool>,
    pub min_students: Option<i32>,
    pub max_students: Option<i32>,
    #[serde(default)]
    pub required_skill_ids: Vec<i64>,
    #[serde(default)]
    pub keyword_ids: Vec<i64>,
}

impl Validate for ProjectCreateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let title = self.title.as_deref();
        let description = self.description.as_deref();

        let mut check = Check::new();
        check
            .not_blank("title", title)
            .max_chars("title", title, TITLE_MAX_CHARS)
            .not_blank("description", description)
            .max_chars("description", description, DESCRIPTION_MAX_CHARS)
            .required("workType", self.work_type.as_ref())
            .known("workType", self.work_type.as_ref())
            .at_least("minStudents", self.min_students.map(i64::from), MIN_CAPACITY)
            .at_least("maxStudents", self.max_students.map(i64::from), MIN_CAPACITY);

        if let Some(violation) = capacity_violation(self.min_students, self.max_students) {
            check.violation(violation);
        }

        check.finish()
    }
}

/// Partial project change. `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<WorkType>)]
    pub work_type: Option<Named<WorkType>>,
    pub remote_possible: Option<bool>,
    pub min_students: Option<i32>,
    pub max_students: Option<i32>,
    pub active: Option<bool>,
    /// Replaces the required skills; an empty list clears them.
    pub required_skill_ids: Option<Vec<i64>>,
    pub keyword_ids: Option<Vec<i64>>,
}

impl Validate for ProjectUpdateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let mut check = Check::new();
        check
            .max_chars("title", self.title.as_deref(), TITLE_MAX_CHARS)
            .max_chars(
                "description",
                self.description.as_deref(),
                DESCRIPTION_MAX_CHARS,
            )
            .known("workType", self.work_type.as_ref());

        if let Some(violation) = capacity_violation(self.min_students, self.max_students) {
            check.violation(violation);
        }

        check.finish()
    }
}

pub(crate) fn capacity_violation(min: Option<i32>, max: Option<i32>) -> Option<Violation> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Some(Violation::Inconsistent {
            field: "minStudents".to_string(),
            detail: format!("must not be greater than maxStudents ({} > {})", min, max),
        }),
        _ => None,
    }
}
