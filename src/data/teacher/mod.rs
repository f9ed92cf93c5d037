use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::user::UserResponse;
use crate::role::Role;
use crate::validation::{Validate, Violation, Violations};

pub mod request;

pub use request::{TeacherCreateRequest, TeacherUpdateRequest};

/// Teacher profile joined with the identity of its account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id: i64,
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub academic_rank: Option<String>,
    pub specialty: Option<String>,
    pub website_url: Option<String>,
    /// Titles of the projects the teacher supervises.
    #[serde(rename = "project")]
    #[schema(value_type = Vec<String>)]
    pub projects: BTreeSet<String>,
}

impl TeacherResponse {
    /// Builds the profile of `user`, who must hold the teacher role. The
    /// profile starts without projects.
    pub fn profile(
        user: &UserResponse,
        request: TeacherCreateRequest,
    ) -> Result<TeacherResponse, Violations> {
        let mut violations = request.validate().err().unwrap_or_default();
        if !user.has_role(Role::Enseignant) {
            violations.push(Violation::Inconsistent {
                field: "userId".to_string(),
                detail: format!("user {} is not a teacher", user.id),
            });
        }
        if let Err(violations) = violations.into_result() {
            tracing::debug!(user = user.id, %violations, "teacher profile rejected");
            return Err(violations);
        }

        tracing::info!(user = user.id, "teacher profile created");
        Ok(TeacherResponse {
            id: user.id,
            user_id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            department: request.department,
            academic_rank: request.academic_rank,
            specialty: request.specialty,
            website_url: request.website_url,
            projects: BTreeSet::new(),
        })
    }

    /// Fields left `None` keep their current value. Nothing changes if the
    /// request is invalid.
    pub fn apply_update(&mut self, request: TeacherUpdateRequest) -> Result<(), Violations> {
        if let Err(violations) = request.validate() {
            tracing::debug!(id = self.id, %violations, "teacher update rejected");
            return Err(violations);
        }

        if request.department.is_some() {
            self.department = request.department;
        }
        if request.academic_rank.is_some() {
            self.academic_rank = request.academic_rank;
        }
        if request.specialty.is_some() {
            self.specialty = request.specialty;
        }
        if request.website_url.is_some() {
            self.website_url = request.website_url;
        }

        Ok(())
    }
}
