use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::keyword::KeywordResponse;
use crate::data::skill::SkillResponse;
use crate::data::user::UserResponse;
use crate::role::{Named, Role, WorkType};
use crate::validation::{Check, Validate, Violation, Violations};

pub mod request;

pub use request::{StudentCreateRequest, StudentUpdateRequest};

/// Student profile joined with the identity of its account. The profile
/// shares the account id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub student_number: Option<String>,
    pub study_year: Option<i32>,
    pub preferred_work_type: Option<WorkType>,
    /// Skill names.
    #[serde(rename = "skill")]
    #[schema(value_type = Vec<String>)]
    pub skills: BTreeSet<String>,
    /// Keyword labels.
    #[serde(rename = "interestKeyword")]
    #[schema(value_type = Vec<String>)]
    pub interest_keywords: BTreeSet<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub assigned_project_id: Option<i64>,
}

impl StudentResponse {
    /// Builds the profile of `user` from a creation request. The user must
    /// hold the student role.
    pub fn profile(
        user: &UserResponse,
        request: StudentCreateRequest,
    ) -> Result<StudentResponse, Violations> {
        let mut violations = request.validate().err().unwrap_or_default();
        if !user.has_role(Role::Etudiant) {
            violations.push(Violation::Inconsistent {
                field: "userId".to_string(),
                detail: format!("user {} is not a student", user.id),
            });
        }
        if let Err(violations) = violations.into_result() {
            tracing::debug!(user = user.id, %violations, "student profile rejected");
            return Err(violations);
        }

        let StudentCreateRequest {
            study_year,
            preferred_work_type,
            skills,
            interest_keywords,
            github_url,
            linkedin_url,
            ..
        } = request;

        tracing::info!(user = user.id, skills = skills.len(), "student profile created");
        Ok(StudentResponse {
            id: user.id,
            user_id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            student_number: user.student_number.clone(),
            study_year,
            preferred_work_type: preferred_work_type.as_ref().and_then(Named::known),
            skills,
            interest_keywords,
            github_url,
            linkedin_url,
            assigned_project_id: None,
        })
    }

    /// Applies a profile change. Skill and keyword ids are looked up in the
    /// given catalogs; an unknown id rejects the whole change.
    pub fn apply_update(
        &mut self,
        request: StudentUpdateRequest,
        skills: &[SkillResponse],
        keywords: &[KeywordResponse],
    ) -> Result<(), Violations> {
        let mut check = Check::new();
        let skill_names = request.skill_ids.as_ref().map(|ids| {
            resolve(&mut check, "skillIds", ids, |id| {
                skills.iter().find(|s| s.id == id).map(|s| s.name.clone())
            })
        });
        let keyword_labels = request.interest_keyword_ids.as_ref().map(|ids| {
            resolve(&mut check, "interestKeywordIds", ids, |id| {
                keywords.iter().find(|k| k.id == id).map(|k| k.label.clone())
            })
        });

        let mut violations = request.validate().err().unwrap_or_default();
        if let Err(unknown) = check.finish() {
            violations.append(unknown);
        }
        if let Err(violations) = violations.into_result() {
            tracing::debug!(id = self.id, %violations, "student update rejected");
            return Err(violations);
        }

        if request.study_year.is_some() {
            self.study_year = request.study_year;
        }
        if let Some(work_type) = request.preferred_work_type.as_ref().and_then(Named::known) {
            self.preferred_work_type = Some(work_type);
        }
        if let Some(names) = skill_names {
            self.skills = names;
        }
        if let Some(labels) = keyword_labels {
            self.interest_keywords = labels;
        }
        if request.github_url.is_some() {
            self.github_url = request.github_url;
        }
        if request.linkedin_url.is_some() {
            self.linkedin_url = request.linkedin_url;
        }

        Ok(())
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_project_id.is_some()
    }
}

fn resolve(
    check: &mut Check,
    field: &str,
    ids: &BTreeSet<i64>,
    lookup: impl Fn(i64) -> Option<String>,
) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for &id in ids {
        match lookup(id) {
            Some(name) => {
                names.insert(name);
            }
            None => {
                check.violation(Violation::Inconsistent {
                    field: field.to_string(),
                    detail: format!("no entry with id {}", id),
                });
            }
        }
    }
    names
}
