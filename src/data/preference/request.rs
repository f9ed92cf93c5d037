use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{Check, Validate, Violations};

pub const RANK_MIN: i32 = 1;
pub const RANK_MAX: i32 = 10;

/// A student's ranked interest in one project.
///
/// `rank` is the position among the student's choices, 1 being the first
/// choice. Uniqueness of the rank and the number of choices per student are
/// checked by [`rules`](super::rules), not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceCreateRequest {
    pub student_id: Option<i64>,
    pub project_id: Option<i64>,
    pub rank: Option<i32>,
    pub motivation: Option<String>,
    pub comment: Option<String>,
}

impl PreferenceCreateRequest {
    pub fn new(student_id: i64, project_id: i64, rank: i32) -> PreferenceCreateRequest {
        PreferenceCreateRequest {
            student_id: Some(student_id),
            project_id: Some(project_id),
            rank: Some(rank),
            ..Default::default()
        }
    }
}

impl Validate for PreferenceCreateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let below = self.rank.map_or(false, |rank| rank < RANK_MIN);

        Check::new()
            .required("studentId", self.student_id.as_ref())
            .says("L'ID de l'étudiant est obligatoire")
            .required("projectId", self.project_id.as_ref())
            .says("Le projectId est obligatoire")
            .required("rank", self.rank.as_ref())
            .says("Le rank est obligatoire")
            .range(
                "rank",
                self.rank.map(i64::from),
                RANK_MIN.into(),
                RANK_MAX.into(),
            )
            .says(if below {
                "Le rank doit être >= 1"
            } else {
                "Le rank doit être <= 10"
            })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    #[test]
    fn rank_bounds() {
        assert!(PreferenceCreateRequest::new(1, 2, 1).validate().is_ok());
        assert!(PreferenceCreateRequest::new(1, 2, 10).validate().is_ok());

        for rank in [0, 11] {
            assert_eq!(
                PreferenceCreateRequest::new(1, 2, rank).validate(),
                Err(Violation::RangeViolation {
                    field: "rank".to_string(),
                    min: 1,
                    max: 10
                }
                .into())
            );
        }
    }

    #[test]
    fn identities_are_required() {
        let request = PreferenceCreateRequest {
            rank: Some(3),
            motivation: Some("J'aime le web".to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.validate().unwrap_err().into_inner(),
            vec![
                Violation::required("studentId"),
                Violation::required("projectId")
            ]
        );
    }

    #[test]
    fn free_text_is_unconstrained() {
        let request = PreferenceCreateRequest {
            motivation: Some("m".repeat(5000)),
            comment: Some(String::new()),
            ..PreferenceCreateRequest::new(4, 9, 2)
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn violations_are_described_in_french() {
        let violations = PreferenceCreateRequest {
            rank: Some(12),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            violations.to_string(),
            "L'ID de l'étudiant est obligatoire; Le projectId est obligatoire; Le rank doit être <= 10"
        );
    }
}
