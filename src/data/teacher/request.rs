use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{Check, Validate, Violations};

pub const DEPARTMENT_MAX_CHARS: usize = 120;
pub const ACADEMIC_RANK_MAX_CHARS: usize = 120;
pub const SPECIALTY_MAX_CHARS: usize = 200;
pub const WEBSITE_URL_MAX_CHARS: usize = 255;

/// Teacher-specific part of a profile. Identity is changed through
/// [`UserUpdateRequest`](crate::data::user::UserUpdateRequest).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherCreateRequest {
    pub department: Option<String>,
    /// Maître de conférences, Professeur...
    pub academic_rank: Option<String>,
    pub specialty: Option<String>,
    pub website_url: Option<String>,
}

impl Validate for TeacherCreateRequest {
    fn validate(&self) -> Result<(), Violations> {
        check_fields(
            &mut Check::new(),
            self.department.as_deref(),
            self.academic_rank.as_deref(),
            self.specialty.as_deref(),
            self.website_url.as_deref(),
        )
        .finish()
    }
}

/// Same fields as creation; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUpdateRequest {
    pub department: Option<String>,
    pub academic_rank: Option<String>,
    pub specialty: Option<String>,
    pub website_url: Option<String>,
}

impl Validate for TeacherUpdateRequest {
    fn validate(&self) -> Result<(), Violations> {
        check_fields(
            &mut Check::new(),
            self.department.as_deref(),
            self.academic_rank.as_deref(),
            self.specialty.as_deref(),
            self.website_url.as_deref(),
        )
        .finish()
    }
}

fn check_fields<'c>(
    check: &'c mut Check,
    department: Option<&str>,
    academic_rank: Option<&str>,
    specialty: Option<&str>,
    website_url: Option<&str>,
) -> &'c mut Check {
    check
        .max_chars("department", department, DEPARTMENT_MAX_CHARS)
        .says("Le département ne doit pas dépasser 120 caractères")
        .max_chars("academicRank", academic_rank, ACADEMIC_RANK_MAX_CHARS)
        .says("Le grade ne doit pas dépasser 120 caractères")
        .max_chars("specialty", specialty, SPECIALTY_MAX_CHARS)
        .says("La spécialité ne doit pas dépasser 200 caractères")
        .max_chars("websiteUrl", website_url, WEBSITE_URL_MAX_CHARS)
        .says("L'URL du site web ne doit pas dépasser 255 caractères")
}
