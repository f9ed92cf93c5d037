use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::{Named, WorkType};
use crate::validation::{Check, Validate, Violations};

pub const STUDY_YEAR_MIN: i32 = 1;
pub const STUDY_YEAR_MAX: i32 = 8;
pub const PROGRAM_MAX_CHARS: usize = 100;
pub const TRACK_MAX_CHARS: usize = 100;
pub const URL_MAX_CHARS: usize = 255;

/// Completes the academic profile of an existing student account.
///
/// Skills and interests are given by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentCreateRequest {
    /// 1 to 8.
    pub study_year: Option<i32>,
    pub program: Option<String>,
    pub track: Option<String>,
    #[schema(value_type = Option<WorkType>)]
    pub preferred_work_type: Option<Named<WorkType>>,
    #[serde(rename = "skill", default)]
    #[schema(value_type = Vec<String>)]
    pub skills: BTreeSet<String>,
    #[serde(rename = "interestKeyword", default)]
    #[schema(value_type = Vec<String>)]
    pub interest_keywords: BTreeSet<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub linkedin_url: Option<String>,
}

impl Validate for StudentCreateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let mut check = Check::new();
        check_study_year(&mut check, self.study_year)
            .max_chars("program", self.program.as_deref(), PROGRAM_MAX_CHARS)
            .says("La formation ne doit pas dépasser 100 caractères")
            .max_chars("track", self.track.as_deref(), TRACK_MAX_CHARS)
            .says("Le parcours ne doit pas dépasser 100 caractères")
            .known("preferredWorkType", self.preferred_work_type.as_ref());
        check_urls(
            &mut check,
            self.github_url.as_deref(),
            self.portfolio_url.as_deref(),
            self.linkedin_url.as_deref(),
        )
        .finish()
    }
}

/// Profile change made by the student. Skills and interests are given by
/// id; `Some` of an empty set clears them, `None` keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdateRequest {
    pub study_year: Option<i32>,
    #[schema(value_type = Option<WorkType>)]
    pub preferred_work_type: Option<Named<WorkType>>,
    #[schema(value_type = Option<Vec<i64>>)]
    pub skill_ids: Option<BTreeSet<i64>>,
    #[schema(value_type = Option<Vec<i64>>)]
    pub interest_keyword_ids: Option<BTreeSet<i64>>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub linkedin_url: Option<String>,
}

impl Validate for StudentUpdateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let mut check = Check::new();
        check_study_year(&mut check, self.study_year)
            .known("preferredWorkType", self.preferred_work_type.as_ref());
        check_urls(
            &mut check,
            self.github_url.as_deref(),
            self.portfolio_url.as_deref(),
            self.linkedin_url.as_deref(),
        )
        .finish()
    }
}

fn check_study_year(check: &mut Check, study_year: Option<i32>) -> &mut Check {
    let below = study_year.map_or(false, |year| year < STUDY_YEAR_MIN);
    check
        .range(
            "studyYear",
            study_year.map(i64::from),
            STUDY_YEAR_MIN.into(),
            STUDY_YEAR_MAX.into(),
        )
        .says(if below {
            "L'année d'étude doit être au minimum 1"
        } else {
            "L'année d'étude doit être au maximum 8"
        })
}

fn check_urls<'c>(
    check: &'c mut Check,
    github: Option<&str>,
    portfolio: Option<&str>,
    linkedin: Option<&str>,
) -> &'c mut Check {
    check
        .max_chars("githubUrl", github, URL_MAX_CHARS)
        .says("L'URL GitHub ne doit pas dépasser 255 caractères")
        .max_chars("portfolioUrl", portfolio, URL_MAX_CHARS)
        .says("L'URL du portfolio ne doit pas dépasser 255 caractères")
        .max_chars("linkedinUrl", linkedin, URL_MAX_CHARS)
        .says("L'URL LinkedIn ne doit pas dépasser 255 caractères")
}
