use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::data::keyword::{KeywordCreateRequest, KeywordResponse, KeywordUpdateRequest};
use crate::data::page::SortDirection;
use crate::data::preference::{PreferenceCreateRequest, PreferenceResponse};
use crate::data::project::{ProjectCreateRequest, ProjectResponse, ProjectUpdateRequest};
use crate::data::skill::{SkillCreateRequest, SkillResponse};
use crate::data::student::{StudentCreateRequest, StudentResponse, StudentUpdateRequest};
use crate::data::teacher::{TeacherCreateRequest, TeacherResponse, TeacherUpdateRequest};
use crate::data::user::{UserResponse, UserUpdateRequest};
use crate::error::BackendError;
use crate::resp::problem::Problem;
use crate::role::{PreferenceStatus, Role, WorkType};

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        Role,
        WorkType,
        PreferenceStatus,
        KeywordCreateRequest,
        KeywordUpdateRequest,
        KeywordResponse,
        SkillCreateRequest,
        SkillResponse,
        PreferenceCreateRequest,
        PreferenceResponse,
        ProjectCreateRequest,
        ProjectUpdateRequest,
        ProjectResponse,
        UserUpdateRequest,
        UserResponse,
        StudentCreateRequest,
        StudentUpdateRequest,
        StudentResponse,
        TeacherCreateRequest,
        TeacherUpdateRequest,
        TeacherResponse,
        SortDirection,
        Problem
    )),
    modifiers(&JwtAuth)
)]
pub struct ApiDoc;

/// Bearer token scheme every endpoint is secured with.
#[derive(Clone, Copy)]
pub struct JwtAuth;

impl From<JwtAuth> for SecurityScheme {
    fn from(_: JwtAuth) -> Self {
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .build(),
        )
    }
}

impl utoipa::Modify for JwtAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(c) = openapi.components.as_mut() {
            c.add_security_scheme("jwt", *self)
        }
    }
}

pub fn to_json() -> Result<String, BackendError> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}
