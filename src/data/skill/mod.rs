use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::DEFAULT_ACTIVE;
use crate::validation::{Validate, Violations};

pub mod request;

pub use request::SkillCreateRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<i32>,
    pub active: bool,
}

impl SkillResponse {
    pub fn created(id: i64, request: SkillCreateRequest) -> Result<SkillResponse, Violations> {
        if let Err(violations) = request.validate() {
            tracing::debug!(%violations, "skill creation rejected");
            return Err(violations);
        }

        Ok(SkillResponse {
            id,
            name: request.name.unwrap_or_default(),
            description: request.description,
            category: request.category,
            level: request.level,
            active: DEFAULT_ACTIVE,
        })
    }
}
