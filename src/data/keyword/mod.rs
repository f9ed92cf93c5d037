use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::data::DEFAULT_ACTIVE;
use crate::validation::{Validate, Violations};

pub mod request;

pub use request::{KeywordCreateRequest, KeywordUpdateRequest};

/// Keyword as sent back to clients. Keywords tag projects and student
/// interests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResponse {
    pub id: i64,
    pub label: String,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub active: bool,
}

impl KeywordResponse {
    /// Builds the view of a keyword stored under `id` from a creation request.
    pub fn created(id: i64, request: KeywordCreateRequest) -> Result<KeywordResponse, Violations> {
        if let Err(violations) = request.validate() {
            tracing::debug!(%violations, "keyword creation rejected");
            return Err(violations);
        }

        let KeywordCreateRequest {
            label,
            description,
            domain,
        } = request;

        Ok(KeywordResponse {
            id,
            label: label.unwrap_or_default(),
            description,
            domain,
            active: DEFAULT_ACTIVE,
        })
    }

    /// Applies an update. Fields left `None` keep their current value.
    /// Nothing changes if the request is invalid.
    pub fn apply_update(&mut self, request: KeywordUpdateRequest) -> Result<(), Violations> {
        if let Err(violations) = request.validate() {
            tracing::debug!(id = self.id, %violations, "keyword update rejected");
            return Err(violations);
        }

        if let Some(label) = request.label {
            self.label = label;
        }
        if request.description.is_some() {
            self.description = request.description;
        }
        if request.domain.is_some() {
            self.domain = request.domain;
        }
        if let Some(active) = request.active {
            self.active = active;
        }

        Ok(())
    }

    /// Soft-disables the keyword. Returns `false` if it was already inactive.
    pub fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
