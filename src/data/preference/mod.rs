use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::PreferenceStatus;
use crate::validation::{Validate, Violations};

pub mod request;
pub mod rules;

pub use request::PreferenceCreateRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceResponse {
    pub id: i64,
    pub student_id: i64,
    pub project_id: i64,
    pub rank: i32,
    pub status: PreferenceStatus,
    /// Set once when the preference is recorded.
    pub created_at: DateTime<Utc>,
}

impl PreferenceResponse {
    /// View of a preference recorded under `id` at `created_at`. Motivation and
    /// comment are not part of the view.
    pub fn created(
        id: i64,
        request: PreferenceCreateRequest,
        created_at: DateTime<Utc>,
    ) -> Result<PreferenceResponse, Violations> {
        if let Err(violations) = request.validate() {
            tracing::debug!(%violations, "preference creation rejected");
            return Err(violations);
        }

        Ok(PreferenceResponse {
            id,
            student_id: request.student_id.unwrap_or_default(),
            project_id: request.project_id.unwrap_or_default(),
            rank: request.rank.unwrap_or_default(),
            status: PreferenceStatus::default(),
            created_at,
        })
    }

    /// Returns `false` when `status` is already the current one.
    pub fn change_status(&mut self, status: PreferenceStatus) -> bool {
        if self.status == status {
            return false;
        }

        tracing::info!(id = self.id, from = %self.status, to = %status, "preference status changed");
        self.status = status;
        true
    }
}
