use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role::Role;
use crate::validation::{Validate, Violations};

pub mod request;

pub use request::UserUpdateRequest;

/// Account as sent back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub student_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
    /// Each role at most once, listed in declaration order.
    #[schema(value_type = Vec<Role>)]
    pub roles: BTreeSet<Role>,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Applies an identity change. A `None` student number keeps the current
    /// one. Nothing changes if the request is invalid.
    pub fn apply_update(&mut self, request: UserUpdateRequest) -> Result<(), Violations> {
        if let Err(violations) = request.validate() {
            tracing::debug!(id = self.id, %violations, "user update rejected");
            return Err(violations);
        }

        if let Some(first_name) = request.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = request.email {
            self.email = email;
        }
        if request.student_number.is_some() {
            self.student_number = request.student_number;
        }

        Ok(())
    }

    /// Returns `false` if the account was already inactive.
    pub fn deactivate(&mut self) -> bool {
        let changed = std::mem::replace(&mut self.active, false);
        if !changed {
            tracing::warn!(id = self.id, "user already inactive");
        }
        changed
    }

    /// Returns `false` if the account was already active.
    pub fn activate(&mut self) -> bool {
        let changed = !std::mem::replace(&mut self.active, true);
        if !changed {
            tracing::warn!(id = self.id, "user already active");
        }
        changed
    }
}
