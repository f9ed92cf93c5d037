use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{Check, Validate, Violations};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const STUDENT_NUMBER_MAX_CHARS: usize = 20;

/// Identity change made by an administrator. Roles, the `active` flag and
/// the creation date are not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Only students have one. At most 20 characters.
    pub student_number: Option<String>,
}

impl UserUpdateRequest {
    pub fn new(
        first_name: impl ToString,
        last_name: impl ToString,
        email: impl ToString,
    ) -> UserUpdateRequest {
        UserUpdateRequest {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            email: Some(email.to_string()),
            student_number: None,
        }
    }
}

impl Validate for UserUpdateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let first_name = self.first_name.as_deref();
        let last_name = self.last_name.as_deref();
        let email = self.email.as_deref();

        Check::new()
            .not_blank("firstName", first_name)
            .says("Le prénom est obligatoire")
            .chars_between("firstName", first_name, NAME_MIN_CHARS, NAME_MAX_CHARS)
            .says("Le prénom doit contenir entre 2 et 50 caractères")
            .not_blank("lastName", last_name)
            .says("Le nom est obligatoire")
            .chars_between("lastName", last_name, NAME_MIN_CHARS, NAME_MAX_CHARS)
            .says("Le nom doit contenir entre 2 et 50 caractères")
            .not_blank("email", email)
            .says("L'email est obligatoire")
            .email("email", email)
            .says("Le format de l'email est invalide")
            .max_chars(
                "studentNumber",
                self.student_number.as_deref(),
                STUDENT_NUMBER_MAX_CHARS,
            )
            .says("Le numéro étudiant ne doit pas dépasser 20 caractères")
            .finish()
    }
}
