use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{Check, Validate, Violations};

pub const LABEL_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 300;
pub const DOMAIN_MAX_CHARS: usize = 50;

/// Body of a keyword creation. `active` is not accepted here; new keywords
/// start active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCreateRequest {
    /// Required, at most 100 characters.
    pub label: Option<String>,
    /// At most 300 characters.
    pub description: Option<String>,
    /// Area the keyword belongs to (IA, Web, BDD...), at most 50 characters.
    pub domain: Option<String>,
}

impl KeywordCreateRequest {
    pub fn new(label: impl ToString) -> KeywordCreateRequest {
        KeywordCreateRequest {
            label: Some(label.to_string()),
            ..Default::default()
        }
    }
}

impl Validate for KeywordCreateRequest {
    fn validate(&self) -> Result<(), Violations> {
        check_fields(
            &mut Check::new(),
            self.label.as_deref(),
            self.description.as_deref(),
            self.domain.as_deref(),
        )
        .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordUpdateRequest {
    pub label: Option<String>,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub active: Option<bool>,
}

impl Validate for KeywordUpdateRequest {
    fn validate(&self) -> Result<(), Violations> {
        check_fields(
            &mut Check::new(),
            self.label.as_deref(),
            self.description.as_deref(),
            self.domain.as_deref(),
        )
        .finish()
    }
}

fn check_fields<'c>(
    check: &'c mut Check,
    label: Option<&str>,
    description: Option<&str>,
    domain: Option<&str>,
) -> &'c mut Check {
    check
        .not_blank("label", label)
        .says("Le libellé du mot-clé est obligatoire")
        .max_chars("label", label, LABEL_MAX_CHARS)
        .says("Le libellé ne doit pas dépasser 100 caractères")
        .max_chars("description", description, DESCRIPTION_MAX_CHARS)
        .says("La description ne doit pas dépasser 300 caractères")
        .max_chars("domain", domain, DOMAIN_MAX_CHARS)
        .says("Le domaine ne doit pas dépasser 50 caractères")
}
