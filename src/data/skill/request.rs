use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{Check, Validate, Violations};

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const CATEGORY_MAX_CHARS: usize = 50;
pub const LEVEL_MIN: i32 = 1;
pub const LEVEL_MAX: i32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillCreateRequest {
    /// Java, Python, SQL...
    pub name: Option<String>,
    pub description: Option<String>,
    /// Programmation, Base de Données, AI...
    pub category: Option<String>,
    /// Expertise level, 1 to 5.
    pub level: Option<i32>,
}

impl SkillCreateRequest {
    pub fn new(name: impl ToString, level: i32) -> SkillCreateRequest {
        SkillCreateRequest {
            name: Some(name.to_string()),
            level: Some(level),
            ..Default::default()
        }
    }
}

impl Validate for SkillCreateRequest {
    fn validate(&self) -> Result<(), Violations> {
        let name = self.name.as_deref();
        let below = self.level.map_or(false, |level| level < LEVEL_MIN);

        Check::new()
            .not_blank("name", name)
            .says("Le nom de la compétence est obligatoire")
            .max_chars("name", name, NAME_MAX_CHARS)
            .says("Le nom de la compétence ne doit pas dépasser 100 caractères")
            .max_chars("description", self.description.as_deref(), DESCRIPTION_MAX_CHARS)
            .says("La description ne doit pas dépasser 500 caractères")
            .max_chars("category", self.category.as_deref(), CATEGORY_MAX_CHARS)
            .says("La catégorie ne doit pas dépasser 50 caractères")
            .required("level", self.level.as_ref())
            .range(
                "level",
                self.level.map(i64::from),
                LEVEL_MIN.into(),
                LEVEL_MAX.into(),
            )
            .says(if below {
                "Le niveau doit être au minimum 1"
            } else {
                "Le niveau doit être au maximum 5"
            })
            .finish()
    }
}
