//! Closed enumerations exchanged at the API boundary.
//!
//! Every member travels as its upper-case name (`"ETUDIANT"`, `"MIXTE"`), never
//! as an ordinal, so renaming or removing a member breaks existing clients.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Returned when a name doesn't match any member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! wire_names {
    ($ty: ident, $kind: literal, { $($variant: ident => $name: literal),+ $(,)? }) => {
        impl $ty {
            /// All members, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)+
                }
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

/// User profiles of the application.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Etudiant,
    Enseignant,
    Admin,
}

wire_names!(Role, "role", {
    Etudiant => "ETUDIANT",
    Enseignant => "ENSEIGNANT",
    Admin => "ADMIN",
});

/// Kind of work a project mostly involves.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkType {
    Developpement,
    Recherche,
    Analyse,
    Veille,
    Conception,
    Documentation,
    Test,
    Mixte,
}

wire_names!(WorkType, "work type", {
    Developpement => "DEVELOPPEMENT",
    Recherche => "RECHERCHE",
    Analyse => "ANALYSE",
    Veille => "VEILLE",
    Conception => "CONCEPTION",
    Documentation => "DOCUMENTATION",
    Test => "TEST",
    Mixte => "MIXTE",
});

impl WorkType {
    /// Human readable label shown next to the member name.
    pub fn description(self) -> &'static str {
        match self {
            WorkType::Developpement => "Développement logiciel",
            WorkType::Recherche => "Recherche théorique",
            WorkType::Analyse => "Analyse de données",
            WorkType::Veille => "Veille technologique",
            WorkType::Conception => "Conception et modélisation",
            WorkType::Documentation => "Documentation technique",
            WorkType::Test => "Tests et qualité logicielle",
            WorkType::Mixte => "Travail mixte",
        }
    }
}

/// Lifecycle tag of a student preference.
///
/// The set of members is fixed but no transition rules are attached to it;
/// whoever owns preferences decides which changes are allowed.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

wire_names!(PreferenceStatus, "preference status", {
    Pending => "PENDING",
    Accepted => "ACCEPTED",
    Rejected => "REJECTED",
    Cancelled => "CANCELLED",
});

impl PreferenceStatus {
    pub fn description(self) -> &'static str {
        match self {
            PreferenceStatus::Pending => "En attente de traitement",
            PreferenceStatus::Accepted => "Préférence acceptée",
            PreferenceStatus::Rejected => "Préférence refusée",
            PreferenceStatus::Cancelled => "Annulée par l'étudiant",
        }
    }
}

/// A member name as received in a request body: a known member, or the text
/// that matched none. Validation reports the latter as an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Named<T> {
    Known(T),
    Unknown(String),
}

impl<T: Copy> Named<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Named::Known(value) => Some(*value),
            Named::Unknown(_) => None,
        }
    }
}

impl<T> From<T> for Named<T> {
    fn from(value: T) -> Self {
        Named::Known(value)
    }
}
