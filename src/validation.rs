//! Field-level validation of inbound requests.
//!
//! Each request implements [`Validate`] with a [`Check`] chain. All rules are
//! evaluated; the caller gets every violation at once and the request is
//! rejected as a whole. The individual tests come from the `validator` crate.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use validator::{ValidateEmail, ValidateLength, ValidateRange};

use crate::role::Named;

/// One broken field rule. `field` is the wire name of the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    RequiredFieldMissing { field: String },
    LengthExceeded { field: String, max: usize },
    LengthOutOfRange { field: String, min: usize, max: usize },
    /// Inclusive bounds. An open upper bound is stored as `i64::MAX`.
    RangeViolation { field: String, min: i64, max: i64 },
    InvalidEnumValue { field: String, value: String },
    InvalidFormat { field: String, format: &'static str },
    Inconsistent { field: String, detail: String },
}

impl Violation {
    pub fn required(field: impl ToString) -> Violation {
        Violation::RequiredFieldMissing {
            field: field.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Violation::RequiredFieldMissing { field }
            | Violation::LengthExceeded { field, .. }
            | Violation::LengthOutOfRange { field, .. }
            | Violation::RangeViolation { field, .. }
            | Violation::InvalidEnumValue { field, .. }
            | Violation::InvalidFormat { field, .. }
            | Violation::Inconsistent { field, .. } => field,
        }
    }

    /// Rule name used in problem bodies.
    pub fn rule(&self) -> &'static str {
        match self {
            Violation::RequiredFieldMissing { .. } => "required",
            Violation::LengthExceeded { .. } => "max-length",
            Violation::LengthOutOfRange { .. } => "length",
            Violation::RangeViolation { .. } => "range",
            Violation::InvalidEnumValue { .. } => "enum",
            Violation::InvalidFormat { .. } => "format",
            Violation::Inconsistent { .. } => "consistency",
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::RequiredFieldMissing { field } => write!(f, "{} is required", field),
            Violation::LengthExceeded { field, max } => {
                write!(f, "{} must not exceed {} characters", field, max)
            }
            Violation::LengthOutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {} characters", field, min, max)
            }
            Violation::RangeViolation { field, min, max } if *max == i64::MAX => {
                write!(f, "{} must be at least {}", field, min)
            }
            Violation::RangeViolation { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Violation::InvalidEnumValue { field, value } => {
                write!(f, "'{}' is not a valid value for {}", value, field)
            }
            Violation::InvalidFormat { field, format } => {
                write!(f, "{} is not a valid {}", field, format)
            }
            Violation::Inconsistent { field, detail } => write!(f, "{}: {}", field, detail),
        }
    }
}

impl std::error::Error for Violation {}

/// Every violation found in one request, in field declaration order.
///
/// A violation may carry the message the request type attaches to that rule.
/// Equality only compares the violations.
#[derive(Debug, Clone, Default)]
pub struct Violations {
    list: Vec<Violation>,
    messages: Vec<Option<&'static str>>,
}

impl Violations {
    pub fn new() -> Violations {
        Violations::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.list.push(violation);
        self.messages.push(None);
    }

    /// Moves every violation of `other`, with its message, to the end.
    pub fn append(&mut self, mut other: Violations) {
        self.list.append(&mut other.list);
        self.messages.append(&mut other.messages);
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.list.iter().filter(move |it| it.field() == field)
    }

    /// Violations paired with their message, or the generic description when
    /// the request type gave none.
    pub fn described(&self) -> impl Iterator<Item = (&Violation, Cow<'_, str>)> + '_ {
        self.list
            .iter()
            .zip(self.messages.iter())
            .map(|(violation, message)| match message {
                Some(text) => (violation, Cow::Borrowed(*text)),
                None => (violation, Cow::Owned(violation.to_string())),
            })
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.list
    }

    pub fn into_result(self) -> Result<(), Violations> {
        if self.list.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl PartialEq for Violations {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl Eq for Violations {}

impl Deref for Violations {
    type Target = [Violation];

    fn deref(&self) -> &Self::Target {
        &self.list
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        let mut violations = Violations::new();
        violations.push(violation);
        violations
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        let mut violations = Violations::new();
        for violation in iter {
            violations.push(violation);
        }
        violations
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl Display for Violations {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (_, message)) in self.described().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

pub trait Validate {
    fn validate(&self) -> Result<(), Violations>;
}

/// Text length in UTF-16 code units, the unit browser clients count in.
struct Utf16<'a>(&'a str);

impl ValidateLength<u64> for Utf16<'_> {
    fn length(&self) -> Option<u64> {
        Some(self.0.encode_utf16().count() as u64)
    }
}

fn as_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Collects violations while a request is checked field by field.
#[derive(Debug, Default)]
pub struct Check {
    violations: Violations,
    last: Option<usize>,
}

impl Check {
    pub fn new() -> Check {
        Check::default()
    }

    fn record(&mut self, violation: Option<Violation>) -> &mut Check {
        self.last = None;
        if let Some(violation) = violation {
            self.last = Some(self.violations.len());
            self.violations.push(violation);
        }
        self
    }

    /// Attaches `message` to the violation the previous rule reported, if it
    /// reported one.
    pub fn says(&mut self, message: &'static str) -> &mut Check {
        if let Some(index) = self.last {
            self.violations.messages[index] = Some(message);
        }
        self
    }

    pub fn required<T>(&mut self, field: &str, value: Option<&T>) -> &mut Check {
        self.record(value.is_none().then(|| Violation::required(field)))
    }

    /// Absent, empty and whitespace-only values all count as missing.
    pub fn not_blank(&mut self, field: &str, value: Option<&str>) -> &mut Check {
        let blank = value.map_or(true, |text| text.trim().is_empty());
        self.record(blank.then(|| Violation::required(field)))
    }

    /// `None` always passes.
    pub fn max_chars(&mut self, field: &str, value: Option<&str>, max: usize) -> &mut Check {
        let too_long = value.map_or(false, |text| {
            !Utf16(text).validate_length(None, Some(as_u64(max)), None)
        });
        self.record(too_long.then(|| Violation::LengthExceeded {
            field: field.to_string(),
            max,
        }))
    }

    /// Inclusive length bounds. `None` always passes.
    pub fn chars_between(
        &mut self,
        field: &str,
        value: Option<&str>,
        min: usize,
        max: usize,
    ) -> &mut Check {
        let outside = value.map_or(false, |text| {
            !Utf16(text).validate_length(Some(as_u64(min)), Some(as_u64(max)), None)
        });
        self.record(outside.then(|| Violation::LengthOutOfRange {
            field: field.to_string(),
            min,
            max,
        }))
    }

    /// Inclusive range. `None` always passes; pair with [`Check::required`].
    pub fn range(&mut self, field: &str, value: Option<i64>, min: i64, max: i64) -> &mut Check {
        let outside = value.map_or(false, |number| {
            !number.validate_range(Some(min), Some(max), None, None)
        });
        self.record(outside.then(|| Violation::RangeViolation {
            field: field.to_string(),
            min,
            max,
        }))
    }

    pub fn at_least(&mut self, field: &str, value: Option<i64>, min: i64) -> &mut Check {
        self.range(field, value, min, i64::MAX)
    }

    /// `None` and blank values pass; pair with [`Check::not_blank`].
    pub fn email(&mut self, field: &str, value: Option<&str>) -> &mut Check {
        let malformed = value.map_or(false, |text| {
            !text.trim().is_empty() && !text.validate_email()
        });
        self.record(malformed.then(|| Violation::InvalidFormat {
            field: field.to_string(),
            format: "email",
        }))
    }

    /// Reports a member name that matched no member.
    pub fn known<T>(&mut self, field: &str, value: Option<&Named<T>>) -> &mut Check {
        let unknown = match value {
            Some(Named::Unknown(name)) => Some(Violation::InvalidEnumValue {
                field: field.to_string(),
                value: name.clone(),
            }),
            _ => None,
        };
        self.record(unknown)
    }

    pub fn violation(&mut self, violation: Violation) -> &mut Check {
        self.record(Some(violation))
    }

    pub fn finish(&mut self) -> Result<(), Violations> {
        self.last = None;
        std::mem::take(&mut self.violations).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::WorkType;

    #[test]
    fn blank_text_is_missing() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let result = Check::new().not_blank("label", value).finish();
            assert_eq!(result, Err(Violation::required("label").into()));
        }
        assert!(Check::new().not_blank("label", Some(" x ")).finish().is_ok());
    }

    #[test]
    fn length_counts_utf16_units() {
        let accented = "é".repeat(50);
        assert_eq!(accented.len(), 100);
        assert!(Check::new()
            .max_chars("domain", Some(accented.as_str()), 50)
            .finish()
            .is_ok());

        // each emoji is a surrogate pair
        let emoji = "🦀".repeat(30);
        let result = Check::new()
            .max_chars("domain", Some(emoji.as_str()), 50)
            .finish();
        assert_eq!(
            result,
            Err(Violation::LengthExceeded {
                field: "domain".to_string(),
                max: 50
            }
            .into())
        );
    }

    #[test]
    fn length_window_is_inclusive() {
        let check = |text: &str| Check::new().chars_between("firstName", Some(text), 2, 50).finish();
        assert!(check("Al").is_ok());
        assert!(check(&"a".repeat(50)).is_ok());
        assert_eq!(
            check("A"),
            Err(Violation::LengthOutOfRange {
                field: "firstName".to_string(),
                min: 2,
                max: 50
            }
            .into())
        );
        assert!(check(&"a".repeat(51)).is_err());
    }

    #[test]
    fn range_is_inclusive() {
        assert!(Check::new().range("level", Some(1), 1, 5).finish().is_ok());
        assert!(Check::new().range("level", Some(5), 1, 5).finish().is_ok());
        assert!(Check::new().range("level", None, 1, 5).finish().is_ok());
        assert!(Check::new().range("level", Some(0), 1, 5).finish().is_err());
        assert!(Check::new().range("level", Some(6), 1, 5).finish().is_err());
        assert!(Check::new().at_least("maxStudents", Some(i64::MAX), 1).finish().is_ok());
    }

    #[test]
    fn email_format() {
        assert!(Check::new().email("email", Some("ada@univ-amu.fr")).finish().is_ok());
        assert!(Check::new().email("email", None).finish().is_ok());
        assert_eq!(
            Check::new().email("email", Some("ada.univ-amu.fr")).finish(),
            Err(Violation::InvalidFormat {
                field: "email".to_string(),
                format: "email"
            }
            .into())
        );
    }

    #[test]
    fn unknown_member_names() {
        let unknown: Named<WorkType> = Named::Unknown("STAGE".to_string());
        let violations = Check::new()
            .known("workType", Some(&Named::Known(WorkType::Test)))
            .known("workType", None::<&Named<WorkType>>)
            .known("workType", Some(&unknown))
            .finish()
            .unwrap_err();
        assert_eq!(
            violations.into_inner(),
            vec![Violation::InvalidEnumValue {
                field: "workType".to_string(),
                value: "STAGE".to_string()
            }]
        );
    }

    #[test]
    fn every_violation_is_collected() {
        let violations = Check::new()
            .not_blank("name", None)
            .max_chars("category", Some("abcdef"), 3)
            .required::<i64>("level", None)
            .finish()
            .unwrap_err();

        let rules: Vec<_> = violations.iter().map(Violation::rule).collect();
        assert_eq!(rules, vec!["required", "max-length", "required"]);
        assert_eq!(violations.for_field("level").count(), 1);
    }

    #[test]
    fn messages_attach_to_the_rule_that_failed() {
        let violations = Check::new()
            .not_blank("name", Some("Java"))
            .says("Le nom est obligatoire")
            .range("level", Some(0), 1, 5)
            .says("Le niveau doit être au minimum 1")
            .max_chars("category", Some("abcdef"), 3)
            .finish()
            .unwrap_err();

        let described: Vec<_> = violations
            .described()
            .map(|(v, message)| (v.field().to_string(), message.into_owned()))
            .collect();
        assert_eq!(
            described,
            vec![
                (
                    "level".to_string(),
                    "Le niveau doit être au minimum 1".to_string()
                ),
                (
                    "category".to_string(),
                    "category must not exceed 3 characters".to_string()
                ),
            ]
        );
    }

    #[test]
    fn messages_name_the_field() {
        let open = Violation::RangeViolation {
            field: "minStudents".to_string(),
            min: 1,
            max: i64::MAX,
        };
        assert_eq!(open.to_string(), "minStudents must be at least 1");

        let both: Violations = vec![
            Violation::required("label"),
            Violation::LengthExceeded {
                field: "domain".to_string(),
                max: 50,
            },
        ]
        .into_iter()
        .collect();
        assert_eq!(
            both.to_string(),
            "label is required; domain must not exceed 50 characters"
        );
    }
}
