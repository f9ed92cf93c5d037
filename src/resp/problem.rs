use std::fmt::{Display, Formatter};
use std::io::Cursor;

use rocket::http::ContentType;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::{response, Request, Response};
use serde::Serialize;
use serde_json::{json, Map, Value};
use utoipa::ToSchema;

use crate::data::preference::rules::PreferenceConflict;
use crate::request::RequestError;
use crate::validation::Violations;

pub const VALIDATION_PROBLEM: &str = "/problems/validation";
pub const MALFORMED_PROBLEM: &str = "/problems/malformed-request";
pub const PREFERENCE_PROBLEM: &str = "/problems/preference-conflict";

/// Implements [RFC7807](https://tools.ietf.org/html/rfc7807).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Problem {
    #[serde(skip)]
    pub status: Status,
    pub type_uri: String,
    pub title: String,

    pub detail: Option<String>,
    pub instance_uri: Option<String>,

    #[schema(value_type = Object)]
    pub body: Map<String, Value>,
}

impl Default for Problem {
    fn default() -> Self {
        Problem {
            status: Status::InternalServerError,
            type_uri: "about:blank".to_string(),
            title: "Problem".to_string(),
            detail: None,
            instance_uri: None,
            body: Map::new(),
        }
    }
}

impl Problem {
    pub fn new(status: Status, type_uri: impl ToString, title: impl ToString) -> Problem {
        Problem {
            status,
            type_uri: type_uri.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn new_untyped(status: Status, title: impl ToString) -> Problem {
        Problem::new(status, "about:blank", title)
    }

    pub fn detail(&mut self, value: impl ToString) -> &mut Problem {
        self.detail = Some(value.to_string());
        self
    }

    pub fn instance_uri(&mut self, value: impl ToString) -> &mut Problem {
        self.instance_uri = Some(value.to_string());
        self
    }

    pub fn insert_json_value(&mut self, key: impl ToString, value: Value) -> &mut Problem {
        self.body.insert(key.to_string(), value);
        self
    }

    pub fn insert_str(&mut self, key: impl ToString, value: impl ToString) -> &mut Problem {
        self.insert_json_value(key, Value::String(value.to_string()))
    }

    /// The full `application/problem+json` document.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut body = self.body.clone();

        // Following are required by rfc7807
        body.insert("type".to_string(), Value::from(self.type_uri.as_str()));
        body.insert("title".to_string(), Value::from(self.title.as_str()));

        // Optional parameters as specified by rfc7807
        if let Some(detail) = &self.detail {
            body.insert("detail".to_string(), Value::from(detail.as_str()));
        }
        body.insert("status".to_string(), Value::from(self.status.code));
        if let Some(instance) = &self.instance_uri {
            body.insert("instance".to_string(), Value::from(instance.as_str()));
        }

        body
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.title)
    }
}

impl std::error::Error for Problem {}

impl<'r> Responder<'r, 'static> for Problem {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body_string = serde_json::to_string(&self.to_json()).map_err(|err| {
            tracing::error!("Unable to serialize problem '{}': {}", self.title, err);
            Status::InternalServerError
        })?;

        Response::build()
            .status(self.status)
            .header(ContentType::new("application", "problem+json"))
            .raw_header("Content-Language", "en")
            .sized_body(body_string.len(), Cursor::new(body_string))
            .ok()
    }
}

impl From<Violations> for Problem {
    fn from(violations: Violations) -> Self {
        let list: Vec<Value> = violations
            .described()
            .map(|(violation, message)| {
                json!({
                    "field": violation.field(),
                    "rule": violation.rule(),
                    "message": message,
                })
            })
            .collect();

        let mut problem = Problem::new(
            Status::BadRequest,
            VALIDATION_PROBLEM,
            "The request contains invalid fields.",
        );
        problem
            .detail(&violations)
            .insert_json_value("violations", Value::Array(list));
        problem
    }
}

impl From<RequestError> for Problem {
    fn from(e: RequestError) -> Self {
        match e {
            RequestError::Invalid(violations) => violations.into(),
            RequestError::Malformed { path, source } => {
                let mut problem = Problem::new(
                    Status::BadRequest,
                    MALFORMED_PROBLEM,
                    "There was a problem parsing part of the request.",
                );
                problem.detail(source);
                if !path.is_empty() {
                    problem.insert_str("path", path);
                }
                problem
            }
        }
    }
}

impl From<PreferenceConflict> for Problem {
    fn from(e: PreferenceConflict) -> Self {
        let code = match &e {
            PreferenceConflict::ProjectClosed { .. } => "PROJECT_CLOSED",
            PreferenceConflict::ProjectFull { .. } => "PROJECT_FULL",
            PreferenceConflict::DuplicateProject { .. } => "DUPLICATE_PROJECT",
            PreferenceConflict::DuplicateRank { .. } => "DUPLICATE_RANK",
            PreferenceConflict::LimitReached { .. } => "LIMIT_REACHED",
            PreferenceConflict::NotPending { .. } => "NOT_PENDING",
        };

        let mut problem = Problem::new(
            Status::BadRequest,
            PREFERENCE_PROBLEM,
            "The preference cannot be recorded.",
        );
        problem.detail(&e).insert_str("code", code);
        problem
    }
}

impl From<serde_json::Error> for Problem {
    fn from(_: serde_json::Error) -> Self {
        Problem::new_untyped(
            Status::InternalServerError,
            "An error occurred while processing JSON data.",
        )
    }
}
