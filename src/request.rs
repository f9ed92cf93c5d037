//! Decoding of JSON request bodies.
//!
//! Deserialisation only fails for malformed JSON and wrong value types.
//! Required fields are `Option`s and enumeration fields are
//! [`Named`](crate::role::Named), so missing values and unknown member names
//! are both reported by validation, together with every other field rule.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::validation::{Validate, Violations};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request body at '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid request: {0}")]
    Invalid(#[from] Violations),
}

/// Parses `body` and validates the result.
pub fn decode_json<T: DeserializeOwned + Validate>(body: &str) -> Result<T, RequestError> {
    let request: T = parse_json(body)?;

    if let Err(violations) = request.validate() {
        tracing::debug!(%violations, "request failed validation");
        return Err(violations.into());
    }

    Ok(request)
}

/// Parses `body` without validating it.
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    let mut de = serde_json::Deserializer::from_str(body);

    let request = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        tracing::debug!(%path, error = %source, "malformed request body");
        RequestError::Malformed { path, source }
    })?;

    de.end().map_err(|source| RequestError::Malformed {
        path: String::new(),
        source,
    })?;

    Ok(request)
}
