use crate::client::{ApiResponse, ClientError};
use reqwest::StatusCode;

/// Everything that can fail a step. Each variant carries enough context to
/// diagnose the step from the report alone.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error("expected status {expected}, got {actual}")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("body does not contain {expected:?}: {body:?}")]
    BodyContains {
        expected: &'static str,
        body: String,
    },
    #[error("the create response carried no usable food id")]
    MissingFoodId,
    #[error("no food id was captured by an earlier step")]
    NoCapturedFoodId,
    #[error("the food list is empty")]
    EmptyFoodList,
    #[error("the response body could not be parsed: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("the request could not be completed: {0}")]
    Transport(#[from] ClientError),
}

pub fn expect_status(
    expected: StatusCode,
    response: &ApiResponse,
    failures: &mut Vec<CheckFailure>,
) {
    if response.status() != expected {
        failures.push(CheckFailure::Status {
            expected,
            actual: response.status(),
        });
    }
}

// Deliberately a substring check on the raw body rather than a structural
// comparison: the service wraps its confirmation phrases in varying JSON
// quoting.
pub fn expect_body_contains(
    expected: &'static str,
    response: &ApiResponse,
    failures: &mut Vec<CheckFailure>,
) {
    if !response.body().contains(expected) {
        failures.push(CheckFailure::BodyContains {
            expected,
            body: response.body().to_owned(),
        });
    }
}
