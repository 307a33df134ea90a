//! Remote math error types.

use thiserror::Error;

/// Problems found in a request before it is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Please enter Matrix A")]
    MissingMatrixA,

    #[error("Please enter Matrix B")]
    MissingMatrixB,

    #[error("Invalid format for Matrix {name}. Use format like [[1,2],[3,4]]")]
    MalformedMatrix { name: char },

    #[error("Please enter a function")]
    MissingFunction,

    #[error("Please enter a limit point")]
    MissingLimitPoint,
}

/// Errors that can occur during a remote math call
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request failed client-side validation and was never sent
    #[error("{}", join_problems(.0))]
    Invalid(Vec<RequestError>),

    /// The service answered with a non-success status
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The request could not be delivered
    #[error("Transport failed: {0}")]
    Transport(String),

    /// A request or response body was not valid JSON for its type
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_problems(problems: &[RequestError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
