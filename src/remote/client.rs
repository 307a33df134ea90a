//! Client for the remote math service.
//!
//! The client validates requests, hands JSON bodies to a [`MathTransport`]
//! and decodes the reply. Calls take `&self` and hold no shared state, so a
//! host may run several at once; each finishes as a [`RemoteOutcome`] that
//! is applied to the engine with [`Calculator::record_outcome`]. Whichever
//! outcome is applied last is what the display shows.

use super::error::RemoteError;
use super::request::{CalculusRequest, MatrixRequest};
use super::response::{ErrorPayload, RemoteValue, ServiceResponse};
use crate::core::Calculator;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, warn};

/// Service endpoint a request is addressed to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Matrix,
    Calculus,
}

/// Raw reply from a transport.
#[derive(Clone, PartialEq, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers a JSON request body to an endpoint.
///
/// Implementations own the network details; failures to deliver map to
/// [`RemoteError::Transport`].
pub trait MathTransport: Send + Sync {
    fn post(
        &self,
        endpoint: Endpoint,
        body: String,
    ) -> impl Future<Output = Result<TransportResponse, RemoteError>> + Send;
}

/// A finished remote call, ready to be recorded in history.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum RemoteOutcome {
    Success { label: String, result: String },
    Failure { message: String },
}

impl RemoteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Typed client over a [`MathTransport`].
pub struct RemoteMathClient<T: MathTransport> {
    transport: T,
}

impl<T: MathTransport> RemoteMathClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate and send a matrix request.
    pub async fn matrix(&self, request: &MatrixRequest) -> Result<RemoteValue, RemoteError> {
        request.check()?;
        self.send(Endpoint::Matrix, request, "Matrix operation failed")
            .await
    }

    /// Validate and send a calculus request.
    pub async fn calculus(&self, request: &CalculusRequest) -> Result<RemoteValue, RemoteError> {
        request.check()?;
        self.send(Endpoint::Calculus, request, "Calculus operation failed")
            .await
    }

    /// Run a matrix request to completion, folding failures into a message.
    pub async fn run_matrix(&self, request: &MatrixRequest) -> RemoteOutcome {
        match self.matrix(request).await {
            Ok(value) => RemoteOutcome::Success {
                label: request.operation.label().to_string(),
                result: value.display(),
            },
            Err(err) => {
                warn!(operation = %request.operation, error = %err, "matrix operation failed");
                RemoteOutcome::Failure {
                    message: format!("Matrix operation error: {}", err),
                }
            }
        }
    }

    /// Run a calculus request to completion, folding failures into a message.
    ///
    /// Validation problems are reported as-is; anything that goes wrong
    /// after sending collapses into the operation's generic failure text.
    pub async fn run_calculus(&self, request: &CalculusRequest) -> RemoteOutcome {
        match self.calculus(request).await {
            Ok(value) => RemoteOutcome::Success {
                label: request.label(),
                result: value.display(),
            },
            Err(err) => {
                warn!(operation = %request.operation, error = %err, "calculus operation failed");
                let reason = match err {
                    RemoteError::Invalid(_) => err.to_string(),
                    _ => request.operation.failure_message().to_string(),
                };
                RemoteOutcome::Failure {
                    message: format!("Calculus operation error: {}", reason),
                }
            }
        }
    }

    async fn send<R: Serialize>(
        &self,
        endpoint: Endpoint,
        request: &R,
        fallback: &str,
    ) -> Result<RemoteValue, RemoteError> {
        let body = serde_json::to_string(request)?;
        debug!(?endpoint, %body, "sending request");

        let response = self.transport.post(endpoint, body).await?;
        if !response.is_success() {
            let message = serde_json::from_str::<ErrorPayload>(&response.body)
                .ok()
                .and_then(|payload| payload.error)
                .unwrap_or_else(|| fallback.to_string());
            return Err(RemoteError::Service {
                status: response.status,
                message,
            });
        }

        let payload: ServiceResponse = serde_json::from_str(&response.body)?;
        Ok(payload.result)
    }
}

impl Calculator {
    /// Record a finished remote call in history.
    ///
    /// Failures land under the `"Error"` label; the keypad state is not
    /// touched either way.
    pub fn record_outcome(&mut self, outcome: RemoteOutcome) {
        match outcome {
            RemoteOutcome::Success { label, result } => self.record_history(label, result),
            RemoteOutcome::Failure { message } => self.record_error(message),
        }
    }
}
