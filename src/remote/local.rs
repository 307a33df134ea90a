//! In-process transport answering matrix requests with local algebra.
//!
//! Useful offline and in tests. It speaks the same JSON as the real
//! service, so it exercises the whole client path, but it has no symbolic
//! engine: calculus requests are answered with an error.

use super::client::{Endpoint, MathTransport, TransportResponse};
use super::error::RemoteError;
use super::matrix::{Matrix, MatrixError};
use super::request::{MatrixOperation, MatrixRequest};
use super::response::{ErrorPayload, RemoteValue, ServiceResponse};
use tracing::debug;

/// Local stand-in for the math service.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalMath;

impl LocalMath {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a matrix request the way the service would.
    pub fn evaluate(&self, request: &MatrixRequest) -> Result<RemoteValue, String> {
        let a = operand(&request.matrix_a, || {
            format!("Matrix A required for {}", request.operation)
        })?;

        let value = match request.operation {
            MatrixOperation::Add => {
                let b = operand(&request.matrix_b, || {
                    "Both matrices required for addition".to_string()
                })?;
                RemoteValue::Matrix(a.add(&b).map_err(to_message)?.into())
            }
            MatrixOperation::Multiply => {
                let b = operand(&request.matrix_b, || {
                    "Both matrices required for multiplication".to_string()
                })?;
                RemoteValue::Matrix(a.multiply(&b).map_err(to_message)?.into())
            }
            MatrixOperation::Inverse => RemoteValue::Matrix(a.inverse().map_err(to_message)?.into()),
            MatrixOperation::Determinant => {
                RemoteValue::Number(a.determinant().map_err(to_message)?)
            }
            MatrixOperation::Transpose => RemoteValue::Matrix(a.transpose().into()),
        };
        Ok(value)
    }
}

fn operand(text: &str, missing: impl FnOnce() -> String) -> Result<Matrix, String> {
    if text.trim().is_empty() {
        return Err(missing());
    }
    Matrix::parse(text).map_err(to_message)
}

fn to_message(err: MatrixError) -> String {
    err.to_string()
}

fn reply(status: u16, body: &impl serde::Serialize) -> Result<TransportResponse, RemoteError> {
    Ok(TransportResponse::new(status, serde_json::to_string(body)?))
}

fn error_reply(message: String) -> Result<TransportResponse, RemoteError> {
    reply(
        400,
        &ErrorPayload {
            error: Some(message),
        },
    )
}

impl MathTransport for LocalMath {
    async fn post(
        &self,
        endpoint: Endpoint,
        body: String,
    ) -> Result<TransportResponse, RemoteError> {
        debug!(?endpoint, "answering locally");
        match endpoint {
            Endpoint::Matrix => {
                let request: MatrixRequest = serde_json::from_str(&body)?;
                match self.evaluate(&request) {
                    Ok(result) => reply(200, &ServiceResponse { result }),
                    Err(message) => error_reply(message),
                }
            }
            Endpoint::Calculus => {
                error_reply("Calculus requires the remote math service".to_string())
            }
        }
    }
}
