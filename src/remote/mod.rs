//! Client side of the remote math service.
//!
//! Matrix and calculus work happens behind a [`MathTransport`]; this module
//! owns the request/response models, validation before sending, and the
//! conversion of every outcome into something the history can show.
//!
//! # Example
//!
//! ```rust
//! use lambdacalc::core::Calculator;
//! use lambdacalc::remote::{LocalMath, MatrixOperation, MatrixRequest, RemoteMathClient};
//!
//! # tokio_test_block(async {
//! let client = RemoteMathClient::new(LocalMath::new());
//! let request = MatrixRequest::new(MatrixOperation::Determinant, "[[1,2],[3,4]]", "");
//!
//! let mut calc = Calculator::new();
//! calc.record_outcome(client.run_matrix(&request).await);
//!
//! let entry = calc.history().latest().unwrap();
//! assert_eq!(entry.label, "det(Matrix A)");
//! assert_eq!(entry.result, "-2");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

mod client;
mod error;
mod local;
mod matrix;
mod request;
mod response;

pub use client::{Endpoint, MathTransport, RemoteMathClient, RemoteOutcome, TransportResponse};
pub use error::{RemoteError, RequestError};
pub use local::LocalMath;
pub use matrix::{Matrix, MatrixError};
pub use request::{
    CalculusOperation, CalculusRequest, MatrixOperation, MatrixRequest, RequestValidation,
};
pub use response::{ErrorPayload, RemoteValue, ServiceResponse};
