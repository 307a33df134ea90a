//! Response payloads from the math service.

use super::matrix::format_rows;
use crate::core::format_for_display;
use serde::{Deserialize, Serialize};

/// A result as the service returns it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteValue {
    Number(f64),
    Matrix(Vec<Vec<f64>>),
    Text(String),
}

impl RemoteValue {
    /// Render the value for a history entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::remote::RemoteValue;
    ///
    /// assert_eq!(RemoteValue::Number(-2.0).display(), "-2");
    /// assert_eq!(RemoteValue::Text("2*x".into()).display(), "2*x");
    /// assert_eq!(
    ///     RemoteValue::Matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).display(),
    ///     "[1, 2]\n[3, 4]"
    /// );
    /// ```
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => format_for_display(*n),
            Self::Matrix(rows) => format_rows(rows),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Success body: `{ "result": ... }`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub result: RemoteValue,
}

/// Failure body: `{ "error": "..." }`.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_result_decodes() {
        let body: ServiceResponse = serde_json::from_str(r#"{"result": -2.0}"#).unwrap();
        assert_eq!(body.result, RemoteValue::Number(-2.0));
    }

    #[test]
    fn matrix_result_decodes() {
        let body: ServiceResponse =
            serde_json::from_str(r#"{"result": [[1, 3], [2, 4]], "operation": "transpose"}"#)
                .unwrap();
        assert_eq!(
            body.result,
            RemoteValue::Matrix(vec![vec![1.0, 3.0], vec![2.0, 4.0]])
        );
    }

    #[test]
    fn text_result_decodes() {
        let body: ServiceResponse = serde_json::from_str(r#"{"result": "x**3/3"}"#).unwrap();
        assert_eq!(body.result, RemoteValue::Text("x**3/3".to_string()));
    }

    #[test]
    fn error_payload_tolerates_missing_field() {
        let payload: ErrorPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.error, None);
        let payload: ErrorPayload = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(payload.error.as_deref(), Some("boom"));
    }

    #[test]
    fn large_numbers_display_in_scientific_notation() {
        assert_eq!(RemoteValue::Number(1.23456e20).display(), "1.234560e+20");
    }
}
