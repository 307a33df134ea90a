//! Request models for the matrix and calculus endpoints.
//!
//! Validation accumulates every problem with a request instead of stopping
//! at the first, so the user sees all of them in one error entry.

use super::error::{RemoteError, RequestError};
use super::matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a request.
pub type RequestValidation = Validation<(), NonEmptyVec<RequestError>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixOperation {
    Add,
    Multiply,
    Inverse,
    Determinant,
    Transpose,
}

impl MatrixOperation {
    /// Determinant and inverse are sent without Matrix A being checked;
    /// the service reports the omission itself.
    pub fn requires_matrix_a(&self) -> bool {
        !matches!(self, Self::Determinant | Self::Inverse)
    }

    pub fn requires_matrix_b(&self) -> bool {
        matches!(self, Self::Add | Self::Multiply)
    }

    /// History label for a completed operation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Matrix A + Matrix B",
            Self::Multiply => "Matrix A × Matrix B",
            Self::Inverse => "Matrix A⁻¹",
            Self::Determinant => "det(Matrix A)",
            Self::Transpose => "Matrix Aᵀ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "multiply",
            Self::Inverse => "inverse",
            Self::Determinant => "determinant",
            Self::Transpose => "transpose",
        }
    }
}

impl fmt::Display for MatrixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of a matrix endpoint request.
///
/// Matrices travel as the text the user typed, e.g. `[[1,2],[3,4]]`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRequest {
    pub operation: MatrixOperation,
    #[serde(default)]
    pub matrix_a: String,
    #[serde(default)]
    pub matrix_b: String,
}

impl MatrixRequest {
    /// Build a request, trimming both matrix texts.
    pub fn new(operation: MatrixOperation, matrix_a: &str, matrix_b: &str) -> Self {
        Self {
            operation,
            matrix_a: matrix_a.trim().to_string(),
            matrix_b: matrix_b.trim().to_string(),
        }
    }

    /// Check every rule, collecting all violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::remote::{MatrixOperation, MatrixRequest, RequestError};
    ///
    /// let request = MatrixRequest::new(MatrixOperation::Add, "", "");
    /// let problems = request.check().unwrap_err();
    /// assert_eq!(problems, [RequestError::MissingMatrixA, RequestError::MissingMatrixB]);
    /// ```
    pub fn validate(&self) -> RequestValidation {
        let checks: Vec<RequestValidation> = vec![
            self.check_operand('A', &self.matrix_a, self.operation.requires_matrix_a()),
            self.check_operand('B', &self.matrix_b, self.operation.requires_matrix_b()),
        ];
        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result` listing every problem.
    pub fn check(&self) -> Result<(), Vec<RequestError>> {
        into_result(self.validate())
    }

    fn check_operand(&self, name: char, text: &str, required: bool) -> RequestValidation {
        if text.is_empty() {
            if required {
                Validation::fail(missing_matrix(name))
            } else {
                Validation::success(())
            }
        } else if Matrix::parse(text).is_err() {
            Validation::fail(RequestError::MalformedMatrix { name })
        } else {
            Validation::success(())
        }
    }
}

fn missing_matrix(name: char) -> RequestError {
    if name == 'A' {
        RequestError::MissingMatrixA
    } else {
        RequestError::MissingMatrixB
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculusOperation {
    Differentiate,
    Integrate,
    Limit,
}

impl CalculusOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Differentiate => "differentiate",
            Self::Integrate => "integrate",
            Self::Limit => "limit",
        }
    }

    /// Message shown when the service cannot complete the operation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Differentiate => "Differentiation failed. Please check your function syntax.",
            Self::Integrate => "Integration failed. Please check your function syntax.",
            Self::Limit => "Limit computation failed. Please check your function syntax.",
        }
    }
}

impl fmt::Display for CalculusOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of a calculus endpoint request.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculusRequest {
    pub operation: CalculusOperation,
    pub function: String,
    pub variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl CalculusRequest {
    /// Variable used when none is given.
    pub const DEFAULT_VARIABLE: &'static str = "x";

    pub fn differentiate(function: &str, variable: &str) -> Self {
        Self::build(CalculusOperation::Differentiate, function, variable, None, None)
    }

    pub fn integrate(function: &str, variable: &str) -> Self {
        Self::build(CalculusOperation::Integrate, function, variable, None, None)
    }

    /// A limit request; `direction` is passed through to the service as-is.
    pub fn limit(function: &str, variable: &str, point: &str, direction: Option<&str>) -> Self {
        Self::build(
            CalculusOperation::Limit,
            function,
            variable,
            Some(point),
            direction,
        )
    }

    fn build(
        operation: CalculusOperation,
        function: &str,
        variable: &str,
        point: Option<&str>,
        direction: Option<&str>,
    ) -> Self {
        let variable = match variable.trim() {
            "" => Self::DEFAULT_VARIABLE,
            v => v,
        };
        Self {
            operation,
            function: function.trim().to_string(),
            variable: variable.to_string(),
            point: point.map(|p| p.trim().to_string()),
            direction: direction.map(str::to_string),
        }
    }

    /// History label, e.g. `d/dx(x^2)`.
    pub fn label(&self) -> String {
        match self.operation {
            CalculusOperation::Differentiate => {
                format!("d/d{}({})", self.variable, self.function)
            }
            CalculusOperation::Integrate => format!("∫{} d{}", self.function, self.variable),
            CalculusOperation::Limit => format!(
                "lim({}) as {} → {}",
                self.function,
                self.variable,
                self.point.as_deref().unwrap_or_default()
            ),
        }
    }

    pub fn validate(&self) -> RequestValidation {
        let function_check = if self.function.is_empty() {
            Validation::fail(RequestError::MissingFunction)
        } else {
            Validation::success(())
        };

        let point_missing = self.operation == CalculusOperation::Limit
            && self.point.as_deref().map_or(true, str::is_empty);
        let point_check = if point_missing {
            Validation::fail(RequestError::MissingLimitPoint)
        } else {
            Validation::success(())
        };

        let checks: Vec<RequestValidation> = vec![function_check, point_check];
        Validation::all_vec(checks).map(|_| ())
    }

    pub fn check(&self) -> Result<(), Vec<RequestError>> {
        into_result(self.validate())
    }
}

fn into_result(validation: RequestValidation) -> Result<(), Vec<RequestError>> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

impl From<Vec<RequestError>> for RemoteError {
    fn from(problems: Vec<RequestError>) -> Self {
        RemoteError::Invalid(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_without_matrices_reports_both() {
        let request = MatrixRequest::new(MatrixOperation::Add, "  ", "");
        let result = request.validate();

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RequestError::MissingMatrixA)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RequestError::MissingMatrixB)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn determinant_and_inverse_skip_matrix_a_check() {
        for op in [MatrixOperation::Determinant, MatrixOperation::Inverse] {
            assert!(MatrixRequest::new(op, "", "").validate().is_success());
        }
    }

    #[test]
    fn transpose_needs_only_matrix_a() {
        assert!(MatrixRequest::new(MatrixOperation::Transpose, "[[1,2]]", "")
            .validate()
            .is_success());
        assert_eq!(
            MatrixRequest::new(MatrixOperation::Transpose, "", "").check(),
            Err(vec![RequestError::MissingMatrixA])
        );
    }

    #[test]
    fn multiply_requires_matrix_b() {
        assert_eq!(
            MatrixRequest::new(MatrixOperation::Multiply, "[[1]]", "").check(),
            Err(vec![RequestError::MissingMatrixB])
        );
    }

    #[test]
    fn malformed_matrices_are_reported() {
        let request = MatrixRequest::new(MatrixOperation::Add, "[[1,2]", "[[1],[2,3]]");
        assert_eq!(
            request.check(),
            Err(vec![
                RequestError::MalformedMatrix { name: 'A' },
                RequestError::MalformedMatrix { name: 'B' },
            ])
        );
    }

    #[test]
    fn matrix_request_uses_wire_names() {
        let request = MatrixRequest::new(MatrixOperation::Determinant, " [[1,2],[3,4]] ", "");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "operation": "determinant",
                "matrixA": "[[1,2],[3,4]]",
                "matrixB": ""
            })
        );
    }

    #[test]
    fn matrix_labels() {
        assert_eq!(MatrixOperation::Multiply.label(), "Matrix A × Matrix B");
        assert_eq!(MatrixOperation::Determinant.label(), "det(Matrix A)");
    }

    #[test]
    fn blank_variable_defaults_to_x() {
        let request = CalculusRequest::differentiate("x^2", "  ");
        assert_eq!(request.variable, "x");
        assert_eq!(request.label(), "d/dx(x^2)");
    }

    #[test]
    fn calculus_labels() {
        assert_eq!(CalculusRequest::integrate("t^2", "t").label(), "∫t^2 dt");
        assert_eq!(
            CalculusRequest::limit("sin(x)/x", "", "0", Some("+")).label(),
            "lim(sin(x)/x) as x → 0"
        );
    }

    #[test]
    fn calculus_requires_function() {
        assert_eq!(
            CalculusRequest::integrate("   ", "x").check(),
            Err(vec![RequestError::MissingFunction])
        );
    }

    #[test]
    fn limit_requires_point() {
        assert_eq!(
            CalculusRequest::limit("", "x", " ", None).check(),
            Err(vec![
                RequestError::MissingFunction,
                RequestError::MissingLimitPoint
            ])
        );
        assert!(CalculusRequest::limit("1/x", "x", "0", Some("-"))
            .validate()
            .is_success());
    }

    #[test]
    fn calculus_request_omits_absent_fields() {
        let json = serde_json::to_value(CalculusRequest::differentiate("x^3", "x")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "operation": "differentiate",
                "function": "x^3",
                "variable": "x"
            })
        );

        let json = serde_json::to_value(CalculusRequest::limit("1/x", "x", "0", Some("+"))).unwrap();
        assert_eq!(json["point"], "0");
        assert_eq!(json["direction"], "+");
    }
}
