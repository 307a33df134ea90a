//! Binary operators and unary functions available on the keypad.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Binary operator awaiting its second operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Look up an operator by its keypad symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator to `(a, b)`.
    ///
    /// Division by zero yields `0` instead of an infinity or NaN.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::core::Operator;
    ///
    /// assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
    /// assert_eq!(Operator::Divide.apply(5.0, 0.0), 0.0);
    /// ```
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Single-argument function key.
///
/// Trigonometric functions take their argument in degrees.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Square,
    Exp,
    Pi,
}

impl Function {
    /// Look up a function by its key name.
    ///
    /// `pow` is accepted as the button identifier for squaring.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            "square" | "pow" => Some(Self::Square),
            "exp" => Some(Self::Exp),
            "pi" => Some(Self::Pi),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Exp => "exp",
            Self::Pi => "pi",
        }
    }

    /// Apply the function to `value`. `Pi` ignores its argument.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::core::Function;
    ///
    /// assert_eq!(Function::Square.apply(3.0), 9.0);
    /// assert!((Function::Sin.apply(90.0) - 1.0).abs() < 1e-12);
    /// ```
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Sin => (value * PI / 180.0).sin(),
            Self::Cos => (value * PI / 180.0).cos(),
            Self::Tan => (value * PI / 180.0).tan(),
            Self::Log => value.log10(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value.powi(2),
            Self::Exp => value.exp(),
            Self::Pi => PI,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn operators_round_trip_through_symbols() {
        for symbol in ['+', '-', '*', '/'] {
            let op = Operator::from_symbol(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
        }
        assert!(Operator::from_symbol('%').is_none());
    }

    #[test]
    fn binary_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operator::Divide.apply(3.0, 2.0), 1.5);
    }

    #[test]
    fn division_by_zero_yields_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), 0.0);
        assert_eq!(Operator::Divide.apply(-5.0, -0.0), 0.0);
        assert_eq!(Operator::Divide.apply(0.0, 0.0), 0.0);
    }

    #[test]
    fn operator_serializes_as_symbol() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"*\"");
        let back: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Operator::Multiply);
    }

    #[test]
    fn trig_uses_degrees() {
        assert!((Function::Sin.apply(30.0) - 0.5).abs() < EPSILON);
        assert!((Function::Cos.apply(60.0) - 0.5).abs() < EPSILON);
        assert!((Function::Tan.apply(45.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn logarithms_and_exponentials() {
        assert!((Function::Log.apply(1000.0) - 3.0).abs() < EPSILON);
        assert!((Function::Ln.apply(std::f64::consts::E) - 1.0).abs() < EPSILON);
        assert!((Function::Exp.apply(0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn pi_ignores_argument() {
        assert_eq!(Function::Pi.apply(123.0), PI);
    }

    #[test]
    fn sqrt_undoes_square() {
        let squared = Function::Square.apply(3.0);
        assert!((Function::Sqrt.apply(squared) - 3.0).abs() < EPSILON);
    }

    #[test]
    fn function_names_resolve() {
        assert_eq!(Function::from_name("pow"), Some(Function::Square));
        assert_eq!(Function::from_name("square"), Some(Function::Square));
        assert_eq!(Function::from_name("sqrt").map(|f| f.name()), Some("sqrt"));
        assert!(Function::from_name("factorial").is_none());
    }
}
