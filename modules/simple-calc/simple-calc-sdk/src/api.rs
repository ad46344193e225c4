//! Calculator API trait and types
//!
//! Contract trait and types for the calculator engine.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FieldId;

/// Operator tag selecting one of the four binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in display order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Lower-case name used on the wire and in the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name any of the four operators.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "sub" | "-" => Ok(Self::Sub),
            "mul" | "*" | "x" => Ok(Self::Mul),
            "div" | "/" => Ok(Self::Div),
            _ => Err(UnknownOperator(s.to_owned())),
        }
    }
}

/// A single binary operation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperation {
    pub operator: Operator,
    pub first: f64,
    pub second: f64,
}

impl BinaryOperation {
    #[must_use]
    pub const fn new(operator: Operator, first: f64, second: f64) -> Self {
        Self {
            operator,
            first,
            second,
        }
    }
}

/// Calculator API trait
///
/// Four pure binary operations over `f64`. Implementations never fail:
/// division by zero follows IEEE-754 and yields an infinity or `NaN`.
pub trait CalculatorApi: Send + Sync {
    /// Add two numbers.
    fn add(&self, a: f64, b: f64) -> f64;

    /// Subtract `b` from `a`.
    fn sub(&self, a: f64, b: f64) -> f64;

    /// Multiply two numbers.
    fn mul(&self, a: f64, b: f64) -> f64;

    /// Divide `a` by `b`.
    fn div(&self, a: f64, b: f64) -> f64;

    /// Dispatch on the operator tag of `op`.
    fn compute(&self, op: &BinaryOperation) -> f64 {
        match op.operator {
            Operator::Add => self.add(op.first, op.second),
            Operator::Sub => self.sub(op.first, op.second),
            Operator::Mul => self.mul(op.first, op.second),
            Operator::Div => self.div(op.first, op.second),
        }
    }
}

/// Why an operand text is not a numeral.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error(transparent)]
    Invalid(#[from] ParseFloatError),

    #[error("special values are spelled 'Infinity' and 'NaN'")]
    SpecialValueSpelling,
}

/// Error type for calculator input handling
///
/// Raised by the adapter only; the engine itself has no failure modes.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid numeral '{text}' in {field}: {source}")]
    Parse {
        field: FieldId,
        text: String,
        #[source]
        source: NumeralError,
    },

    #[error(transparent)]
    UnrecognizedOperator(#[from] UnknownOperator),
}
