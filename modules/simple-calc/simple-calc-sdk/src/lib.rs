//! Simple calculator SDK
//!
//! This crate provides the contracts shared by the calculator engine, the
//! input/output adapter and any UI shell:
//! - API trait (`CalculatorApi`)
//! - Request types (`Operator`, `BinaryOperation`)
//! - Error types (`CalculatorError`, `NumeralError`, `UnknownOperator`)
//! - UI boundary (`Form`, `FieldId`)
//!
//! ## Usage
//!
//! ```ignore
//! use simple_calc_sdk::{BinaryOperation, CalculatorApi, Operator};
//!
//! let op = BinaryOperation::new(Operator::Div, 32.0, 2.0);
//! let result = calculator.compute(&op);
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{
    BinaryOperation, CalculatorApi, CalculatorError, NumeralError, Operator, UnknownOperator,
};

// === UI BOUNDARY ===
mod form;
pub use form::{FieldId, Form};

/// String-resource key of the generic message shown when a computation fails.
pub const COMPUTATION_ERROR_KEY: &str = "computationError";
