//! Simple calculator module
//!
//! A four-function calculator: a stateless arithmetic engine and the adapter
//! that feeds it from text fields.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic
//! - `adapter/` - Reads operand fields, dispatches, writes the result field
//! - `client.rs` - `CalculatorApi` implementation over the domain service
//! - `config.rs` - String-resource table
//!
//! UI shells depend on `simple-calc-sdk` for the `Form` contract and hand an
//! implementation of it to [`Adapter`].

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapter;
pub mod client;
pub mod config;
pub mod domain;

pub use adapter::Adapter;
pub use client::LocalCalculator;
pub use config::SimpleCalcConfig;
pub use domain::Service;
