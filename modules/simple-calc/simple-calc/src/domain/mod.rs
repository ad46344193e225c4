//! Domain layer for the calculator
//!
//! Contains the arithmetic engine.

pub mod service;

pub use service::Service;
