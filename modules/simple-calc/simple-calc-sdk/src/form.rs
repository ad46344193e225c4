//! UI boundary
//!
//! The adapter never touches a concrete UI. It reads and writes named fields
//! and resolves user-visible strings through a `Form`.

use std::fmt;

/// The external fields the adapter talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    OperandOne,
    OperandTwo,
    Result,
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OperandOne => "operand one",
            Self::OperandTwo => "operand two",
            Self::Result => "result",
        })
    }
}

/// Host-supplied view binding and string resources.
pub trait Form {
    /// Current text of `field`.
    fn read_field(&self, field: FieldId) -> String;

    /// Replace the text of `field`.
    fn write_field(&mut self, field: FieldId, text: &str);

    /// Resolve a string resource by key.
    fn lookup_string(&self, key: &str) -> String;
}
