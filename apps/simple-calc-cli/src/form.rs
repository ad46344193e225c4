//! Terminal-backed `Form`: plain in-memory fields plus the configured
//! string table.

use simple_calc::SimpleCalcConfig;
use simple_calc_sdk::{FieldId, Form};

pub struct TerminalForm<'a> {
    operand_one: String,
    operand_two: String,
    result: String,
    strings: &'a SimpleCalcConfig,
}

impl<'a> TerminalForm<'a> {
    #[must_use]
    pub const fn new(strings: &'a SimpleCalcConfig) -> Self {
        Self {
            operand_one: String::new(),
            operand_two: String::new(),
            result: String::new(),
            strings,
        }
    }

    /// Fill both operand fields, as a user typing into them would.
    pub fn set_operands(&mut self, one: &str, two: &str) {
        one.clone_into(&mut self.operand_one);
        two.clone_into(&mut self.operand_two);
    }

    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }
}

impl Form for TerminalForm<'_> {
    fn read_field(&self, field: FieldId) -> String {
        match field {
            FieldId::OperandOne => self.operand_one.clone(),
            FieldId::OperandTwo => self.operand_two.clone(),
            FieldId::Result => self.result.clone(),
        }
    }

    fn write_field(&mut self, field: FieldId, text: &str) {
        let slot = match field {
            FieldId::OperandOne => &mut self.operand_one,
            FieldId::OperandTwo => &mut self.operand_two,
            FieldId::Result => &mut self.result,
        };
        text.clone_into(slot);
    }

    fn lookup_string(&self, key: &str) -> String {
        self.strings.lookup(key)
    }
}
