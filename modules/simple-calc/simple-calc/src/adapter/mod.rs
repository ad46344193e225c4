//! Input/output adapter
//!
//! Translates a trigger (an operator selection) into one engine call:
//! read both operand fields, parse them, dispatch, and write the formatted
//! result. Failures never escape as panics; the generic error string is
//! written to the result field and the error is returned to the caller.

mod format;
mod operand;

use std::sync::Arc;

use simple_calc_sdk::{
    BinaryOperation, COMPUTATION_ERROR_KEY, CalculatorApi, CalculatorError, FieldId, Form,
    Operator,
};
use tracing::{debug, error, instrument};

use crate::client::LocalCalculator;

pub use format::format_result;
pub use operand::parse_operand;

/// Bridges a [`Form`] to a [`CalculatorApi`].
#[derive(Clone)]
pub struct Adapter {
    calculator: Arc<dyn CalculatorApi>,
}

impl Default for Adapter {
    fn default() -> Self {
        Self::new(Arc::new(LocalCalculator::default()))
    }
}

impl Adapter {
    #[must_use]
    pub fn new(calculator: Arc<dyn CalculatorApi>) -> Self {
        Self { calculator }
    }

    /// Handle a trigger for `operator`.
    ///
    /// # Errors
    /// Returns `CalculatorError::Parse` when an operand field does not hold a
    /// numeral. The result field then holds the `computationError` string.
    #[instrument(skip_all, fields(operator = %operator))]
    pub fn compute<F: Form + ?Sized>(
        &self,
        form: &mut F,
        operator: Operator,
    ) -> Result<f64, CalculatorError> {
        let op = read_operation(form, operator).map_err(|e| fail(form, e))?;

        let result = self.calculator.compute(&op);
        debug!(first = op.first, second = op.second, result, "computation completed");

        form.write_field(FieldId::Result, &format_result(result));
        Ok(result)
    }

    /// Handle a trigger whose operator arrives as text.
    ///
    /// # Errors
    /// Returns `CalculatorError::UnrecognizedOperator` when `operator` names
    /// none of the four operations, or any error of [`Adapter::compute`].
    pub fn compute_named<F: Form + ?Sized>(
        &self,
        form: &mut F,
        operator: &str,
    ) -> Result<f64, CalculatorError> {
        let op = operator
            .parse::<Operator>()
            .map_err(|e| fail(form, e.into()))?;
        self.compute(form, op)
    }
}

fn read_operation<F: Form + ?Sized>(
    form: &F,
    operator: Operator,
) -> Result<BinaryOperation, CalculatorError> {
    let first = parse_operand(FieldId::OperandOne, &form.read_field(FieldId::OperandOne))?;
    let second = parse_operand(FieldId::OperandTwo, &form.read_field(FieldId::OperandTwo))?;
    Ok(BinaryOperation::new(operator, first, second))
}

fn fail<F: Form + ?Sized>(form: &mut F, err: CalculatorError) -> CalculatorError {
    error!(error = %err, "computation failed");
    let message = form.lookup_string(COMPUTATION_ERROR_KEY);
    form.write_field(FieldId::Result, &message);
    err
}
