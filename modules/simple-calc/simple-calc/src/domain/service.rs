//! Domain service for the calculator
//!
//! Contains the four binary operations.

use tracing::debug;

/// Domain service that performs the arithmetic.
///
/// Stateless: every method is a pure function of its operands. Nothing is
/// validated; division by zero yields an IEEE-754 infinity or `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn add(self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    #[must_use]
    pub fn sub(self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    #[must_use]
    pub fn mul(self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    #[must_use]
    pub fn div(self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing division");
        a / b
    }

}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn assert_bits(actual: f64, expected: f64) {
        assert_eq!(
            actual.to_bits(),
            expected.to_bits(),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_add() {
        let service = Service::new();
        assert_bits(service.add(1.0, 1.0), 2.0);
        assert_bits(service.add(4.0, 5.0), 9.0);
        assert_bits(service.add(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_add_negative() {
        let service = Service::new();
        assert_bits(service.add(-1.0, 2.0), 1.0);
    }

    #[test]
    fn test_add_floats() {
        let service = Service::new();
        let result = service.add(f64::from(1.111_f32), 1.111);
        assert!((result - 2.222).abs() < 0.01, "got {result}");
    }

    #[test]
    fn test_sub() {
        let service = Service::new();
        assert_bits(service.sub(1.0, 1.0), 0.0);
        assert_bits(service.sub(4.0, 5.0), -1.0);
    }

    #[test]
    fn test_sub_negative_result() {
        let service = Service::new();
        assert_bits(service.sub(1.0, 17.0), -16.0);
        assert_bits(service.sub(1.0, 3.0), -2.0);
    }

    #[test]
    fn test_mul() {
        let service = Service::new();
        assert_bits(service.mul(32.0, 2.0), 64.0);
        assert_bits(service.mul(4.0, 5.0), 20.0);
        assert_bits(service.mul(4.0, 0.0), 0.0);
    }

    #[test]
    fn test_div() {
        let service = Service::new();
        assert_bits(service.div(32.0, 2.0), 16.0);
        assert_bits(service.div(1.0, 2.0), 0.5);
    }

    #[test]
    fn test_div_by_zero() {
        let service = Service::new();
        assert_bits(service.div(32.0, 0.0), f64::INFINITY);
        assert_bits(service.div(-32.0, 0.0), f64::NEG_INFINITY);
        assert!(service.div(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_commutativity_and_identity() {
        let service = Service::new();
        let samples = [0.0, 1.5, -3.25, 1e300, -7e-12, 42.0];
        for a in samples {
            assert_bits(service.add(a, 0.0), a);
            assert_bits(service.mul(a, 1.0), a);
            for b in samples {
                assert_bits(service.add(a, b), service.add(b, a));
                assert_bits(service.mul(a, b), service.mul(b, a));
            }
        }
    }
}
