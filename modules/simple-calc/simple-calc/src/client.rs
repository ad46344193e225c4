//! Local `CalculatorApi` implementation
//!
//! Serves the SDK trait directly from the in-process domain service.

use simple_calc_sdk::CalculatorApi;

use crate::domain::Service;

/// In-process calculator client.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalculator {
    service: Service,
}

impl LocalCalculator {
    #[must_use]
    pub const fn new(service: Service) -> Self {
        Self { service }
    }
}

impl CalculatorApi for LocalCalculator {
    fn add(&self, a: f64, b: f64) -> f64 {
        self.service.add(a, b)
    }

    fn sub(&self, a: f64, b: f64) -> f64 {
        self.service.sub(a, b)
    }

    fn mul(&self, a: f64, b: f64) -> f64 {
        self.service.mul(a, b)
    }

    fn div(&self, a: f64, b: f64) -> f64 {
        self.service.div(a, b)
    }
}
