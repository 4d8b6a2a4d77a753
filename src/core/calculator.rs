use crate::core::{Complex, ComplexOps};

/// Plain calculator. Stateless; the arithmetic lives on the `Complex`
/// operator impls and this type just exposes it through the capability
/// trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }
}

impl ComplexOps for Calculator {
    fn add(&self, a: Complex, b: Complex) -> Complex {
        a + b
    }

    fn multiply(&self, a: Complex, b: Complex) -> Complex {
        a * b
    }

    fn divide(&self, a: Complex, b: Complex) -> Complex {
        a / b
    }
}
