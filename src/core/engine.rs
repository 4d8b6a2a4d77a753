use crate::core::{Complex, ComplexOps, Summary};

/// Runs the full operation set over one operand pair.
pub struct CalcEngine<O: ComplexOps> {
    ops: O,
}

impl<O: ComplexOps> CalcEngine<O> {
    pub fn new(ops: O) -> Self {
        Self { ops }
    }

    pub fn run(&self, a: Complex, b: Complex) -> Summary {
        tracing::debug!("Evaluating operations for a = {}, b = {}", a, b);

        Summary {
            addition: self.ops.add(a, b),
            multiplication: self.ops.multiply(a, b),
            division: self.ops.divide(a, b),
        }
    }
}
