use crate::domain::model::Complex;

/// Which of the three operations produced a result. Carries the wording the
/// log line uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
    Divide,
}

impl Operation {
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Add => "Adding",
            Operation::Multiply => "Multiplying",
            Operation::Divide => "Dividing",
        }
    }

    pub fn connective(&self) -> &'static str {
        match self {
            Operation::Add | Operation::Multiply => "and",
            Operation::Divide => "by",
        }
    }
}

/// The operation set every calculator implementation provides. Operations
/// take their operands by value and never mutate the implementation.
pub trait ComplexOps {
    fn add(&self, a: Complex, b: Complex) -> Complex;
    fn multiply(&self, a: Complex, b: Complex) -> Complex;
    fn divide(&self, a: Complex, b: Complex) -> Complex;
}

impl<O: ComplexOps + ?Sized> ComplexOps for &O {
    fn add(&self, a: Complex, b: Complex) -> Complex {
        (**self).add(a, b)
    }

    fn multiply(&self, a: Complex, b: Complex) -> Complex {
        (**self).multiply(a, b)
    }

    fn divide(&self, a: Complex, b: Complex) -> Complex {
        (**self).divide(a, b)
    }
}

impl<O: ComplexOps + ?Sized> ComplexOps for Box<O> {
    fn add(&self, a: Complex, b: Complex) -> Complex {
        (**self).add(a, b)
    }

    fn multiply(&self, a: Complex, b: Complex) -> Complex {
        (**self).multiply(a, b)
    }

    fn divide(&self, a: Complex, b: Complex) -> Complex {
        (**self).divide(a, b)
    }
}

/// Side-effect hook invoked by the logging decorator after each computation.
/// Implementations must not alter the result; they only observe it.
pub trait OpObserver {
    fn record(&self, op: Operation, a: Complex, b: Complex, result: Complex);
}

impl<T: OpObserver + ?Sized> OpObserver for &T {
    fn record(&self, op: Operation, a: Complex, b: Complex, result: Complex) {
        (**self).record(op, a, b, result)
    }
}

/// Operand source for the driver.
pub trait ConfigProvider {
    fn lhs(&self) -> Complex;
    fn rhs(&self) -> Complex;
}
