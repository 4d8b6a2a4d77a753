use crate::core::calculator::Calculator;
use crate::core::{Complex, ComplexOps, OpObserver, Operation};

/// Default observer: emits one informational log record per operation, e.g.
/// `Adding 1 + 2i and 3 + 4i: 4 + 6i`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl OpObserver for TracingObserver {
    fn record(&self, op: Operation, a: Complex, b: Complex, result: Complex) {
        tracing::info!("{} {} {} {}: {}", op.verb(), a, op.connective(), b, result);
    }
}

/// Decorator over any `ComplexOps` implementation. Each call delegates to
/// the inner instance first, hands the operands and result to the observer,
/// then returns the result unchanged. Decorators can be stacked; the
/// innermost layer's observer fires first.
#[derive(Debug, Clone)]
pub struct LoggingCalculator<O: ComplexOps, Obs: OpObserver = TracingObserver> {
    inner: O,
    observer: Obs,
}

impl<O: ComplexOps> LoggingCalculator<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            observer: TracingObserver,
        }
    }
}

impl<O: ComplexOps, Obs: OpObserver> LoggingCalculator<O, Obs> {
    pub fn with_observer(inner: O, observer: Obs) -> Self {
        Self { inner, observer }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: ComplexOps, Obs: OpObserver> ComplexOps for LoggingCalculator<O, Obs> {
    fn add(&self, a: Complex, b: Complex) -> Complex {
        let result = self.inner.add(a, b);
        self.observer.record(Operation::Add, a, b, result);
        result
    }

    fn multiply(&self, a: Complex, b: Complex) -> Complex {
        let result = self.inner.multiply(a, b);
        self.observer.record(Operation::Multiply, a, b, result);
        result
    }

    fn divide(&self, a: Complex, b: Complex) -> Complex {
        let result = self.inner.divide(a, b);
        self.observer.record(Operation::Divide, a, b, result);
        result
    }
}

/// The ready-to-use composition: plain calculator wrapped once in the
/// logging decorator.
pub fn logging_calculator() -> LoggingCalculator<Calculator> {
    LoggingCalculator::new(Calculator::new())
}

/// Wraps an arbitrary operation set in a logging decorator, so decorators
/// can be stacked or the underlying implementation swapped without touching
/// call sites.
pub fn with_logging<O: ComplexOps>(inner: O) -> LoggingCalculator<O> {
    LoggingCalculator::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingObserver {
        events: RefCell<Vec<(Operation, Complex, Complex, Complex)>>,
    }

    impl OpObserver for RecordingObserver {
        fn record(&self, op: Operation, a: Complex, b: Complex, result: Complex) {
            self.events.borrow_mut().push((op, a, b, result));
        }
    }

    #[test]
    fn test_decoration_is_transparent() {
        let recorder = RecordingObserver::default();
        let plain = Calculator::new();
        let logged = LoggingCalculator::with_observer(Calculator::new(), &recorder);

        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        assert_eq!(logged.add(a, b), plain.add(a, b));
        assert_eq!(logged.multiply(a, b), plain.multiply(a, b));
        assert_eq!(logged.divide(a, b), plain.divide(a, b));
    }

    #[test]
    fn test_observer_sees_operands_and_result() {
        let recorder = RecordingObserver::default();
        let logged = LoggingCalculator::with_observer(Calculator::new(), &recorder);

        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        let result = logged.multiply(a, b);

        let events = recorder.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], (Operation::Multiply, a, b, result));
    }

    #[test]
    fn test_stacked_decorators_emit_twice() {
        let recorder = RecordingObserver::default();
        let stacked = LoggingCalculator::with_observer(
            LoggingCalculator::with_observer(Calculator::new(), &recorder),
            &recorder,
        );

        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        stacked.add(a, b);

        let events = recorder.events.borrow();
        assert_eq!(events.len(), 2);
        // Both layers report identical operand and result values.
        assert_eq!(events[0], events[1]);
        assert_eq!(events[0].0, Operation::Add);
        assert_eq!(events[0].3, Complex::new(4.0, 6.0));
    }

    #[test]
    fn test_log_line_wording() {
        assert_eq!(Operation::Add.verb(), "Adding");
        assert_eq!(Operation::Add.connective(), "and");
        assert_eq!(Operation::Multiply.verb(), "Multiplying");
        assert_eq!(Operation::Multiply.connective(), "and");
        assert_eq!(Operation::Divide.verb(), "Dividing");
        assert_eq!(Operation::Divide.connective(), "by");
    }

    #[test]
    fn test_factories_compose() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        // Factory result behaves like the plain calculator.
        let calc = logging_calculator();
        assert_eq!(calc.add(a, b), Complex::new(4.0, 6.0));

        // A boxed trait object can be re-wrapped through the same helper.
        let boxed: Box<dyn ComplexOps> = Box::new(Calculator::new());
        let rewrapped = with_logging(boxed);
        assert_eq!(rewrapped.divide(a, b), Complex::new(0.44, 0.08));
    }
}
