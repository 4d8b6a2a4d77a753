use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul};

/// An immutable complex value. Equality is componentwise `f64` equality,
/// so `NaN` components compare unequal as usual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub const ONE: Complex = Complex {
        real: 1.0,
        imaginary: 0.0,
    };

    /// Any `f64` is accepted, finite or not.
    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imaginary)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + self.imaginary * rhs.real,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Division by the zero complex is not guarded; the components come out
    /// non-finite per IEEE-754 rather than as an error.
    fn div(self, rhs: Complex) -> Complex {
        let denominator = rhs.real * rhs.real + rhs.imaginary * rhs.imaginary;
        Complex::new(
            (self.real * rhs.real + self.imaginary * rhs.imaginary) / denominator,
            (self.imaginary * rhs.real - self.real * rhs.imaginary) / denominator,
        )
    }
}

/// The three operations applied to one operand pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub addition: Complex,
    pub multiplication: Complex,
    pub division: Complex,
}

impl Summary {
    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
