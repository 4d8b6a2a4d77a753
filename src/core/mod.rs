pub mod calculator;
pub mod decorator;
pub mod engine;

pub use crate::domain::model::{Complex, Summary};
pub use crate::domain::ports::{ComplexOps, ConfigProvider, OpObserver, Operation};
pub use crate::utils::error::Result;
