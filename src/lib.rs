#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::calculator::Calculator;
pub use core::decorator::{logging_calculator, with_logging, LoggingCalculator, TracingObserver};
pub use core::engine::CalcEngine;
pub use domain::model::{Complex, Summary};
pub use domain::ports::{ComplexOps, ConfigProvider, OpObserver, Operation};
pub use utils::error::{CalcError, Result};
