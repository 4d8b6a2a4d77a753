use crate::core::{Complex, ConfigProvider};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "complex-calc")]
#[command(about = "Complex number arithmetic with optional operation logging")]
pub struct CliConfig {
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub a_real: f64,

    #[arg(long, default_value = "2", allow_hyphen_values = true)]
    pub a_imaginary: f64,

    #[arg(long, default_value = "3", allow_hyphen_values = true)]
    pub b_real: f64,

    #[arg(long, default_value = "4", allow_hyphen_values = true)]
    pub b_imaginary: f64,

    #[arg(long, help = "Print the results as JSON instead of labeled lines")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn lhs(&self) -> Complex {
        Complex::new(self.a_real, self.a_imaginary)
    }

    fn rhs(&self) -> Complex {
        Complex::new(self.b_real, self.b_imaginary)
    }
}
