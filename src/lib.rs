#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::TomlConfig;
pub use core::{batch::BatchRunner, calculator::Calculator, Operation, OutputFormat};
pub use utils::error::{CalcError, Result};
