use crate::config::toml_config::TomlConfig;
use crate::core::{Operation, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "calculator")]
#[command(about = "Floating-point arithmetic from the command line")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Decimal places in rendered results
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// a + b
    Add(Operands),
    /// a - b
    Subtract(Operands),
    /// a * b
    Multiply(Operands),
    /// a / b, fails when b is zero
    Divide(Operands),
    /// Evaluate a CSV file of `op,a,b` rows
    Batch {
        #[arg(long)]
        input: String,

        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct Operands {
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}

impl Command {
    pub fn operation(&self) -> Option<(Operation, Operands)> {
        match self {
            Command::Add(operands) => Some((Operation::Add, *operands)),
            Command::Subtract(operands) => Some((Operation::Subtract, *operands)),
            Command::Multiply(operands) => Some((Operation::Multiply, *operands)),
            Command::Divide(operands) => Some((Operation::Divide, *operands)),
            Command::Batch { .. } => None,
        }
    }
}

impl CliConfig {
    /// 載入配置檔並套用命令列覆寫
    pub fn resolve_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(precision) = self.precision {
            config.output.precision = Some(precision);
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Batch { input, output } = &self.command {
            validate_path("input", input)?;
            if let Some(output) = output {
                validate_path("output", output)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_operation_with_negative_operands() {
        let cli = CliConfig::try_parse_from(["calculator", "subtract", "-2", "3"]).unwrap();
        let (op, operands) = cli.command.operation().unwrap();

        assert_eq!(op, Operation::Subtract);
        assert_eq!(operands.a, -2.0);
        assert_eq!(operands.b, 3.0);
    }

    #[test]
    fn test_parse_batch_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "calculator",
            "batch",
            "--input",
            "ops.csv",
            "--format",
            "json",
            "--precision",
            "2",
        ])
        .unwrap();

        assert!(cli.command.operation().is_none());
        assert!(cli.validate().is_ok());

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.precision(), Some(2));
    }

    #[test]
    fn test_precision_override_is_validated() {
        let cli = CliConfig::try_parse_from(["calculator", "--precision", "99", "add", "1", "2"])
            .unwrap();
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_missing_operand_is_rejected() {
        assert!(CliConfig::try_parse_from(["calculator", "add", "1"]).is_err());
    }
}
