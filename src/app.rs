use crate::config::{CliConfig, Command};
use crate::core::report::render_value;
use crate::core::ConfigProvider;
use crate::utils::error::CalcError;
use crate::utils::validation::Validate;
use crate::{BatchRunner, Calculator};
use anyhow::Context;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// 執行一次 CLI 指令，結果寫到 `out`
pub fn run<W: Write>(cli: &CliConfig, mut out: W) -> anyhow::Result<()> {
    cli.validate()?;
    let config = cli
        .resolve_config()
        .context("Failed to load configuration")?;

    if let Some((op, operands)) = cli.command.operation() {
        let value = Calculator::apply(op, operands.a, operands.b)?;
        writeln!(out, "{}", render_value(value, config.precision()))?;
        return Ok(());
    }

    if let Command::Batch { input, output } = &cli.command {
        tracing::info!("📁 Evaluating batch file: {}", input);
        let reader = BufReader::new(
            File::open(input).with_context(|| format!("Failed to open input file '{}'", input))?,
        );
        let runner = BatchRunner::new(config)?;

        let report = match output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file '{}'", path))?;
                let report = runner.run(reader, BufWriter::new(file))?;
                writeln!(out, "📁 Report saved to: {}", path)?;
                report
            }
            None => runner.run(reader, &mut out)?,
        };

        if !report.is_clean() {
            tracing::warn!(
                "⚠️ {} of {} rows failed",
                report.failed(),
                report.evaluations.len()
            );
        }
    }

    Ok(())
}

/// Exit code for a failed run; errors outside the crate map to 1.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<CalcError>()
        .map(CalcError::exit_code)
        .unwrap_or(1)
}
