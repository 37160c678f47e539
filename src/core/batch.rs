use crate::core::calculator::Calculator;
use crate::core::report::write_report;
use crate::core::{BatchReport, ConfigProvider, Evaluation, Operation, OperationRow};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;
use std::io::{Read, Write};

/// Evaluates CSV files of `op,a,b` rows.
pub struct BatchRunner<C: ConfigProvider> {
    config: C,
    delimiter: u8,
}

impl<C: ConfigProvider + Validate> BatchRunner<C> {
    /// Rejects an invalid configuration before any row is read.
    pub fn new(config: C) -> Result<Self> {
        config.validate()?;
        let delimiter = config.delimiter()?;
        Ok(Self { config, delimiter })
    }

    pub fn read_rows<R: Read>(&self, reader: R) -> Result<Vec<OperationRow>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.config.has_headers())
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            let row: OperationRow = record?;
            rows.push(row);
        }

        tracing::debug!("Read {} rows", rows.len());
        Ok(rows)
    }

    pub fn evaluate(&self, rows: Vec<OperationRow>) -> Result<BatchReport> {
        let mut evaluations = Vec::with_capacity(rows.len());

        for (idx, row) in rows.into_iter().enumerate() {
            let line = idx + 1;
            let outcome = row
                .op
                .parse::<Operation>()
                .and_then(|op| Calculator::apply(op, row.a, row.b).map(|value| (op, value)));

            match outcome {
                Ok((op, value)) => {
                    tracing::trace!("row {}: {} {} {} = {}", line, row.a, op.symbol(), row.b, value);
                    evaluations.push(Evaluation::success(line, op, row.a, row.b, value));
                }
                Err(e) if self.config.continue_on_error() => {
                    tracing::warn!("⚠️ Row {} failed: {}", line, e);
                    evaluations.push(Evaluation::failure(line, row.op, row.a, row.b, &e));
                }
                Err(e) => {
                    return Err(CalcError::RowError {
                        row: line,
                        source: Box::new(e),
                    });
                }
            }
        }

        Ok(BatchReport { evaluations })
    }

    pub fn write_report<W: Write>(&self, report: &BatchReport, writer: W) -> Result<()> {
        write_report(
            report,
            writer,
            self.config.output_format(),
            self.config.precision(),
            self.delimiter,
        )
    }

    pub fn run<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<BatchReport> {
        let rows = self.read_rows(reader)?;
        let report = self.evaluate(rows)?;
        self.write_report(&report, writer)?;

        tracing::info!(
            "Batch finished: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        Ok(report)
    }
}
