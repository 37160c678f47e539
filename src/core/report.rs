use crate::core::{BatchReport, Evaluation, Operation, OutputFormat};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

pub fn render_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => value.to_string(),
    }
}

/// 單行文字輸出，例如 `2 + 3 = 5`
pub fn render_evaluation(evaluation: &Evaluation, precision: Option<usize>) -> String {
    let symbol = evaluation
        .op
        .parse::<Operation>()
        .map(|op| op.symbol().to_string())
        .unwrap_or_else(|_| evaluation.op.clone());

    let outcome = match (&evaluation.result, &evaluation.error) {
        (Some(value), _) => render_value(*value, precision),
        (None, Some(error)) => format!("error: {}", error),
        (None, None) => "error".to_string(),
    };

    format!("{} {} {} = {}", evaluation.a, symbol, evaluation.b, outcome)
}

const CSV_HEADER: [&str; 6] = ["row", "op", "a", "b", "result", "error"];

#[derive(Serialize)]
struct CsvRow<'a> {
    row: usize,
    op: &'a str,
    a: f64,
    b: f64,
    result: String,
    error: &'a str,
}

pub fn write_report<W: Write>(
    report: &BatchReport,
    mut writer: W,
    format: OutputFormat,
    precision: Option<usize>,
    delimiter: u8,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for evaluation in &report.evaluations {
                writeln!(writer, "{}", render_evaluation(evaluation, precision))?;
            }
        }
        OutputFormat::Csv => {
            // header 手動寫入，空報表也要有欄位列
            let mut csv_writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .has_headers(false)
                .from_writer(&mut writer);
            csv_writer.write_record(CSV_HEADER)?;

            for evaluation in &report.evaluations {
                csv_writer.serialize(CsvRow {
                    row: evaluation.row,
                    op: &evaluation.op,
                    a: evaluation.a,
                    b: evaluation.b,
                    result: evaluation
                        .result
                        .map(|v| render_value(v, precision))
                        .unwrap_or_default(),
                    error: evaluation.error.as_deref().unwrap_or_default(),
                })?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
