pub mod batch;
pub mod calculator;
pub mod report;

pub use crate::domain::model::{BatchReport, Evaluation, Operation, OperationRow, OutputFormat};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
