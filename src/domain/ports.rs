use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    /// Decimal places for rendered results; `None` keeps the shortest representation.
    fn precision(&self) -> Option<usize>;
    fn output_format(&self) -> OutputFormat;
    /// Fails when the configured delimiter is not a single ASCII character.
    fn delimiter(&self) -> Result<u8>;
    fn has_headers(&self) -> bool;
    fn continue_on_error(&self) -> bool;
}
