use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_delimiter, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub precision: Option<usize>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub delimiter: String,
    pub has_headers: bool,
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            has_headers: true,
            continue_on_error: true,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.output.precision {
            validate_range("output.precision", precision, 0, MAX_PRECISION)?;
        }
        self.delimiter()?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn precision(&self) -> Option<usize> {
        self.output.precision
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }

    fn delimiter(&self) -> Result<u8> {
        validate_delimiter("batch.delimiter", &self.batch.delimiter)
    }

    fn has_headers(&self) -> bool {
        self.batch.has_headers
    }

    fn continue_on_error(&self) -> bool {
        self.batch.continue_on_error
    }
}
