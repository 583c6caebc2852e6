use crate::domain::model::{OutputFormat, ToolReport};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn format(&self) -> OutputFormat;
    fn verbose(&self) -> bool;
}

/// A tool run in three stages: resolve the input text, apply the pattern,
/// render the report.
pub trait Pipeline {
    fn extract(&self) -> Result<String>;
    fn transform(&self, input: String) -> Result<ToolReport>;
    fn load(&self, report: ToolReport) -> Result<String>;
}
