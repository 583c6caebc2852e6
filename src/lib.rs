pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, ToolCommand};
pub use core::engine::{ToolEngine, ToolOutcome};
pub use core::pipeline::ToolPipeline;
pub use domain::model::{InputSource, OutputFormat, ToolKind, ToolReport};
pub use utils::error::{Result, ToolError};
