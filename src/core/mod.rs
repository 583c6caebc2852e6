pub mod css;
pub mod dates;
pub mod digits;
pub mod domains;
pub mod email;
pub mod engine;
pub mod pipeline;
pub mod years;

pub use crate::domain::model::{HistogramEntry, InputSource, OutputFormat, ToolKind, ToolReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
