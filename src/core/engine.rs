use crate::core::{Pipeline, ToolReport};
use crate::utils::error::Result;

/// Rendered output of a run plus the typed report it came from, so callers
/// can inspect the result (e.g. for the predicate's exit code) without
/// re-parsing the rendering.
#[derive(Debug)]
pub struct ToolOutcome {
    pub rendered: String,
    pub report: ToolReport,
}

pub struct ToolEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ToolEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ToolOutcome> {
        tracing::debug!("Resolving input");
        let input = self.pipeline.extract()?;
        tracing::debug!("Input resolved ({} bytes)", input.len());

        let report = self.pipeline.transform(input)?;
        tracing::info!("Pattern applied, {} match(es)", report.match_count());

        let rendered = self.pipeline.load(report.clone())?;
        Ok(ToolOutcome { rendered, report })
    }
}
