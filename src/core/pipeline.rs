use crate::core::css::CommentSplitter;
use crate::core::dates::DateReorder;
use crate::core::digits::DigitLines;
use crate::core::domains::DomainExtractor;
use crate::core::email::EmailValidator;
use crate::core::years::YearHistogram;
use crate::core::{ConfigProvider, InputSource, OutputFormat, Pipeline, Storage, ToolKind, ToolReport};
use crate::utils::error::{Result, ToolError};

pub struct ToolPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    kind: ToolKind,
    source: InputSource,
}

impl<S: Storage, C: ConfigProvider> ToolPipeline<S, C> {
    pub fn new(storage: S, config: C, kind: ToolKind, source: InputSource) -> Self {
        Self {
            storage,
            config,
            kind,
            source,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ToolPipeline<S, C> {
    fn extract(&self) -> Result<String> {
        match &self.source {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => {
                tracing::debug!("Reading input file: {}", path);
                let bytes = self.storage.read_file(path)?;
                String::from_utf8(bytes).map_err(|e| ToolError::ProcessingError {
                    message: format!("Input file {} is not valid UTF-8: {}", path, e),
                })
            }
        }
    }

    fn transform(&self, input: String) -> Result<ToolReport> {
        let report = match self.kind {
            ToolKind::Email => {
                let accepted = EmailValidator::new()?.is_valid(&input);
                ToolReport::Predicate { input, accepted }
            }
            ToolKind::Date => {
                let (output, replaced) = DateReorder::new()?.reorder(&input);
                ToolReport::Rewrite { output, replaced }
            }
            ToolKind::Css => {
                let (output, replaced) = CommentSplitter::new()?.split(&input);
                ToolReport::Rewrite { output, replaced }
            }
            ToolKind::Digits => ToolReport::Matches {
                matches: DigitLines::new()?.extract(&input),
            },
            ToolKind::Domains => ToolReport::Matches {
                matches: DomainExtractor::new()?.extract(&input),
            },
            ToolKind::Years => ToolReport::Histogram {
                entries: YearHistogram::new()?.count(&input),
            },
        };

        Ok(report)
    }

    fn load(&self, report: ToolReport) -> Result<String> {
        match self.config.format() {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => Ok(render_text(&report)),
        }
    }
}

fn render_text(report: &ToolReport) -> String {
    match report {
        ToolReport::Predicate { accepted, .. } => accepted.to_string(),
        ToolReport::Rewrite { output, .. } => output.clone(),
        ToolReport::Matches { matches } => matches.join("\n"),
        ToolReport::Histogram { entries } => entries
            .iter()
            .map(|e| format!("{} {}", e.value, e.count))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: RefCell::new(HashMap::new()),
            }
        }

        fn put(&self, path: &str, data: &str) {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.as_bytes().to_vec());
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                ToolError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} not found", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        format: OutputFormat,
    }

    impl ConfigProvider for TestConfig {
        fn format(&self) -> OutputFormat {
            self.format
        }

        fn verbose(&self) -> bool {
            false
        }
    }

    fn pipeline(
        kind: ToolKind,
        source: InputSource,
        format: OutputFormat,
    ) -> ToolPipeline<MockStorage, TestConfig> {
        ToolPipeline::new(MockStorage::new(), TestConfig { format }, kind, source)
    }

    #[test]
    fn test_email_pipeline_text_output() {
        let p = pipeline(
            ToolKind::Email,
            InputSource::Inline("test.test@gmail.com".to_string()),
            OutputFormat::Text,
        );
        let input = p.extract().unwrap();
        let report = p.transform(input).unwrap();
        assert_eq!(p.load(report).unwrap(), "true");
    }

    #[test]
    fn test_digits_pipeline_reads_storage() {
        let storage = MockStorage::new();
        storage.put("test.txt", "abc\n123\n45x\n678\n");
        let p = ToolPipeline::new(
            storage,
            TestConfig {
                format: OutputFormat::Text,
            },
            ToolKind::Digits,
            InputSource::File("test.txt".to_string()),
        );
        let input = p.extract().unwrap();
        let report = p.transform(input).unwrap();
        assert_eq!(p.load(report).unwrap(), "123\n678");
    }

    #[test]
    fn test_missing_file_surfaces_io_error() {
        let p = pipeline(
            ToolKind::Digits,
            InputSource::File("absent.txt".to_string()),
            OutputFormat::Text,
        );
        let err = p.extract().unwrap_err();
        assert!(matches!(err, ToolError::IoError(_)));
    }

    #[test]
    fn test_json_report_shape() {
        let p = pipeline(
            ToolKind::Date,
            InputSource::Inline("Today's date is 18/09/2017".to_string()),
            OutputFormat::Json,
        );
        let input = p.extract().unwrap();
        let report = p.transform(input).unwrap();
        let json: serde_json::Value = serde_json::from_str(&p.load(report).unwrap()).unwrap();
        assert_eq!(json["kind"], "rewrite");
        assert_eq!(json["output"], "Today's date is 09/18/2017");
        assert_eq!(json["replaced"], true);
    }
}
