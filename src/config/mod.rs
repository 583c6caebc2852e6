pub mod cli;

use crate::core::{ConfigProvider, InputSource, OutputFormat, ToolKind};
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "regex-toolkit")]
#[command(about = "Small regex-backed text tools: email check, date reorder, CSS comments, line scans")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: ToolCommand,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(long, global = true)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ToolCommand {
    /// Check whether a string is shaped like an email address
    Email {
        /// The candidate address
        input: String,
    },

    /// Rewrite the first day/month/year date in the input to month/day/year
    Date {
        /// Inline text to rewrite
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, conflicts_with = "text")]
        file: Option<String>,
    },

    /// Put each /* ... */ comment's delimiters and body on their own lines
    Css {
        #[arg(long, default_value = "test.css")]
        file: String,
    },

    /// Print every line of the file that is only digits
    Digits {
        #[arg(long, default_value = "test.txt")]
        file: String,
    },

    /// Print the domain name of every http(s) URL in the file
    Domains {
        #[arg(long, default_value = "test.txt")]
        file: String,
    },

    /// Count mentions of 20th/21st-century years in the file
    Years {
        #[arg(long, default_value = "test.txt")]
        file: String,
    },
}

impl CliConfig {
    /// The tool and input this invocation asks for.
    pub fn request(&self) -> Result<(ToolKind, InputSource)> {
        let request = match &self.command {
            ToolCommand::Email { input } => (ToolKind::Email, InputSource::Inline(input.clone())),
            ToolCommand::Date { text, file } => {
                let source = match (text, file) {
                    (Some(text), None) => InputSource::Inline(text.clone()),
                    (None, Some(file)) => InputSource::File(file.clone()),
                    _ => {
                        return Err(ToolError::MissingConfigError {
                            field: "text or --file".to_string(),
                        })
                    }
                };
                (ToolKind::Date, source)
            }
            ToolCommand::Css { file } => (ToolKind::Css, InputSource::File(file.clone())),
            ToolCommand::Digits { file } => (ToolKind::Digits, InputSource::File(file.clone())),
            ToolCommand::Domains { file } => (ToolKind::Domains, InputSource::File(file.clone())),
            ToolCommand::Years { file } => (ToolKind::Years, InputSource::File(file.clone())),
        };
        Ok(request)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        match self.request()? {
            (ToolKind::Email, InputSource::Inline(_)) => {
                // Empty input is a legitimate question for the predicate
                Ok(())
            }
            (_, InputSource::Inline(text)) => validate_non_empty_string("text", &text),
            (_, InputSource::File(path)) => validate_path("file", &path),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn format(&self) -> OutputFormat {
        self.format
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_requires_some_input() {
        let config = CliConfig {
            command: ToolCommand::Date {
                text: None,
                file: None,
            },
            verbose: false,
            format: OutputFormat::Text,
            output: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ToolError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_file_subcommands_default_to_script_filenames() {
        let config = CliConfig::try_parse_from(["regex-toolkit", "digits"]).unwrap();
        let (kind, source) = config.request().unwrap();
        assert_eq!(kind, ToolKind::Digits);
        assert_eq!(source, InputSource::File("test.txt".to_string()));

        let config = CliConfig::try_parse_from(["regex-toolkit", "css"]).unwrap();
        let (_, source) = config.request().unwrap();
        assert_eq!(source, InputSource::File("test.css".to_string()));
    }

    #[test]
    fn test_global_flags_parse_after_subcommand() {
        let config =
            CliConfig::try_parse_from(["regex-toolkit", "email", "a@b.io", "--format", "json"])
                .unwrap();
        assert_eq!(ConfigProvider::format(&config), OutputFormat::Json);
    }
}
