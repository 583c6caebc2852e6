use clap::Parser;
use regex_toolkit::core::Storage;
use regex_toolkit::utils::{logger, validation::Validate};
use regex_toolkit::{CliConfig, LocalStorage, ToolEngine, ToolPipeline, ToolReport};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting regex-toolkit CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    // request() cannot fail once validate() has passed
    let (kind, source) = match config.request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    let storage = LocalStorage::new(".".to_string());
    let output_path = config.output.clone();
    let pipeline = ToolPipeline::new(LocalStorage::new(".".to_string()), config, kind, source);
    let engine = ToolEngine::new(pipeline);

    match engine.run() {
        Ok(outcome) => {
            match &output_path {
                Some(path) => {
                    if let Err(e) = storage.write_file(path, outcome.rendered.as_bytes()) {
                        tracing::error!("Failed to write output file: {}", e);
                        eprintln!("{}", e.user_friendly_message());
                        std::process::exit(1);
                    }
                    tracing::info!("Output saved to: {}", path);
                }
                None => println!("{}", outcome.rendered),
            }

            // The predicate is scriptable: a rejected input exits non-zero
            if let ToolReport::Predicate {
                accepted: false, ..
            } = outcome.report
            {
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(
                "Tool run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                regex_toolkit::utils::error::ErrorSeverity::Low => 0,
                regex_toolkit::utils::error::ErrorSeverity::Medium => 2,
                regex_toolkit::utils::error::ErrorSeverity::High => 1,
                regex_toolkit::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
