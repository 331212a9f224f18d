//! The "Generate Config" flow: validate, render, write, report.
//!
//! Where the header goes and how the user is told about the outcome are up
//! to the caller. The browser front-end downloads the file and shows a
//! status line; tests use in-memory implementations.

use crate::config::HEADER_FILE_NAME;
use crate::error::GenerateError;
use crate::model::ConfigModel;
use crate::render::render;
use log::{info, warn};
use std::fmt;

/// Receives the rendered header.
pub trait OutputDestination {
    type Error: fmt::Display;

    fn write_header(&mut self, file_name: &str, contents: &str) -> Result<(), Self::Error>;
}

/// Tells the user how a generate request ended.
pub trait ResultReporter {
    fn success(&mut self, message: &str);
    fn failure(&mut self, message: &str);
}

/// Validate and render `model`, hand the text to `destination` and report
/// the outcome to `reporter`.
pub fn generate<D, R>(
    model: &ConfigModel,
    destination: &mut D,
    reporter: &mut R,
) -> Result<(), GenerateError<D::Error>>
where
    D: OutputDestination,
    R: ResultReporter,
{
    let result = render(model)
        .map_err(GenerateError::from)
        .and_then(|text| {
            destination
                .write_header(HEADER_FILE_NAME, &text)
                .map_err(GenerateError::Destination)
        });

    match &result {
        Ok(()) => {
            info!(
                "Generated {} with {} thread stack(s)",
                HEADER_FILE_NAME,
                model.thread_count()
            );
            reporter.success("Configuration file generated successfully!");
        }
        Err(e) => {
            warn!("Configuration generation failed: {}", e);
            reporter.failure(&e.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryDestination {
        files: Vec<(String, String)>,
        refuse: bool,
    }

    impl OutputDestination for MemoryDestination {
        type Error = String;

        fn write_header(&mut self, file_name: &str, contents: &str) -> Result<(), String> {
            if self.refuse {
                return Err("disk full".to_string());
            }
            self.files.push((file_name.to_string(), contents.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Log {
        successes: Vec<String>,
        failures: Vec<String>,
    }

    impl ResultReporter for Log {
        fn success(&mut self, message: &str) {
            self.successes.push(message.to_string());
        }

        fn failure(&mut self, message: &str) {
            self.failures.push(message.to_string());
        }
    }

    #[test]
    fn writes_header_and_reports_success() {
        let model = ConfigModel::default();
        let mut dest = MemoryDestination::default();
        let mut log = Log::default();

        generate(&model, &mut dest, &mut log).unwrap();

        assert_eq!(dest.files.len(), 1);
        assert_eq!(dest.files[0].0, "kconfig.h");
        assert!(dest.files[0].1.contains("extern STACK Thread_2[128];"));
        assert_eq!(log.successes.len(), 1);
        assert!(log.failures.is_empty());
    }

    #[test]
    fn invalid_model_is_not_written() {
        let model: ConfigModel = serde_json::from_str(r#"{"num_priorities": 0}"#).unwrap();
        let mut dest = MemoryDestination::default();
        let mut log = Log::default();

        let err = generate(&model, &mut dest, &mut log).unwrap_err();

        assert!(matches!(err, GenerateError::Precondition(_)));
        assert!(dest.files.is_empty());
        assert_eq!(log.failures.len(), 1);
        assert!(log.failures[0].contains("num_priorities"));
    }

    #[test]
    fn destination_failure_is_reported() {
        let model = ConfigModel::default();
        let mut dest = MemoryDestination {
            refuse: true,
            ..Default::default()
        };
        let mut log = Log::default();

        let err = generate(&model, &mut dest, &mut log).unwrap_err();

        assert!(matches!(err, GenerateError::Destination(ref e) if e == "disk full"));
        assert!(log.successes.is_empty());
        assert!(log.failures[0].contains("disk full"));
    }
}
