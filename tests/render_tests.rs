//! Header rendering and generate flow tests

use kconfig_gen::config::HEADER_FILE_NAME;
use kconfig_gen::{
    extern_block, generate, render, ConfigModel, GenerateError, OutputDestination,
    ResultReporter, ThreadEntry,
};

#[test]
fn test_default_header_is_byte_exact() {
    let expected = "#ifndef INC_K_CONFIG_H_\n\
                    #define INC_K_CONFIG_H_\n\
                    \n\
                    #define KVERSION \"0.1.0\"\n\
                    \n\
                    extern STACK Thread_0[128];\n\
                    extern STACK Thread_1[128];\n\
                    extern STACK Thread_2[128];\n\
                    \n\
                    #endif /* INC_K_CONFIG_H_ */\n";

    assert_eq!(render(&ConfigModel::new()).unwrap(), expected);
}

#[test]
fn test_single_worker_thread() {
    let mut model = ConfigModel::new();
    model.set_thread_count(1).unwrap();
    model.set_thread_name(0, "Worker").unwrap();
    model.set_stack_size(0, 256).unwrap();

    let header = render(&model).unwrap();

    let externs: Vec<&str> = header.lines().filter(|l| l.starts_with("extern")).collect();
    assert_eq!(externs, vec!["extern STACK Worker[256];"]);
}

#[test]
fn test_extern_lines_follow_table_order() {
    let mut model = ConfigModel::new();
    model.set_thread_count(32).unwrap();
    model.set_stack_size(31, 1024).unwrap();

    let header = render(&model).unwrap();
    let externs: Vec<&str> = header.lines().filter(|l| l.starts_with("extern")).collect();

    assert_eq!(externs.len(), 32);
    assert_eq!(externs[0], "extern STACK Thread_0[128];");
    assert_eq!(externs[31], "extern STACK Thread_31[1024];");
    assert!(header.ends_with("extern STACK Thread_31[1024];\n\n#endif /* INC_K_CONFIG_H_ */\n"));
}

#[test]
fn test_extern_block_has_no_trailing_newline() {
    let threads = vec![
        ThreadEntry { name: "A".to_string(), stack_size: 64 },
        ThreadEntry { name: "B".to_string(), stack_size: 96 },
    ];

    assert_eq!(extern_block(&threads), "extern STACK A[64];\nextern STACK B[96];");
}

#[test]
fn test_invalid_record_is_not_rendered() {
    let model: ConfigModel =
        serde_json::from_str(r#"{"threads": [{"name": "bad name", "stack_size": 128}]}"#).unwrap();

    let err = render(&model).unwrap_err();

    assert_eq!(err.violations.len(), 1);
    assert!(err.to_string().contains("bad name"), "{}", err);
}

#[test]
fn test_unknown_record_keys_are_rejected() {
    let result = serde_json::from_str::<ConfigModel>(
        r#"{"thread_count": 1, "thread_names": ["Worker"], "stack_sizes": [256]}"#,
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("unknown field"), "{}", err);
}

#[test]
fn test_thread_table_record_renders_its_entries() {
    let model: ConfigModel =
        serde_json::from_str(r#"{"threads": [{"name": "Worker", "stack_size": 256}]}"#).unwrap();

    let header = render(&model).unwrap();

    let externs: Vec<&str> = header.lines().filter(|l| l.starts_with("extern")).collect();
    assert_eq!(externs, vec!["extern STACK Worker[256];"]);
}

#[derive(Default)]
struct MemoryDestination {
    files: Vec<(String, String)>,
    fail: bool,
}

impl OutputDestination for MemoryDestination {
    type Error = String;

    fn write_header(&mut self, file_name: &str, contents: &str) -> Result<(), String> {
        if self.fail {
            return Err("disk full".to_string());
        }
        self.files.push((file_name.to_string(), contents.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingReporter {
    successes: Vec<String>,
    failures: Vec<String>,
}

impl ResultReporter for RecordingReporter {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}

#[test]
fn test_generate_writes_rendered_header() {
    let model = ConfigModel::new();
    let mut destination = MemoryDestination::default();
    let mut reporter = RecordingReporter::default();

    generate(&model, &mut destination, &mut reporter).unwrap();

    assert_eq!(destination.files.len(), 1);
    assert_eq!(destination.files[0].0, HEADER_FILE_NAME);
    assert_eq!(destination.files[0].1, render(&model).unwrap());
    assert_eq!(reporter.successes, vec!["Configuration file generated successfully!"]);
    assert!(reporter.failures.is_empty());
}

#[test]
fn test_generate_reports_destination_failure() {
    let mut destination = MemoryDestination { fail: true, ..Default::default() };
    let mut reporter = RecordingReporter::default();

    let err = generate(&ConfigModel::new(), &mut destination, &mut reporter).unwrap_err();

    assert!(matches!(err, GenerateError::Destination(ref e) if e == "disk full"));
    assert_eq!(reporter.failures.len(), 1);
    assert!(reporter.failures[0].contains("disk full"));
    assert!(reporter.successes.is_empty());
}

#[test]
fn test_generate_skips_destination_for_invalid_record() {
    let model: ConfigModel = serde_json::from_str(r#"{"num_priorities": 0}"#).unwrap();
    let mut destination = MemoryDestination::default();
    let mut reporter = RecordingReporter::default();

    let err = generate(&model, &mut destination, &mut reporter).unwrap_err();

    assert!(matches!(err, GenerateError::Precondition(_)));
    assert!(destination.files.is_empty());
    assert_eq!(reporter.failures.len(), 1);
}
