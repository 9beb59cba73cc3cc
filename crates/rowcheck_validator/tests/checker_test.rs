//! End-to-end behaviour of the checker against a recording stub validator.
//!
//! The stub counts its invocations and remembers every value it saw, so the
//! tests can assert not only which defects come back but also which fields
//! were (and were not) handed to a validator.

use pretty_assertions::assert_eq;
use rowcheck_core::{
    CheckError, Column, ColumnError, Defect, RowError, ValidationFailure, ValidationResult,
    Validator,
};
use rowcheck_validator::Checker;
use std::sync::{Arc, Mutex};

/// Test double returning a fixed result and recording the values it was given.
#[derive(Clone)]
struct RecordingValidator {
    rejection: Option<String>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl RecordingValidator {
    fn accepting() -> Self {
        Self {
            rejection: None,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn rejecting(message: &str) -> Self {
        Self {
            rejection: Some(message.to_string()),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Validator for RecordingValidator {
    fn validate(&self, value: &str) -> ValidationResult {
        self.seen.lock().unwrap().push(value.to_string());
        match &self.rejection {
            Some(message) => Err(ValidationFailure::new(message.clone())),
            None => Ok(()),
        }
    }
}

fn semicolon_checker() -> Checker {
    Checker::new(';', true)
}

#[test]
fn test_invalid_number_of_fields_returns_shape_error() {
    let checker = semicolon_checker();
    let csv = "id;name;text\n123;John;\"hello\"\n432;Doe;\"hello2\";122\n";

    let defects = checker.check(csv.as_bytes()).unwrap();

    assert_eq!(defects, vec![Defect::Shape(RowError::new(3, 3, 4))]);
}

#[test]
fn test_header_is_not_validated() {
    let stub = RecordingValidator::accepting();
    let mut checker = semicolon_checker();
    checker.add_column(Column::new(1, stub.clone()));

    let csv = "id;name;text\n123;John;\"hello\"";
    let defects = checker.check(csv.as_bytes()).unwrap();

    assert!(defects.is_empty());
    assert_eq!(stub.calls(), 1);
    assert_eq!(stub.seen(), vec!["John".to_string()]);
}

#[test]
fn test_first_row_is_validated_without_header() {
    let stub = RecordingValidator::accepting();
    let checker = Checker::new(';', false).column(Column::new(1, stub.clone()));

    let csv = "id;name;text\n123;John;\"hello\"\n";
    checker.check(csv.as_bytes()).unwrap();

    assert_eq!(stub.seen(), vec!["name".to_string(), "John".to_string()]);
}

#[test]
fn test_column_validation_returns_content_error() {
    let stub = RecordingValidator::rejecting("Paco");
    let checker = semicolon_checker().column(Column::new(1, stub));

    let csv = "id;name;text\n123;John;\"hello\"";
    let defects = checker.check(csv.as_bytes()).unwrap();

    assert_eq!(
        defects,
        vec![Defect::Content(ColumnError::new(
            2,
            1,
            ValidationFailure::new("Paco")
        ))]
    );
    let error = defects[0].as_content().unwrap();
    assert_eq!(error.line(), 2);
    assert_eq!(error.column(), 1);
    assert_eq!(error.failure().message(), "Paco");
}

#[test]
fn test_two_failing_columns_yield_two_errors() {
    let checker = semicolon_checker()
        .column(Column::new(0, RecordingValidator::rejecting("bad id")))
        .column(Column::new(2, RecordingValidator::rejecting("bad text")));

    let csv = "id;name;text\n123;John;hello\n";
    let defects = checker.check(csv.as_bytes()).unwrap();

    let columns: Vec<usize> = defects
        .iter()
        .filter_map(|d| d.as_content())
        .map(|e| e.column())
        .collect();
    assert_eq!(columns, vec![0, 2]);
    assert!(defects.iter().all(|d| d.line() == 2));
}

#[test]
fn test_same_index_bindings_are_independent() {
    let first = RecordingValidator::rejecting("first");
    let second = RecordingValidator::rejecting("second");
    let checker = semicolon_checker()
        .column(Column::new(1, first.clone()))
        .column(Column::new(1, second.clone()));

    let defects = checker.check("id;name\n1;x\n".as_bytes()).unwrap();

    let messages: Vec<&str> = defects
        .iter()
        .filter_map(|d| d.as_content())
        .map(|e| e.failure().message())
        .collect();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
}

#[test]
fn test_malformed_rows_are_not_content_checked() {
    let stub = RecordingValidator::rejecting("never");
    let checker = semicolon_checker().column(Column::new(0, stub.clone()));

    let csv = "a;b\n1\n1;2;3\n";
    let defects = checker.check(csv.as_bytes()).unwrap();

    assert_eq!(
        defects,
        vec![
            Defect::Shape(RowError::new(2, 2, 1)),
            Defect::Shape(RowError::new(3, 2, 3)),
        ]
    );
    assert_eq!(stub.calls(), 0);
}

#[test]
fn test_processing_continues_after_defects() {
    let checker = Checker::new(',', true).column(Column::new(1, RecordingValidator::rejecting("no")));

    let csv = "k,v\n1,a\n2\n3,c\n4,d,e\n5,f\n";
    let report = checker.check_report(csv.as_bytes()).unwrap();

    let lines: Vec<u64> = report.defects.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![2, 3, 4, 5, 6]);
    assert_eq!(report.shape_count(), 2);
    assert_eq!(report.content_count(), 3);
    assert_eq!(report.stats.rows_read, 6);
    assert_eq!(report.stats.rows_validated, 3);
    assert_eq!(report.stats.rows_skipped, 2);
    assert_eq!(report.stats.validator_calls, 3);
}

#[test]
fn test_header_sets_reference_width() {
    // every data row agrees with each other but not with the header
    let checker = semicolon_checker();
    let defects = checker.check("a;b;c\n1;2\n3;4\n".as_bytes()).unwrap();

    assert_eq!(defects.len(), 2);
    assert!(defects.iter().all(Defect::is_shape));
}

#[test]
fn test_empty_and_header_only_inputs() {
    let stub = RecordingValidator::rejecting("never");
    let checker = semicolon_checker().column(Column::new(0, stub.clone()));

    assert!(checker.check("".as_bytes()).unwrap().is_empty());
    assert!(checker.check("id;name\n".as_bytes()).unwrap().is_empty());
    assert_eq!(stub.calls(), 0);
}

#[test]
fn test_header_only_input_still_checks_layout() {
    let checker = semicolon_checker().column(Column::new(4, RecordingValidator::accepting()));

    assert!(checker.check("".as_bytes()).unwrap().is_empty());
    assert!(matches!(
        checker.check("id;name\n".as_bytes()),
        Err(CheckError::ColumnOutOfRange {
            column: 4,
            width: 2
        })
    ));
}

#[test]
fn test_unreadable_input_returns_no_partial_result() {
    let checker = semicolon_checker().column(Column::new(1, RecordingValidator::rejecting("x")));
    let source: &[u8] = b"id;name\n1;a\n2;\xc3\x28\n";

    let err = checker.check(source).unwrap_err();
    assert!(matches!(err, CheckError::Parse { .. }));
}

#[test]
fn test_crlf_rows_report_physical_lines() {
    let stub = RecordingValidator::rejecting("bad name");
    let checker = semicolon_checker().column(Column::new(1, stub.clone()));

    let defects = checker.check("id;name\r\n1;a\r\n2;b\r\n".as_bytes()).unwrap();

    let lines: Vec<u64> = defects.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![2, 3]);
    assert_eq!(stub.seen(), vec!["a", "b"]);
}

#[test]
fn test_blank_line_before_row_counts_as_physical_line() {
    let checker =
        semicolon_checker().column(Column::new(1, RecordingValidator::rejecting("bad name")));

    let defects = checker.check("id;name\n\n1;a\n".as_bytes()).unwrap();

    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].line(), 3);
}

#[test]
fn test_multiline_field_with_crlf_shifts_later_rows() {
    let checker = semicolon_checker();
    let csv = "id;name;text\r\n1;John;\"two\r\nlines\"\r\n\r\n2;Doe;x;extra\r\n";

    let defects = checker.check(csv.as_bytes()).unwrap();

    assert_eq!(defects, vec![Defect::Shape(RowError::new(5, 3, 4))]);
}

#[test]
fn test_unterminated_quote_is_a_parse_failure() {
    let stub = RecordingValidator::accepting();
    let checker = semicolon_checker().column(Column::new(1, stub.clone()));

    let err = checker
        .check("id;name\n1;\"abc\n2;x\n3;y;z\n".as_bytes())
        .unwrap_err();

    match err {
        CheckError::Parse { line, message } => {
            assert_eq!(line, Some(2));
            assert!(message.contains("never closed"), "got: {}", message);
        }
        other => panic!("Expected a parse failure, got: {:?}", other),
    }
}

#[test]
fn test_escaped_quotes_are_not_malformed() {
    let checker = semicolon_checker();
    let csv = "id;text\n1;\"say \"\"hi\"\"\"\n2;5\"\n";

    assert!(checker.check(csv.as_bytes()).unwrap().is_empty());
}

#[test]
fn test_closure_validators() {
    let checker = semicolon_checker().column(Column::new(0, |value: &str| -> ValidationResult {
        if value.starts_with('A') {
            Ok(())
        } else {
            Err(ValidationFailure::new(format!("'{}' does not start with A", value)))
        }
    }));

    let defects = checker.check("code;n\nA1;1\nB2;2\n".as_bytes()).unwrap();
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0].to_string(), "line 3, column 0: 'B2' does not start with A");
}
