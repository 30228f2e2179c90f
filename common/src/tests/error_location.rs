use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every build error in the workspace carries an ErrorLocation.
/// A rejected inbound is only debuggable if the location points at the failing check.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated
/// or if file/line/column extraction breaks.
#[test]
#[track_caller]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Creating ErrorLocation from the current caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the bracketed `[file:line:column]` Display format.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops the brackets
/// or one of the three coordinates.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed ErrorLocation
    let location = ErrorLocation {
        file: "inbound.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting as string
    let formatted = location.to_string();

    // THEN: Should produce "[file:line:column]"
    assert_eq!(formatted, "[inbound.rs:42:7]");
}

/// **VALUE**: Verifies that `#[track_caller]` gives each call site its own line.
///
/// **BUG THIS CATCHES**: Would catch if locations collapse to the constructor,
/// making every error point at the same line.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper that captures its caller
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing from two consecutive lines
    let first = capture_location();
    let second = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
}

/// **VALUE**: Verifies `here()` reports its caller, not its own body.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from `here()`,
/// which would make every location point into error_location.rs in common/src/error.
#[test]
fn given_here_when_called_from_test_then_reports_test_file() {
    let location = ErrorLocation::here();

    assert!(location.file.contains("tests"));
    assert_eq!(location.file_name(), "error_location.rs");
}

#[test]
fn given_nested_path_when_taking_file_name_then_strips_directories() {
    let location = ErrorLocation {
        file: "backend/inbound-core/src/engine/mod.rs",
        line: 1,
        column: 1,
    };

    assert_eq!(location.file_name(), "mod.rs");
}
