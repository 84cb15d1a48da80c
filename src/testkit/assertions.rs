//! Assertion macros for generator results.
//!
//! - [`crate::assert_result_ok!`] - Assert Result is Ok and extract value
//! - [`crate::assert_error_code!`] - Assert Result failed with a given [`ErrorCode`](crate::errors::ErrorCode)
//! - [`crate::assert_plan_shape!`] - Compare a plan's `(kind, name)` sequence

/// Assert that a Result is Ok and extract the value.
#[macro_export]
macro_rules! assert_result_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!(
                "Expected Ok, got Err: {:?}\n  at {}:{}:{}",
                e,
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

/// Assert that a generator Result failed with `code`, returning the error.
///
/// ```rust
/// use fluentgen::assert_error_code;
/// use fluentgen::errors::{Error, ErrorCode};
///
/// let result: fluentgen::errors::Result<()> = Err(Error::NotRegistered("a.B".into()));
/// let err = assert_error_code!(result, ErrorCode::NOT_REGISTERED);
/// assert!(err.to_string().contains("a.B"));
/// ```
#[macro_export]
macro_rules! assert_error_code {
    ($result:expr, $code:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected error {}, got Ok: {:?}\n  at {}:{}:{}",
                $code,
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => {
                assert_eq!(
                    e.code(),
                    $code,
                    "Expected error {}, got {}: {}\n  at {}:{}:{}",
                    $code,
                    e.code(),
                    e,
                    file!(),
                    line!(),
                    column!()
                );
                e
            }
        }
    };
}

/// Assert the `(kind, name)` sequence of a plan's members.
#[macro_export]
macro_rules! assert_plan_shape {
    ($plan:expr, [$(($kind:ident, $name:expr)),* $(,)?]) => {{
        let actual: Vec<($crate::planner::GeneratedKind, String)> = $plan
            .members
            .iter()
            .map(|m| (m.kind, m.name.clone()))
            .collect();
        let expected: Vec<($crate::planner::GeneratedKind, String)> = vec![
            $(($crate::planner::GeneratedKind::$kind, String::from($name))),*
        ];
        assert_eq!(actual, expected, "plan shape of {}", $plan.source);
    }};
}
