//! Error taxonomy for connection, compilation, binding and stepping failures.

use thiserror::Error;

/// Failures reported by the engine, tagged with the operation that hit them.
///
/// Every variant carries the engine's numeric result code and its message
/// text at the time of the failure. Statement exhaustion is not an error:
/// `step` reports it as [`Step::Done`](crate::Step) and the bounded drain
/// helpers treat running out of rows as a normal boundary condition.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open database '{path}': {message}")]
    Open {
        path: String,
        code: i32,
        message: String,
    },

    #[error("Failed to prepare statement: {message}")]
    Prepare {
        code: i32,
        message: String,
        sql: String,
    },

    #[error("Failed to bind parameter {slot}: {message}")]
    Bind {
        slot: usize,
        code: i32,
        message: String,
    },

    #[error("Execution failed: {message}")]
    Exec { code: i32, message: String },

    #[error("Step failed with code {code}: {message}")]
    Step { code: i32, message: String },

    #[error("SQL contains an interior NUL byte")]
    NulInSql,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_open_error_message() {
        let err = Error::Open {
            path: "/tmp/missing.sqlite3".to_string(),
            code: 14,
            message: "unable to open database file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to open database '/tmp/missing.sqlite3': unable to open database file"
        );
    }

    #[rstest]
    fn test_bind_error_names_the_slot() {
        let err = Error::Bind {
            slot: 3,
            code: 25,
            message: "column index out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to bind parameter 3: column index out of range"
        );
    }

    #[rstest]
    fn test_step_error_carries_the_code() {
        let err = Error::Step {
            code: 11,
            message: "database disk image is malformed".to_string(),
        };
        assert!(err.to_string().contains("code 11"));
    }
}
