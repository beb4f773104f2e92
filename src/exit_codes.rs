//! Exit code constants for the df2tables CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Template failure (missing or malformed marker region)
//! - 3: Configuration/dataset mismatch (unknown column, invalid options)
//! - 4: I/O failure while handing the document off

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or input that cannot be read.
pub const USER_ERROR: i32 = 1;

/// Template failure: a marker region could not be located or is malformed.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Configuration failure: options do not match the dataset or are invalid.
pub const CONFIG_FAILURE: i32 = 3;

/// I/O failure: the output document could not be written.
pub const IO_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            TEMPLATE_FAILURE,
            CONFIG_FAILURE,
            IO_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
