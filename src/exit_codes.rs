//! Exit code constants for the envlint CLI.
//!
//! - 0: Success (file parsed and passed every schema rule)
//! - 1: User error (unreadable file, bad arguments)
//! - 2: Validation failure (one or more schema violations)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable env file or bad arguments.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the env file violated one or more schema rules.
pub const VALIDATION_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(VALIDATION_FAILURE, 2);
    }
}
