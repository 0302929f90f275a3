//! Exit code constants for the changelog-notify CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, unwritable output)
//! - 2: Invalid configuration (missing or malformed notification settings)
//! - 3: Synthesis failure (resource graph could not be assembled or serialized)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or filesystem problems.
pub const USER_ERROR: i32 = 1;

/// Invalid configuration: a required field is missing or a value is malformed.
pub const INVALID_CONFIG: i32 = 2;

/// Synthesis failure: duplicate logical IDs or serialization errors.
pub const SYNTHESIS_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, INVALID_CONFIG, SYNTHESIS_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_have_stable_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(INVALID_CONFIG, 2);
        assert_eq!(SYNTHESIS_FAILURE, 3);
    }
}
