//! Stable machine-readable error codes.
//!
//! Every error surfaced by the service layer maps to an `E_*` code so that
//! callers (the CLI today, an HTTP surface later) can branch on a fixed
//! string instead of parsing messages.

pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    /// Whether the same call might succeed if repeated unchanged.
    fn retryable(&self) -> bool {
        false
    }
}
