// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types for loader operations.

use std::any::Any;

/// An error from a load or reload operation.
///
/// This is an opaque error type that can wrap any underlying error reported
/// by a caller-supplied load or reload function. The original error stays
/// reachable through the source chain; use [`ohno::ErrorExt::find_source`]
/// when a typed inspection is needed.
///
/// # Example
///
/// ```
/// use ladle_bridge::Error;
///
/// let error = Error::from_message("load failed");
/// ```
#[ohno::error]
pub struct Error {}

impl Error {
    /// Creates a new error from any type that can be converted to an error.
    ///
    /// This is the public API for creating loader errors from external crates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladle_bridge::Error;
    ///
    /// let error = Error::from_message("load failed");
    /// ```
    pub fn from_message(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::caused_by(cause)
    }

    /// Creates an error from a panic payload.
    ///
    /// Payloads produced by `panic!` carry a `&str` or `String` message,
    /// which becomes the error's cause; any other payload is reported as an
    /// unnamed panic.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "load function panicked".to_string());
        Self::caused_by(message)
    }
}

/// A specialized [`Result`] type for loader operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    #[test]
    fn debug_contains_cause_message() {
        let error = Error::caused_by("test error message");
        let debug_str = format!("{error:?}");
        assert!(
            debug_str.contains("test error message"),
            "debug output should contain the cause message, got: {debug_str}"
        );
    }

    #[test]
    fn display_contains_cause_message() {
        let error = Error::caused_by("display test");
        let display_str = format!("{error}");
        assert!(
            display_str.contains("display test"),
            "display output should contain the cause message, got: {display_str}"
        );
    }

    #[test]
    fn from_panic_preserves_str_message() {
        let payload = catch_unwind(|| panic!("str payload")).expect_err("closure panics");
        let error = Error::from_panic(payload);
        assert!(format!("{error}").contains("str payload"));
    }

    #[test]
    fn from_panic_preserves_string_message() {
        let boom = "formatted payload".to_string();
        let payload = catch_unwind(AssertUnwindSafe(|| panic!("{boom}"))).expect_err("closure panics");
        let error = Error::from_panic(payload);
        assert!(format!("{error}").contains("formatted payload"));
    }

    #[test]
    fn from_panic_tolerates_opaque_payload() {
        let payload = catch_unwind(|| std::panic::panic_any(42_u64)).expect_err("closure panics");
        let error = Error::from_panic(payload);
        assert!(format!("{error}").contains("panicked"));
    }

    #[test]
    fn result_type_alias_propagates_errors() {
        fn returns_err() -> Result<i32> {
            Err(Error::caused_by("expected failure"))
        }

        let err = returns_err().expect_err("should return an error");
        assert!(format!("{err}").contains("expected failure"));
    }
}
