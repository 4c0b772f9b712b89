//! The diagnostic records attached to outcomes: [`Error`] for failures and [`Warning`]
//! for anything non-fatal worth reporting.

use std::{any::type_name, borrow::Cow, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fallback warning substituted whenever a partial success or controlled error
/// is built without any explicit warnings.
///
/// Reuse this rather than building an equal instance by hand.
pub static UNKNOWN_WARNING: Warning = Warning {
    code: Cow::Borrowed("UnknownWarning"),
    message: Cow::Borrowed("An unspecified warning was raised."),
};

/// The fatal diagnostic carried by every failed outcome.
///
/// Equality is structural: two errors with the same code and message are equal.
///
/// ```
/// use outcome::Error;
///
/// let err = Error::new("E1", "bad input");
/// assert_eq!(err.code(), "E1");
/// assert_eq!(err, Error::new("E1", String::from("bad input")));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Error {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Builds an error out of an unexpected failure: the code is the failure's type
    /// name (without its module path) and the message is its [`Display`](fmt::Display) output.
    ///
    /// ```
    /// use outcome::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    /// let err = Error::from_failure(&io);
    ///
    /// assert_eq!(err.code(), "Error");
    /// assert_eq!(err.message(), "no such file");
    /// ```
    pub fn from_failure<E>(failure: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(short_type_name(type_name::<E>()), failure.to_string())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

/// A non-fatal diagnostic. Successful and failed outcomes alike may carry any number of these.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Warning {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Warning {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this is structurally the [`UNKNOWN_WARNING`] fallback.
    pub fn is_unknown(&self) -> bool {
        *self == UNKNOWN_WARNING
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Strips generic arguments, trait object bounds and the module path, so both
/// `std::io::error::Error` and `dyn core::error::Error + Send + Sync` become `Error`.
fn short_type_name(full: &str) -> &str {
    let base = full.strip_prefix("dyn ").unwrap_or(full);
    let base = base.split(" + ").next().unwrap_or(base);
    let base = base.split('<').next().unwrap_or(base);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error as ThisError;

    #[derive(Debug, ThisError)]
    #[error("the cache is unreachable")]
    struct CacheDown;

    #[derive(Debug, ThisError)]
    #[error("wrapped: {0}")]
    struct Wrapper<T: fmt::Debug + fmt::Display>(T);

    #[test]
    fn structural_equality() {
        assert_eq!(Error::new("E", "m"), Error::new("E".to_string(), "m".to_string()));
        assert_ne!(Error::new("E", "m"), Error::new("E", "other"));
        assert_ne!(Warning::new("W", "m"), Warning::new("X", "m"));
    }

    #[test]
    fn from_failure_uses_short_type_name_and_message() {
        let err = Error::from_failure(&CacheDown);
        assert_eq!(err.code(), "CacheDown");
        assert_eq!(err.message(), "the cache is unreachable");
    }

    #[test]
    fn from_failure_drops_generic_arguments() {
        let err = Error::from_failure(&Wrapper(5));
        assert_eq!(err.code(), "Wrapper");
        assert_eq!(err.message(), "wrapped: 5");
    }

    #[test]
    fn from_failure_names_trait_objects_by_their_trait() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = "connection reset".into();
        let err = Error::from_failure(&*boxed);
        assert_eq!(err.code(), "Error");
        assert_eq!(err.message(), "connection reset");

        let plain: &dyn std::error::Error = &CacheDown;
        let err = Error::from_failure(plain);
        assert_eq!(err.code(), "Error");
        assert_eq!(err.message(), "the cache is unreachable");
    }

    #[test]
    fn short_type_name_strips_paths_generics_and_bounds() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(short_type_name("my_crate::Wrapper<alloc::string::String>"), "Wrapper");
        assert_eq!(
            short_type_name("dyn core::error::Error + core::marker::Send + core::marker::Sync"),
            "Error"
        );
        assert_eq!(short_type_name("CacheDown"), "CacheDown");
    }

    #[test]
    fn unknown_warning_is_structurally_comparable() {
        let rebuilt = Warning::new("UnknownWarning", UNKNOWN_WARNING.message().to_string());
        assert_eq!(rebuilt, UNKNOWN_WARNING);
        assert!(rebuilt.is_unknown());
        assert!(!Warning::new("W1", "minor").is_unknown());
    }

    #[test]
    fn display_shows_code_and_message() {
        assert_eq!(Error::new("E1", "bad").to_string(), "E1: bad");
        assert_eq!(Warning::new("W1", "minor").to_string(), "W1: minor");
    }
}
