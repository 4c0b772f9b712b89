//! Contains a trait extension for logging an outcome's diagnostics while passing it along.
//!
//! This is built on [`log`] because it's the simplest, but due to [`tracing`]'s
//! interoperability, it will also work with it.
//!
//! Like the rest of the crate this is geared towards method chaining, which is why
//! it's a trait and not a set of macros.
//!
//! [`tracing`]: https://docs.rs/tracing

use std::panic::Location;

use log::{log, Level};

use crate::Report;

/// The private base function for all the logging stuff.
///
/// Logs the error of a failed outcome at `level`, then each warning one level lower
/// (or at [`Level::Trace`] if `level` already is), so failures stand out from their caveats.
#[track_caller]
#[allow(clippy::obfuscated_if_else)]
fn log_and_continue<R>(report: R, target: &str, level: Level, user_msg: Option<&str>) -> R
where
    R: Report,
{
    let location = Location::caller();
    let custom_prefix = user_msg.is_some().then_some("; Custom Msg: ").unwrap_or("");
    let custom = user_msg.unwrap_or("");

    if let Some(err) = report.error() {
        log!(
            target: target,
            level,
            "Call location: {}; Kind: {}; Error: {}{}{}",
            location,
            report.kind(),
            err,
            custom_prefix,
            custom,
        );
    }

    let warning_level = match level {
        Level::Error => Level::Warn,
        Level::Warn => Level::Info,
        Level::Info => Level::Debug,
        Level::Debug | Level::Trace => Level::Trace,
    };
    let per_warning = if report.is_success() { level } else { warning_level };
    for warning in report.warnings() {
        log!(
            target: target,
            per_warning,
            "Call location: {}; Kind: {}; Warning: {}{}{}",
            location,
            report.kind(),
            warning,
            custom_prefix,
            custom,
        );
    }

    report
}

/// A blanket impl'd trait extension that lets any [`Report`] log its diagnostics and carry on.
///
/// On a success, warnings are logged at the requested level. On a failure, the error is
/// logged at the requested level and its warnings one level below.
///
/// # Example:
/// ```
/// use outcome::{prelude::*, Warning};
///
/// fn load_profile() -> ValueOutcome<u32> {
///     ValueOutcome::partial_success(7, [Warning::new("StaleCache", "served from a stale cache")])
/// }
///
/// let id = load_profile().warn_and_continue("profile_loader").map(|id| id * 2);
/// assert_eq!(id.unwrap(), 14);
/// ```
///
/// [`tracing`]: https://docs.rs/tracing
pub trait OutcomeLogExt: Report + Sized {
    /// Logs the error (if any) and warnings (if any) without disturbing the outcome.
    #[track_caller]
    fn log_and_continue(self, target: &str, level: Level) -> Self {
        log_and_continue(self, target, level, None)
    }

    /// As [`log_and_continue`](OutcomeLogExt::log_and_continue), at the [`Level::Error`] level.
    #[track_caller]
    #[inline]
    fn error_and_continue(self, target: &str) -> Self {
        log_and_continue(self, target, Level::Error, None)
    }

    /// As [`log_and_continue`](OutcomeLogExt::log_and_continue), at the [`Level::Warn`] level.
    #[track_caller]
    #[inline]
    fn warn_and_continue(self, target: &str) -> Self {
        log_and_continue(self, target, Level::Warn, None)
    }

    #[track_caller]
    #[inline]
    fn debug_and_continue(self, target: &str) -> Self {
        log_and_continue(self, target, Level::Debug, None)
    }

    /// Logs the error (if any) and warnings (if any) without disturbing the outcome.
    ///
    /// As with all `msg` variants, this allows passing a custom message.
    #[track_caller]
    fn log_and_continue_msg(self, target: &str, level: Level, msg: &str) -> Self {
        log_and_continue(self, target, level, Some(msg))
    }

    #[track_caller]
    #[inline]
    fn error_and_continue_msg(self, target: &str, msg: &str) -> Self {
        log_and_continue(self, target, Level::Error, Some(msg))
    }

    #[track_caller]
    #[inline]
    fn warn_and_continue_msg(self, target: &str, msg: &str) -> Self {
        log_and_continue(self, target, Level::Warn, Some(msg))
    }

    #[track_caller]
    #[inline]
    fn debug_and_continue_msg(self, target: &str, msg: &str) -> Self {
        log_and_continue(self, target, Level::Debug, Some(msg))
    }
}

impl<R> OutcomeLogExt for R where R: Report {}
