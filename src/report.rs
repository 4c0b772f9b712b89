//! The inspection surface shared by [`Outcome`](crate::Outcome) and
//! [`ValueOutcome`](crate::ValueOutcome), along with the warning bookkeeping both rely on.

use std::fmt;

use crate::{diagnostic::UNKNOWN_WARNING, Error, OutcomeKind, Warning};

/// Anything that reports whether an operation succeeded, and which diagnostics came with it.
///
/// Only [`is_success`](Report::is_success), [`error`](Report::error) and
/// [`warnings`](Report::warnings) need implementing; everything else is derived from them.
pub trait Report {
    /// Returns `true` if the operation succeeded, with or without warnings.
    fn is_success(&self) -> bool;

    /// The error, present exactly when the operation failed.
    fn error(&self) -> Option<&Error>;

    /// The attached warnings, in the order they were raised.
    fn warnings(&self) -> &[Warning];

    /// Returns `true` if the operation failed. Always the negation of [`is_success`](Report::is_success).
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings().is_empty()
    }

    /// The kind of outcome, derived via [`OutcomeKind::derive`].
    fn kind(&self) -> OutcomeKind {
        OutcomeKind::derive(self.is_success(), self.warnings().len())
    }
}

/// Warnings for a warning-bearing shape: whatever was given, or the unknown-warning fallback if nothing was.
pub(crate) fn fill_warnings(warnings: impl IntoIterator<Item = Warning>) -> Vec<Warning> {
    let mut warnings: Vec<Warning> = warnings.into_iter().collect();
    if warnings.is_empty() {
        #[cfg(feature = "log")]
        ::log::debug!(target: "outcome", "no warnings supplied, substituting {}", UNKNOWN_WARNING);
        warnings.push(UNKNOWN_WARNING.clone());
    }
    warnings
}

/// Concatenates warnings: `first` then `then`, keeping duplicates and order.
pub(crate) fn combine_warnings(mut first: Vec<Warning>, then: Vec<Warning>) -> Vec<Warning> {
    first.extend(then);
    first
}

/// Writes the fields common to both outcome renderings.
pub(crate) fn fmt_report<R: Report + ?Sized>(report: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "Success: {}, Failure: {}, Kind: {}, Error: ",
        report.is_success(),
        report.is_failure(),
        report.kind()
    )?;
    match report.error() {
        Some(err) => f.write_str(err.message())?,
        None => f.write_str("<none>")?,
    }
    f.write_str(", Warnings: [")?;
    for (i, warning) in report.warnings().iter().enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        f.write_str(warning.message())?;
    }
    f.write_str("]")
}
