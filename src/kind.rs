//! The four-way classification of an outcome.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the four mutually exclusive shapes an outcome has.
///
/// This is never stored on an outcome, it is always derived from whether the
/// operation succeeded and whether any warnings are attached (see [`OutcomeKind::derive`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutcomeKind {
    /// Succeeded without any warnings.
    HardSuccess,
    /// Succeeded, but with caveats.
    PartialSuccess,
    /// Failed in an anticipated way, with at least one warning attached.
    ControlledError,
    /// Failed with no warnings, i.e. unrecoverable.
    HardFailure,
}

static DESCRIPTIONS: [(OutcomeKind, &str, &str); 4] = [
    (
        OutcomeKind::HardSuccess,
        "HardSuccess",
        "The operation succeeded without any warnings.",
    ),
    (
        OutcomeKind::PartialSuccess,
        "PartialSuccess",
        "The operation succeeded with one or more warnings.",
    ),
    (
        OutcomeKind::ControlledError,
        "ControlledError",
        "The operation failed in an expected way and reported warnings.",
    ),
    (
        OutcomeKind::HardFailure,
        "HardFailure",
        "The operation failed unrecoverably.",
    ),
];

impl OutcomeKind {
    /// Every kind, in declaration order.
    pub const ALL: [OutcomeKind; 4] = [
        OutcomeKind::HardSuccess,
        OutcomeKind::PartialSuccess,
        OutcomeKind::ControlledError,
        OutcomeKind::HardFailure,
    ];

    /// Classifies an outcome from its success flag and warning count.
    ///
    /// ```
    /// use outcome::OutcomeKind;
    ///
    /// assert_eq!(OutcomeKind::derive(true, 0), OutcomeKind::HardSuccess);
    /// assert_eq!(OutcomeKind::derive(true, 2), OutcomeKind::PartialSuccess);
    /// assert_eq!(OutcomeKind::derive(false, 1), OutcomeKind::ControlledError);
    /// assert_eq!(OutcomeKind::derive(false, 0), OutcomeKind::HardFailure);
    /// ```
    pub const fn derive(success: bool, warning_count: usize) -> Self {
        match (success, warning_count) {
            (true, 0) => OutcomeKind::HardSuccess,
            (true, _) => OutcomeKind::PartialSuccess,
            (false, 0) => OutcomeKind::HardFailure,
            (false, _) => OutcomeKind::ControlledError,
        }
    }

    /// Returns `true` for the two successful kinds.
    pub const fn is_success(self) -> bool {
        matches!(self, OutcomeKind::HardSuccess | OutcomeKind::PartialSuccess)
    }

    /// Returns `true` for the two kinds that carry warnings.
    pub const fn has_warnings(self) -> bool {
        matches!(self, OutcomeKind::PartialSuccess | OutcomeKind::ControlledError)
    }

    /// The variant's name, e.g. `"PartialSuccess"`.
    pub fn as_str(self) -> &'static str {
        lookup(self).1
    }

    /// A human readable sentence describing this kind.
    pub fn description(self) -> &'static str {
        lookup(self).2
    }
}

fn lookup(kind: OutcomeKind) -> &'static (OutcomeKind, &'static str, &'static str) {
    // Table order matches declaration order.
    &DESCRIPTIONS[kind as usize]
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
