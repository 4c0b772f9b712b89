//! Contract violations: programming errors, as opposed to modeled outcomes.

use thiserror::Error;

use crate::Error as OutcomeError;

/// Raised when an outcome is assembled from inconsistent parts, or a value is demanded
/// from an outcome that never had one.
///
/// These never end up inside an outcome. They are returned from the checked paths
/// ([`from_parts`](crate::ValueOutcome::from_parts), [`try_unwrap`](crate::ValueOutcome::try_unwrap))
/// and are the panic message of [`unwrap`](crate::ValueOutcome::unwrap).
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ContractViolation {
    #[error("a successful outcome cannot carry an error (got {0})")]
    SuccessWithError(OutcomeError),

    #[error("a failed outcome must carry an error")]
    FailureWithoutError,

    #[error("a successful outcome must carry a value")]
    MissingValue,

    #[error("cannot extract a value of type `{type_name}` from a failed outcome; error: {error}")]
    NoValue {
        type_name: &'static str,
        error: OutcomeError,
    },
}
