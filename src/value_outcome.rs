//! The value-carrying outcome: an operation that, when it succeeds, produces a `T`.

use std::{any::type_name, fmt, future::Future};

use crate::{
    report::{combine_warnings, fill_warnings, fmt_report},
    ContractViolation, Error, Report, Warning,
};

/// The outcome of an operation that produces a value on success.
///
/// Exactly one of the value or the [`Error`] is present, and any number of [`Warning`]s
/// may ride along either way. Which of the four [`OutcomeKind`](crate::OutcomeKind)s this is
/// follows from those two facts.
///
/// Outcomes are never mutated; every combinator consumes one outcome and builds another.
///
/// ```
/// use outcome::prelude::*;
///
/// let parsed = ValueOutcome::ok("abc").map(|s| s.len());
///
/// assert_eq!(parsed.kind(), OutcomeKind::HardSuccess);
/// assert_eq!(parsed.value(), Some(&3));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ValueOutcome<T> {
    pub(crate) state: Result<T, Error>,
    pub(crate) warnings: Vec<Warning>,
}

impl<T> ValueOutcome<T> {
    pub(crate) fn from_state(state: Result<T, Error>, warnings: Vec<Warning>) -> Self {
        Self { state, warnings }
    }

    /// A hard success holding `value`.
    pub fn ok(value: T) -> Self {
        Self::from_state(Ok(value), Vec::new())
    }

    /// A success holding `value` with caveats. If `warnings` is empty,
    /// [`UNKNOWN_WARNING`](crate::UNKNOWN_WARNING) is attached instead, so this is always
    /// a partial success.
    ///
    /// ```
    /// use outcome::{prelude::*, UNKNOWN_WARNING};
    ///
    /// let outcome = ValueOutcome::partial_success(5, []);
    /// assert_eq!(outcome.kind(), OutcomeKind::PartialSuccess);
    /// assert_eq!(outcome.warnings(), &[UNKNOWN_WARNING.clone()]);
    /// ```
    pub fn partial_success(value: T, warnings: impl IntoIterator<Item = Warning>) -> Self {
        Self::from_state(Ok(value), fill_warnings(warnings))
    }

    /// An anticipated failure. Like [`partial_success`](ValueOutcome::partial_success),
    /// an empty `warnings` is replaced by the unknown-warning fallback.
    pub fn controlled_error(error: Error, warnings: impl IntoIterator<Item = Warning>) -> Self {
        Self::from_state(Err(error), fill_warnings(warnings))
    }

    /// [`controlled_error`](ValueOutcome::controlled_error), with the error built by
    /// [`Error::from_failure`].
    pub fn controlled_error_from<E>(failure: &E, warnings: impl IntoIterator<Item = Warning>) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::controlled_error(Error::from_failure(failure), warnings)
    }

    /// A hard failure: an error and no warnings.
    pub fn fail(error: Error) -> Self {
        Self::from_state(Err(error), Vec::new())
    }

    /// [`fail`](ValueOutcome::fail), with the error built by [`Error::from_failure`].
    pub fn fail_from<E>(failure: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::fail(Error::from_failure(failure))
    }

    /// Assembles an outcome from loose parts, checking that they are consistent.
    ///
    /// The warnings are taken as given (no fallback is substituted). A value passed
    /// alongside a failure is dropped.
    ///
    /// ```
    /// use outcome::{prelude::*, ContractViolation, Error};
    ///
    /// let bad = ValueOutcome::from_parts(true, Some(Error::new("E", "oops")), vec![], Some(1));
    /// assert!(matches!(bad, Err(ContractViolation::SuccessWithError(_))));
    /// ```
    pub fn from_parts(
        success: bool,
        error: Option<Error>,
        warnings: Vec<Warning>,
        value: Option<T>,
    ) -> Result<Self, ContractViolation> {
        let state = match (success, error, value) {
            (true, Some(err), _) => return Err(ContractViolation::SuccessWithError(err)),
            (true, None, None) => return Err(ContractViolation::MissingValue),
            (true, None, Some(value)) => Ok(value),
            (false, Some(err), _) => Err(err),
            (false, None, _) => return Err(ContractViolation::FailureWithoutError),
        };

        Ok(Self::from_state(state, warnings))
    }

    /// A reference to the value, if the operation succeeded.
    pub fn value(&self) -> Option<&T> {
        self.state.as_ref().ok()
    }

    pub fn into_value(self) -> Option<T> {
        self.state.ok()
    }

    /// Returns whether a value was found, along with a copy of it or `T::default()` if not.
    /// Never panics.
    pub fn try_get_value(&self) -> (bool, T)
    where
        T: Clone + Default,
    {
        match &self.state {
            Ok(value) => (true, value.clone()),
            Err(_) => (false, T::default()),
        }
    }

    /// Extracts the value.
    ///
    /// # Panics
    ///
    /// If the outcome is a failure. The message names `T` and the held error.
    /// Use [`try_unwrap`](ValueOutcome::try_unwrap) or [`value`](ValueOutcome::value)
    /// where failure is a possibility.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Extracts the value, or describes why there is none.
    pub fn try_unwrap(self) -> Result<T, ContractViolation> {
        self.state.map_err(|error| ContractViolation::NoValue {
            type_name: type_name::<T>(),
            error,
        })
    }

    /// Drops the warnings and hands back a plain [`Result`], handy for `?` at the edge of
    /// outcome-aware code.
    pub fn into_result(self) -> Result<T, Error> {
        self.state
    }

    /// Transforms the value of a success, keeping the warnings. Failures pass through with
    /// their error and warnings intact, and `f` is never called.
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        ValueOutcome::from_state(self.state.map(f), self.warnings)
    }

    /// Chains another outcome-producing step onto a success.
    ///
    /// The result carries the next step's value or error, and this outcome's warnings
    /// followed by the next step's. A failure short-circuits without calling `f`.
    ///
    /// ```
    /// use outcome::{prelude::*, Warning};
    ///
    /// let first = ValueOutcome::partial_success(2, [Warning::new("W1", "slow path")]);
    /// let both = first.bind(|n| ValueOutcome::partial_success(n * 10, [Warning::new("W2", "stale")]));
    ///
    /// let codes: Vec<_> = both.warnings().iter().map(|w| w.code()).collect();
    /// assert_eq!(codes, ["W1", "W2"]);
    /// assert_eq!(both.unwrap(), 20);
    /// ```
    pub fn bind<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> ValueOutcome<U>,
    {
        match self.state {
            Ok(value) => {
                let next = f(value);
                ValueOutcome::from_state(next.state, combine_warnings(self.warnings, next.warnings))
            }
            Err(err) => ValueOutcome::from_state(Err(err), self.warnings),
        }
    }

    /// Collapses the outcome into an `R`, running exactly one of the two branches.
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.state {
            Ok(value) => on_success(value),
            Err(err) => on_failure(err),
        }
    }

    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self.state {
            f(value);
        }
        self
    }

    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Err(err) = &self.state {
            f(err);
        }
        self
    }

    /// Runs `f` over the full warning list, if there are any warnings.
    pub fn on_warnings<F>(self, f: F) -> Self
    where
        F: FnOnce(&[Warning]),
    {
        if !self.warnings.is_empty() {
            f(&self.warnings);
        }
        self
    }

    /// Runs `f` once per warning, in order.
    pub fn for_each_warning<F>(self, f: F) -> Self
    where
        F: FnMut(&Warning),
    {
        self.warnings.iter().for_each(f);
        self
    }

    /// [`map`](ValueOutcome::map) with an asynchronous transformation.
    pub async fn map_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.state {
            Ok(value) => ValueOutcome::from_state(Ok(f(value).await), self.warnings),
            Err(err) => ValueOutcome::from_state(Err(err), self.warnings),
        }
    }

    /// [`bind`](ValueOutcome::bind) with an asynchronous next step.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ValueOutcome<U>>,
    {
        match self.state {
            Ok(value) => {
                let next = f(value).await;
                ValueOutcome::from_state(next.state, combine_warnings(self.warnings, next.warnings))
            }
            Err(err) => ValueOutcome::from_state(Err(err), self.warnings),
        }
    }

    pub async fn match_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.state {
            Ok(value) => on_success(value).await,
            Err(err) => on_failure(err).await,
        }
    }

    /// Asynchronous [`on_success`](ValueOutcome::on_success). The action gets its own
    /// clone of the value so its future does not borrow the outcome.
    pub async fn on_success_async<F, Fut>(self, f: F) -> Self
    where
        T: Clone,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Ok(value) = &self.state {
            f(value.clone()).await;
        }
        self
    }

    pub async fn on_failure_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(err) = &self.state {
            f(err.clone()).await;
        }
        self
    }

    pub async fn on_warnings_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Vec<Warning>) -> Fut,
        Fut: Future<Output = ()>,
    {
        if !self.warnings.is_empty() {
            f(self.warnings.clone()).await;
        }
        self
    }

    /// Asynchronous [`for_each_warning`](ValueOutcome::for_each_warning). Each warning's
    /// action completes before the next one starts.
    pub async fn for_each_warning_async<F, Fut>(self, mut f: F) -> Self
    where
        F: FnMut(Warning) -> Fut,
        Fut: Future<Output = ()>,
    {
        for warning in &self.warnings {
            f(warning.clone()).await;
        }
        self
    }
}

impl<T> Report for ValueOutcome<T> {
    fn is_success(&self) -> bool {
        self.state.is_ok()
    }

    fn error(&self) -> Option<&Error> {
        self.state.as_ref().err()
    }

    fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

impl<T> From<Result<T, Error>> for ValueOutcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        Self::from_state(result, Vec::new())
    }
}

impl<T: fmt::Display> fmt::Display for ValueOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_report(self, f)?;
        match &self.state {
            Ok(value) => write!(f, ", Value: {value}"),
            Err(_) => f.write_str(", Value: <none>"),
        }
    }
}
