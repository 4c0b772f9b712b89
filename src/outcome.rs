//! The value-less outcome: did the operation succeed, and what was reported along the way.

use std::{fmt, future::Future};

use crate::{
    report::{combine_warnings, fill_warnings, fmt_report},
    ContractViolation, Error, Report, ValueOutcome, Warning,
};

/// The outcome of an operation that produces nothing beyond success or failure.
///
/// This mirrors [`ValueOutcome`] minus the value, and the combinators that would need one
/// take no argument instead. [`map`](Outcome::map) and [`bind_value`](Outcome::bind_value)
/// bridge into the value-carrying family.
///
/// ```
/// use outcome::{prelude::*, Error, Warning};
///
/// let saved = Outcome::controlled_error(
///     Error::new("E1", "bad"),
///     [Warning::new("W1", "minor")],
/// );
///
/// assert!(saved.is_failure());
/// assert_eq!(saved.kind(), OutcomeKind::ControlledError);
/// assert_eq!(saved.error().map(|e| e.code()), Some("E1"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Outcome {
    state: Result<(), Error>,
    warnings: Vec<Warning>,
}

impl Outcome {
    fn from_state(state: Result<(), Error>, warnings: Vec<Warning>) -> Self {
        Self { state, warnings }
    }

    /// A hard success.
    pub fn ok() -> Self {
        Self::from_state(Ok(()), Vec::new())
    }

    /// A success with caveats. An empty `warnings` is replaced by
    /// [`UNKNOWN_WARNING`](crate::UNKNOWN_WARNING).
    pub fn partial_success(warnings: impl IntoIterator<Item = Warning>) -> Self {
        Self::from_state(Ok(()), fill_warnings(warnings))
    }

    /// An anticipated failure. An empty `warnings` is replaced by
    /// [`UNKNOWN_WARNING`](crate::UNKNOWN_WARNING).
    pub fn controlled_error(error: Error, warnings: impl IntoIterator<Item = Warning>) -> Self {
        Self::from_state(Err(error), fill_warnings(warnings))
    }

    pub fn controlled_error_from<E>(failure: &E, warnings: impl IntoIterator<Item = Warning>) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::controlled_error(Error::from_failure(failure), warnings)
    }

    /// A hard failure.
    pub fn fail(error: Error) -> Self {
        Self::from_state(Err(error), Vec::new())
    }

    pub fn fail_from<E>(failure: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::fail(Error::from_failure(failure))
    }

    /// Assembles an outcome from loose parts, rejecting a success with an error or a
    /// failure without one. The warnings are taken as given.
    pub fn from_parts(
        success: bool,
        error: Option<Error>,
        warnings: Vec<Warning>,
    ) -> Result<Self, ContractViolation> {
        let state = match (success, error) {
            (true, None) => Ok(()),
            (true, Some(err)) => return Err(ContractViolation::SuccessWithError(err)),
            (false, Some(err)) => Err(err),
            (false, None) => return Err(ContractViolation::FailureWithoutError),
        };

        Ok(Self::from_state(state, warnings))
    }

    pub fn into_result(self) -> Result<(), Error> {
        self.state
    }

    /// Produces a value on success, keeping the warnings. Failures pass through untouched.
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce() -> U,
    {
        ValueOutcome::from_state(self.state.map(|()| f()), self.warnings)
    }

    /// Chains another step onto a success, concatenating this outcome's warnings with the
    /// next step's. A failure short-circuits without calling `f`.
    pub fn bind<F>(self, f: F) -> Outcome
    where
        F: FnOnce() -> Outcome,
    {
        match self.state {
            Ok(()) => {
                let next = f();
                Outcome::from_state(next.state, combine_warnings(self.warnings, next.warnings))
            }
            Err(err) => Outcome::from_state(Err(err), self.warnings),
        }
    }

    /// [`bind`](Outcome::bind) into a step that produces a value.
    ///
    /// ```
    /// use outcome::{prelude::*, Warning};
    ///
    /// let loaded = Outcome::partial_success([Warning::new("W1", "cold cache")])
    ///     .bind_value(|| ValueOutcome::ok(12));
    ///
    /// assert_eq!(loaded.kind(), OutcomeKind::PartialSuccess);
    /// assert_eq!(loaded.unwrap(), 12);
    /// ```
    pub fn bind_value<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce() -> ValueOutcome<U>,
    {
        match self.state {
            Ok(()) => {
                let next = f();
                ValueOutcome::from_state(next.state, combine_warnings(self.warnings, next.warnings))
            }
            Err(err) => ValueOutcome::from_state(Err(err), self.warnings),
        }
    }

    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> R,
        F: FnOnce(Error) -> R,
    {
        match self.state {
            Ok(()) => on_success(),
            Err(err) => on_failure(err),
        }
    }

    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.state.is_ok() {
            f();
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

    pub fn on_warnings<F>(self, f: F) -> Self
    where
        F: FnOnce(&[Warning]),
    {
        if !self.warnings.is_empty() {
            f(&self.warnings);
        }
        self
    }

    pub fn for_each_warning<F>(self, f: F) -> Self
    where
        F: FnMut(&Warning),
    {
        self.warnings.iter().for_each(f);
        self
    }

    pub async fn map_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = U>,
    {
        match self.state {
            Ok(()) => ValueOutcome::from_state(Ok(f().await), self.warnings),
            Err(err) => ValueOutcome::from_state(Err(err), self.warnings),
        }
    }

    pub async fn bind_async<F, Fut>(self, f: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        match self.state {
            Ok(()) => {
                let next = f().await;
                Outcome::from_state(next.state, combine_warnings(self.warnings, next.warnings))
            }
            Err(err) => Outcome::from_state(Err(err), self.warnings),
        }
    }

    pub async fn bind_value_async<U, F, Fut>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ValueOutcome<U>>,
    {
        match self.state {
            Ok(()) => {
                let next = f().await;
                ValueOutcome::from_state(next.state, combine_warnings(self.warnings, next.warnings))
            }
            Err(err) => ValueOutcome::from_state(Err(err), self.warnings),
        }
    }

    pub async fn match_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce() -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.state {
            Ok(()) => on_success().await,
            Err(err) => on_failure(err).await,
        }
    }

    pub async fn on_success_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.state.is_ok() {
            f().await;
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

    /// Visits each warning in order, awaiting every action before starting the next.
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

impl Report for Outcome {
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

impl From<Result<(), Error>> for Outcome {
    fn from(result: Result<(), Error>) -> Self {
        Self::from_state(result, Vec::new())
    }
}

/// Forgets the value, keeping the success flag, error and warnings.
impl<T> From<ValueOutcome<T>> for Outcome {
    fn from(outcome: ValueOutcome<T>) -> Self {
        Self::from_state(outcome.state.map(|_| ()), outcome.warnings)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_report(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        sync::{Arc, Mutex},
    };

    use super::*;
    use crate::{OutcomeKind, UNKNOWN_WARNING};

    fn w(code: &'static str) -> Warning {
        Warning::new(code, format!("{code} message"))
    }

    #[test]
    fn factories_derive_the_expected_kind() {
        let err = Error::new("E", "e");
        let cases = [
            (Outcome::ok(), OutcomeKind::HardSuccess),
            (Outcome::partial_success([w("W")]), OutcomeKind::PartialSuccess),
            (Outcome::controlled_error(err.clone(), [w("W")]), OutcomeKind::ControlledError),
            (Outcome::fail(err), OutcomeKind::HardFailure),
        ];

        for (outcome, kind) in cases {
            assert_eq!(outcome.kind(), kind);
            assert_eq!(outcome.is_success(), !outcome.is_failure());
            assert_eq!(outcome.is_failure(), outcome.error().is_some());
        }
    }

    #[test]
    fn missing_warnings_fall_back_to_unknown() {
        assert_eq!(Outcome::partial_success([]).warnings(), &[UNKNOWN_WARNING.clone()]);
        assert_eq!(
            Outcome::controlled_error(Error::new("E", "e"), []).warnings(),
            &[UNKNOWN_WARNING.clone()]
        );
    }

    #[test]
    fn failure_object_overloads() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "too slow");

        let failed = Outcome::fail_from(&io);
        assert_eq!(failed.error(), Some(&Error::new("Error", "too slow")));
        assert_eq!(failed.kind(), OutcomeKind::HardFailure);

        let controlled = Outcome::controlled_error_from(&io, [w("W1")]);
        assert_eq!(controlled.warnings(), &[w("W1")]);
        assert_eq!(controlled.kind(), OutcomeKind::ControlledError);
    }

    #[test]
    fn from_parts_checks_consistency() {
        let err = Error::new("E", "e");
        assert_eq!(
            Outcome::from_parts(true, Some(err.clone()), vec![]),
            Err(ContractViolation::SuccessWithError(err.clone()))
        );
        assert_eq!(
            Outcome::from_parts(false, None, vec![w("W")]),
            Err(ContractViolation::FailureWithoutError)
        );
        assert_eq!(
            Outcome::from_parts(false, Some(err.clone()), vec![w("W")]),
            Ok(Outcome::controlled_error(err, [w("W")]))
        );
        assert_eq!(Outcome::from_parts(true, None, vec![]), Ok(Outcome::ok()));
    }

    #[test]
    fn map_bridges_into_value_outcome() {
        let mapped = Outcome::partial_success([w("W1")]).map(|| "built");
        assert_eq!(mapped, ValueOutcome::partial_success("built", [w("W1")]));

        let called = Cell::new(false);
        let failed = Outcome::fail(Error::new("E", "e")).map(|| called.set(true));
        assert!(!called.get());
        assert_eq!(failed.error(), Some(&Error::new("E", "e")));
    }

    #[test]
    fn bind_concatenates_and_short_circuits() {
        let bound = Outcome::partial_success([w("W1")]).bind(|| Outcome::partial_success([w("W2")]));
        assert_eq!(bound.warnings(), &[w("W1"), w("W2")]);
        assert_eq!(bound.kind(), OutcomeKind::PartialSuccess);

        let downstream = Outcome::ok().bind(|| Outcome::controlled_error(Error::new("E2", "x"), [w("W2")]));
        assert_eq!(downstream.error().map(Error::code), Some("E2"));
        assert_eq!(downstream.kind(), OutcomeKind::ControlledError);

        let called = Cell::new(false);
        let short = Outcome::controlled_error(Error::new("E", "e"), [w("W1")]).bind(|| {
            called.set(true);
            Outcome::ok()
        });
        assert!(!called.get());
        assert_eq!(short, Outcome::controlled_error(Error::new("E", "e"), [w("W1")]));
    }

    #[test]
    fn bind_value_combines_warnings() {
        let bound = Outcome::partial_success([w("W1")])
            .bind_value(|| ValueOutcome::partial_success(1, [w("W2")]));
        assert_eq!(bound.warnings(), &[w("W1"), w("W2")]);
        assert_eq!(bound.value(), Some(&1));

        let failed = Outcome::fail(Error::new("E", "e")).bind_value(|| ValueOutcome::ok(1));
        assert_eq!(failed.kind(), OutcomeKind::HardFailure);
    }

    #[test]
    fn match_runs_exactly_one_branch() {
        assert_eq!(Outcome::ok().match_with(|| "yes", |_| "no"), "yes");
        assert_eq!(
            Outcome::fail(Error::new("E", "e")).match_with(|| String::from("yes"), |e| e.code().to_string()),
            "E"
        );
    }

    #[test]
    fn hooks_return_the_original() {
        let mut events = Vec::new();
        let original = Outcome::controlled_error(Error::new("E", "e"), [w("W1"), w("W2")]);
        let back = original
            .clone()
            .on_success(|| events.push("success".to_string()))
            .on_failure(|err| events.push(err.code().to_string()))
            .on_warnings(|ws| events.push(ws.len().to_string()))
            .for_each_warning(|w| events.push(w.code().to_string()));

        assert_eq!(back, original);
        assert_eq!(events, ["E", "2", "W1", "W2"]);
    }

    #[test]
    fn hooks_skip_when_their_predicate_is_false() {
        let mut events = Vec::new();

        let success = Outcome::ok();
        let back = success
            .clone()
            .on_failure(|err| events.push(err.code().to_string()))
            .on_warnings(|ws| events.push(ws.len().to_string()))
            .for_each_warning(|w| events.push(w.code().to_string()));
        assert_eq!(back, success);
        assert_eq!(back.kind(), OutcomeKind::HardSuccess);

        let failure = Outcome::fail(Error::new("E", "e"));
        let back = failure
            .clone()
            .on_success(|| events.push("success".to_string()))
            .on_warnings(|ws| events.push(ws.len().to_string()))
            .for_each_warning(|w| events.push(w.code().to_string()));
        assert_eq!(back, failure);
        assert_eq!(back.kind(), OutcomeKind::HardFailure);

        assert!(events.is_empty());
    }

    #[test]
    fn conversions() {
        let from_value: Outcome = ValueOutcome::partial_success(3, [w("W")]).into();
        assert_eq!(from_value, Outcome::partial_success([w("W")]));

        let from_result: Outcome = Err(Error::new("E", "e")).into();
        assert_eq!(from_result, Outcome::fail(Error::new("E", "e")));
        assert_eq!(Outcome::ok().into_result(), Ok(()));
    }

    #[test]
    fn display_renders_none_marker() {
        assert_eq!(
            Outcome::ok().to_string(),
            "Success: true, Failure: false, Kind: HardSuccess, Error: <none>, Warnings: []"
        );
        assert_eq!(
            Outcome::controlled_error(Error::new("E", "bad"), [Warning::new("W", "minor")]).to_string(),
            "Success: false, Failure: true, Kind: ControlledError, Error: bad, Warnings: [minor]"
        );
    }

    #[tokio::test]
    async fn async_combinators() {
        let mapped = Outcome::partial_success([w("W1")]).map_async(|| async { 5 }).await;
        assert_eq!(mapped, ValueOutcome::partial_success(5, [w("W1")]));

        let bound = Outcome::partial_success([w("W1")])
            .bind_async(|| async { Outcome::partial_success([w("W2")]) })
            .await;
        assert_eq!(bound.warnings(), &[w("W1"), w("W2")]);

        let valued = Outcome::ok()
            .bind_value_async(|| async { ValueOutcome::<u8>::fail(Error::new("E", "e")) })
            .await;
        assert_eq!(valued.kind(), OutcomeKind::HardFailure);
        assert!(valued.value().is_none());

        let answer = Outcome::fail(Error::new("E", "e"))
            .match_async(|| async { 0 }, |_| async { 1 })
            .await;
        assert_eq!(answer, 1);
    }

    #[tokio::test]
    async fn async_hooks() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let original = Outcome::partial_success([w("W1"), w("W2")]);

        let back = original
            .clone()
            .on_success_async(|| {
                let log = Arc::clone(&log);
                async move { log.lock().unwrap().push("success".to_string()) }
            })
            .await
            .on_failure_async(|err| {
                let log = Arc::clone(&log);
                async move { log.lock().unwrap().push(err.to_string()) }
            })
            .await
            .on_warnings_async(|ws| {
                let log = Arc::clone(&log);
                async move { log.lock().unwrap().push(ws.len().to_string()) }
            })
            .await
            .for_each_warning_async(|warning| {
                let log = Arc::clone(&log);
                async move {
                    tokio::task::yield_now().await;
                    log.lock().unwrap().push(warning.code().to_string());
                }
            })
            .await;

        assert_eq!(back, original);
        assert_eq!(*log.lock().unwrap(), ["success", "2", "W1", "W2"]);
    }
}
