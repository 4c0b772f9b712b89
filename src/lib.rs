//! This crate exists to describe how an operation went when "it worked" or "it didn't" is not the whole story.
//! If you just want to get started jump to [usage](#usage), otherwise read on for the:
//!
//! ## Motivation
//!
//! Rust's [`Result`] is great at saying *whether* something succeeded. What it can't say on its own
//! is that something succeeded *but* had to cut a corner on the way, or that something failed in a way
//! that was entirely anticipated and has a trail of notes explaining why.
//!
//! The usual workaround is to bolt a side channel onto every signature:
//!
//! ```no_run
//! # struct Config;
//! # struct Note;
//! # struct LoadError;
//! fn load_config() -> Result<(Config, Vec<Note>), (LoadError, Vec<Note>)> // ...
//! # { Ok((Config, Vec::new())) }
//! ```
//!
//! Which works, but every caller now has to destructure, merge note lists by hand, and remember
//! to carry them through the error path as well as the happy one.
//!
//! ## Usage
//!
//! This crate models an outcome as one of four kinds ([`OutcomeKind`]):
//!
//! | | no warnings | warnings |
//! |---|---|---|
//! | **succeeded** | [`HardSuccess`](OutcomeKind::HardSuccess) | [`PartialSuccess`](OutcomeKind::PartialSuccess) |
//! | **failed** | [`HardFailure`](OutcomeKind::HardFailure) | [`ControlledError`](OutcomeKind::ControlledError) |
//!
//! There are two outcome types, [`Outcome`] for operations that produce nothing and [`ValueOutcome`]
//! for those that produce a value. Both carry an [`Error`] when they fail and any number of
//! [`Warning`]s either way. The kind is never stored, it is always derived from those.
//!
//! ```
//! use outcome::prelude::*;
//! use outcome::{Error, Warning};
//!
//! fn read_setting(key: &str) -> ValueOutcome<u32> {
//!     match key {
//!         "retries" => ValueOutcome::ok(3),
//!         "timeout" => ValueOutcome::partial_success(
//!             30,
//!             [Warning::new("Defaulted", "timeout missing, using 30s")],
//!         ),
//!         _ => ValueOutcome::fail(Error::new("UnknownKey", format!("no setting named {key}"))),
//!     }
//! }
//!
//! let total = read_setting("retries").bind(|retries| read_setting("timeout").map(|t| t * retries));
//!
//! assert_eq!(total.kind(), OutcomeKind::PartialSuccess);
//! assert_eq!(total.warnings()[0].code(), "Defaulted");
//! assert_eq!(total.unwrap(), 90);
//!
//! let missing = read_setting("colour").map(|c| c + 1);
//! assert_eq!(missing.kind(), OutcomeKind::HardFailure);
//! assert_eq!(missing.error().map(|e| e.code()), Some("UnknownKey"));
//! ```
//!
//! Warnings accumulate as outcomes are chained with [`bind`](ValueOutcome::bind): the result
//! carries the earlier warnings followed by the later ones, in order, duplicates and all.
//! Failures short-circuit [`map`](ValueOutcome::map) and [`bind`](ValueOutcome::bind) while still
//! holding on to the warnings gathered so far.
//!
//! ### Expected and unexpected failures
//!
//! [`Outcome::controlled_error`] is for failures you saw coming: it always carries at least one
//! warning, falling back to [`UNKNOWN_WARNING`] if you don't supply any. [`Outcome::fail`] is for
//! the ones you didn't. Both have `_from` variants that build the [`Error`] out of any
//! [`std::error::Error`]:
//!
//! ```
//! use outcome::prelude::*;
//!
//! fn open(path: &str) -> Outcome {
//!     match std::fs::metadata(path) {
//!         Ok(_) => Outcome::ok(),
//!         Err(io) => Outcome::fail_from(&io),
//!     }
//! }
//!
//! let outcome = open("/definitely/not/here");
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().map(|e| e.code()), Some("Error"));
//! ```
//!
//! Programming mistakes are kept apart from modeled failures. Asking a failed outcome for its value
//! with [`ValueOutcome::unwrap`] panics, and assembling an outcome from inconsistent parts with
//! `from_parts` returns a [`ContractViolation`].
//!
//! ### Side effects and async
//!
//! The `on_*` hooks and `for_each_warning` run an action under their condition and hand the outcome
//! straight back, and every combinator has an `_async` twin taking a closure that returns a future:
//!
//! ```
//! use outcome::{prelude::*, Warning};
//!
//! # async fn fetch(id: u32) -> String { format!("user-{id}") }
//! # async fn run() {
//! let name = ValueOutcome::partial_success(7, [Warning::new("Stale", "served from cache")])
//!     .for_each_warning(|w| eprintln!("{w}"))
//!     .map_async(fetch)
//!     .await;
//!
//! assert_eq!(name.value().map(String::as_str), Some("user-7"));
//! # }
//! ```
#![cfg_attr(
    feature = "log",
    doc = r#"
## Logging

With the `log` feature enabled, every outcome gets [`OutcomeLogExt`](crate::log::OutcomeLogExt),
which logs the error and warnings (if any) and returns the outcome untouched, so it slots into a chain:

```
use outcome::prelude::*;
use outcome::Warning;

let port = ValueOutcome::partial_success(8080, [Warning::new("Defaulted", "no port configured")])
    .warn_and_continue("server_config")
    .unwrap();
# assert_eq!(port, 8080);
```

All of these functions use [`#\[track_caller\]`] so that they can accurately log the file, line, and column
of the calling function in their attached message.

[`#\[track_caller\]`]: https://rustc-dev-guide.rust-lang.org/backend/implicit-caller-location.html
"#
)]

pub mod diagnostic;
pub mod kind;
#[cfg(feature = "log")]
pub mod log;
pub mod outcome;
pub mod report;
#[cfg(feature = "serde")]
mod serialize;
pub mod value_outcome;
pub mod violation;

/// The crate prelude, meaning that for maximum use you probably just want to do
///
/// ```
/// use outcome::prelude::*;
/// ```
///
/// At the top of your module.
pub mod prelude {
    #[cfg(feature = "log")]
    pub use crate::log::OutcomeLogExt;
    pub use crate::{kind::OutcomeKind, outcome::Outcome, report::Report, value_outcome::ValueOutcome};
}

pub use diagnostic::{Error, Warning, UNKNOWN_WARNING};
pub use kind::OutcomeKind;
pub use outcome::Outcome;
pub use report::Report;
pub use value_outcome::ValueOutcome;
pub use violation::ContractViolation;
