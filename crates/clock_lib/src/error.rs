//! A module containing the [`ClockError`] enum, which gathers the errors of this crate.

use crate::{codec::FormatError, projection::UnknownWidget, validate::RangeError};

/// Represents any type of error that could happen when using this crate.
#[derive(thiserror::Error, Debug)]
#[rustfmt::skip]
pub enum ClockError {
    // --------
    // --- Input errors
    // --------

    /// The custom time text doesn't respect the `HH:MM:SS AM|PM` form.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A field of the custom time is out of its range.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// The widget name doesn't match any clock.
    #[error(transparent)]
    UnknownWidget(#[from] UnknownWidget),

    // --------
    // --- Runtime errors
    // --------

    /// The ticker was dropped, so no more ticks will be emitted.
    #[error("the clock ticker has stopped")]
    TickerStopped,
}

/// Represents the result of a computation that could return a [`ClockError`].
pub type ClockResult<T = ()> = Result<T, ClockError>;
