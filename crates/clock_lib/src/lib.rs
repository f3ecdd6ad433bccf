//! The main crate of the clock widgets.
//!
//! This crate contains the time model shared by every clock widget: the parsing and formatting
//! of the `HH:MM:SS AM/PM` custom time, the tick-by-tick simulation of that time, and the
//! projections that turn a time into the visual parameters of each widget.
//!
//! If you wish to see a program driving these clocks, take a look at
//! the [`clockd`](../clockd/index.html) package.

#![warn(missing_docs)]

mod env;

pub mod advance;
pub mod codec;
pub mod error;
pub mod projection;
pub mod source;
pub mod ticker;
pub mod time;
pub mod validate;

pub use env::*;
pub use time::{CanonicalTime, DisplayTime, Period};
