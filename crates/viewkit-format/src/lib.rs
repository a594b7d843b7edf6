//! # viewkit-format - value formatters for view-model payloads
//!
//! Pure functions that turn raw values into the strings a viewer expects:
//!
//! - [`format_number`] with a locale's [`NumberFormat`]
//! - unit conversion via [`DistanceUnit`], [`SpeedUnit`], [`PressureUnit`]
//! - [`format_datetime`], [`format_date`] in an IANA timezone
//! - [`format_time_length`] for durations
//!
//! Nothing here knows about rows, fields or JSON; the `viewkit` crate builds
//! on top of these.
//!
//! ```rust
//! use viewkit_format::{format_number, DistanceUnit, NumberFormat, Unit};
//!
//! let de = NumberFormat::for_locale("de");
//! let km = 196.5;
//! let text = format!("{} {}", format_number(km, 2, &de), DistanceUnit::Kilometers.label());
//! assert_eq!(text, "196,50 km");
//! ```

mod number;
mod time;
mod units;

pub use number::{format_integer, format_number, parse_number, round_to, NumberFormat, NBSP};
pub use time::{format_date, format_datetime, format_time_length, time_length_minutes, Precision};
pub use units::{DistanceUnit, PressureUnit, SpeedUnit, Unit};

pub use chrono_tz::Tz;
