//! # viewkit - server-side view models for a fixed-contract frontend
//!
//! Components render to a JSON tree of the form `{type, display, data}`.
//! The [`table`] module is the heart of the crate: a typed column DSL whose
//! cells are formatted per viewer (locale, timezone, preferred units) and per
//! output target (web payload, CSV, PDF, Excel), with sum/count footers.
//!
//! - [`context::UserContext`] - who is looking: locale, timezone, units, permissions
//! - [`table::Builder`] / [`table::Table`] - define columns, attach rows, render
//! - [`icon::IconSet`] - status keys mapped to `{icon, color, hint}`
//! - [`component::Component`] - the shared payload envelope
//!
//! # Quick Start
//!
//! ```rust
//! use viewkit::context::{OutputTarget, UserContext};
//! use viewkit::icon::{IconDefinition, IconSet};
//! use viewkit::table::{Builder, Field};
//!
//! struct Vehicle { plate: String, status: String, speed: f64 }
//!
//! let icons = IconSet::new()
//!     .add("moving", IconDefinition::new("mdi-truck-fast").color("green").hint("Moving"))
//!     .add("parked", IconDefinition::new("mdi-parking").color("grey").hint("Parked"));
//!
//! let mut table = Builder::new(UserContext::new().with_locale("de"))
//!     .field(Field::text("plate", "Plate", |v: &Vehicle| v.plate.clone()))
//!     .field(Field::icon("status", "Status", icons, |v: &Vehicle| v.status.clone()))
//!     .field(Field::speed("speed", "Speed", |v: &Vehicle| v.speed).decimals(1))
//!     .build()?;
//!
//! table.set_data(vec![Vehicle { plate: "B-XY 12".into(), status: "moving".into(), speed: 87.25 }]);
//!
//! let payload = table.print(None);
//! assert_eq!(payload["data"][0]["speed"][0], "87,3 km/h");
//! assert_eq!(payload["data"][0]["status"]["icon"], "mdi-truck-fast");
//!
//! let csv = table.get_data(OutputTarget::Csv);
//! assert_eq!(csv[0]["status"].as_str(), Some("Moving"));
//! # Ok::<(), viewkit::ViewError>(())
//! ```
//!
//! # Rendering never fails
//!
//! Once a table is built, rendering is total: unknown icon keys become
//! `null`, missing timestamps become empty strings and non-finite numbers
//! serialize as `null`. Errors come from [`table::Builder::build`]
//! (duplicate ids, sum footers on non-numeric kinds) and from serializing the
//! output.

pub mod component;
pub mod context;
mod error;
pub mod icon;
pub mod table;
pub mod value;

pub use error::{Result, ViewError};

pub use component::Component;
pub use context::{OutputTarget, Translate, UnitPreferences, UserContext};
pub use value::{Cell, RowData};

pub use viewkit_format::{DistanceUnit, PressureUnit, SpeedUnit, Tz};
