//! Data tables with typed columns.
//!
//! A table is described once with a [`Builder`], then rendered for one of
//! four output targets:
//!
//! | Target | Used for | Numeric cells |
//! |--------|----------|---------------|
//! | [`OutputTarget::Web`](crate::context::OutputTarget::Web) | the JSON payload | `[display, number]` |
//! | `Csv`, `Pdf`, `Excel` | exports | `display` |
//!
//! Every column is a [`Field`] whose constructor fixes the accessor's return
//! type. Numbers are formatted in the viewer's locale; distances, speeds and
//! pressures are stored in km, km/h and bar and converted to the viewer's
//! units before rounding.
//!
//! ```rust
//! use viewkit::context::{OutputTarget, UserContext};
//! use viewkit::table::{Builder, Field, FooterMode};
//! use viewkit::DistanceUnit;
//!
//! struct Trip { driver: String, km: f64 }
//!
//! let ctx = UserContext::new().with_distance_unit(DistanceUnit::Miles);
//! let mut table = Builder::new(ctx)
//!     .field(Field::text("driver", "Driver", |t: &Trip| t.driver.clone()))
//!     .field(
//!         Field::distance("km", "Distance", |t: &Trip| t.km)
//!             .decimals(2)
//!             .footer(FooterMode::Sum),
//!     )
//!     .build()?;
//!
//! table.set_data(vec![Trip { driver: "Ann".into(), km: 100.0 }]);
//!
//! let rows = table.get_data(OutputTarget::Csv);
//! assert_eq!(rows[0]["km"].as_str(), Some("62.14 mi"));
//!
//! let payload = table.print(None);
//! assert_eq!(payload["type"], "table");
//! assert_eq!(payload["display"]["footer"]["km"][0], "62.14 mi");
//! # Ok::<(), viewkit::ViewError>(())
//! ```
//!
//! ## Data source
//!
//! A table either embeds its rows ([`Table::set_data`]) or points the
//! frontend at a URL ([`Table::set_url`]). Setting one clears the other; in
//! URL mode `data` is `null` and no footer is computed.

mod builder;
mod export;
mod field;
mod footer;
mod format;
mod model;
mod types;

pub use builder::Builder;
pub use field::{Accessor, BoolLabels, Field, FieldKind, UnitKind};
pub use model::{DataSource, Table};
pub use types::{
    Align, ButtonAction, ButtonDefinition, FooterMode, LinkValue, TableOptions, Width,
};
