//! Per-request rendering context.
//!
//! A [`UserContext`] bundles everything about the viewer that affects how a
//! value is displayed: timezone, locale, preferred units and permissions. It
//! is supplied once when a table is built and never changes afterwards.
//!
//! Contexts are plain data and can be loaded from configuration:
//!
//! ```rust
//! use viewkit::context::UserContext;
//! use viewkit_format::DistanceUnit;
//!
//! let ctx = UserContext::from_yaml(r#"
//! timezone: Europe/Berlin
//! locale: de
//! distanceUnit: mi
//! permissions: [fleet.admin]
//! "#).unwrap();
//!
//! assert_eq!(ctx.locale, "de");
//! assert_eq!(ctx.distance_unit, DistanceUnit::Miles);
//! assert!(ctx.can_access(&["fleet.admin".to_string()]));
//! ```

use std::collections::BTreeSet;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use viewkit_format::{DistanceUnit, NumberFormat, PressureUnit, SpeedUnit};

use crate::error::Result;

/// Where rendered values are headed. Decides the shape of each value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Browser table: numeric cells are `[display, number]` pairs.
    #[default]
    Web,
    /// CSV download.
    Csv,
    /// PDF report.
    Pdf,
    /// Spreadsheet export.
    Excel,
}

impl OutputTarget {
    /// True for every target other than [`OutputTarget::Web`].
    pub fn is_export(self) -> bool {
        !matches!(self, OutputTarget::Web)
    }
}

/// The unit a viewer prefers for each unit-bearing field kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitPreferences {
    pub distance: DistanceUnit,
    pub speed: SpeedUnit,
    pub pressure: PressureUnit,
}

/// Who is looking, and how they want values shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserContext {
    /// IANA timezone used for dates and times.
    pub timezone: Tz,
    /// UI language, used by the caller's translator.
    pub language: String,
    /// Locale tag deciding number separators.
    pub locale: String,
    pub distance_unit: DistanceUnit,
    pub speed_unit: SpeedUnit,
    pub pressure_unit: PressureUnit,
    /// Permissions held by the viewer, checked against field access lists.
    pub permissions: BTreeSet<String>,
}

impl Default for UserContext {
    fn default() -> Self {
        UserContext {
            timezone: Tz::UTC,
            language: "en".to_string(),
            locale: "en-GB".to_string(),
            distance_unit: DistanceUnit::default(),
            speed_unit: SpeedUnit::default(),
            pressure_unit: PressureUnit::default(),
            permissions: BTreeSet::new(),
        }
    }
}

impl UserContext {
    /// Creates a context with defaults (UTC, `en-GB`, metric units).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a context from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a context from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    pub fn with_speed_unit(mut self, unit: SpeedUnit) -> Self {
        self.speed_unit = unit;
        self
    }

    pub fn with_pressure_unit(mut self, unit: PressureUnit) -> Self {
        self.pressure_unit = unit;
        self
    }

    /// Grants a permission.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    /// The table-level unit preferences.
    pub fn units(&self) -> UnitPreferences {
        UnitPreferences {
            distance: self.distance_unit,
            speed: self.speed_unit,
            pressure: self.pressure_unit,
        }
    }

    /// Number separators for this context's locale.
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::for_locale(&self.locale)
    }

    /// OR semantics: an empty list is public, otherwise any one permission suffices.
    pub fn can_access(&self, access: &[String]) -> bool {
        access.is_empty() || access.iter().any(|p| self.permissions.contains(p))
    }
}

/// Resolves translation keys to display text.
///
/// Implemented for any `Fn(&str) -> String`, so closures work directly:
///
/// ```rust
/// use viewkit::context::{translate, Translate};
///
/// let german = |key: &str| match key {
///     "Yes" => "Ja".to_string(),
///     other => other.to_string(),
/// };
/// assert_eq!(german.translate("Yes"), "Ja");
/// assert_eq!(translate(None, "Yes"), "Yes");
/// ```
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        (self)(key)
    }
}

/// Translates with an optional translator; without one, keys pass through.
pub fn translate(translator: Option<&dyn Translate>, key: &str) -> String {
    match translator {
        Some(t) => t.translate(key),
        None => key.to_string(),
    }
}
