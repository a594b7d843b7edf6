//! Unit preferences and linear conversion from canonical storage units.
//!
//! Values are stored canonically (kilometers, kilometers per hour, bar) and
//! converted to the viewer's preferred unit just before formatting.
//!
//! ```rust
//! use viewkit_format::{DistanceUnit, Unit};
//!
//! let miles = DistanceUnit::Miles.convert(196.5);
//! assert!((miles - 122.0994).abs() < 0.01);
//! assert_eq!(DistanceUnit::Miles.label(), "mi");
//! ```

use serde::{Deserialize, Serialize};

/// Common behavior of the unit enums.
pub trait Unit: Copy {
    /// Multiplier applied to a canonical value.
    fn factor(self) -> f64;

    /// Suffix appended to formatted values.
    fn label(self) -> &'static str;

    /// Converts a canonical value into this unit.
    fn convert(self, canonical: f64) -> f64 {
        canonical * self.factor()
    }
}

/// Preferred distance unit. Canonical storage is kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
    #[serde(rename = "nmi")]
    NauticalMiles,
}

impl Unit for DistanceUnit {
    fn factor(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::Miles => 0.621_371,
            DistanceUnit::NauticalMiles => 0.539_957,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }
}

/// Preferred speed unit. Canonical storage is kilometers per hour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "kmh")]
    KilometersPerHour,
    #[serde(rename = "mph")]
    MilesPerHour,
    #[serde(rename = "kn")]
    Knots,
}

impl Unit for SpeedUnit {
    fn factor(self) -> f64 {
        match self {
            SpeedUnit::KilometersPerHour => 1.0,
            SpeedUnit::MilesPerHour => 0.621_371,
            SpeedUnit::Knots => 0.539_957,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MilesPerHour => "mph",
            SpeedUnit::Knots => "kn",
        }
    }
}

/// Preferred pressure unit. Canonical storage is bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "psi")]
    Psi,
    #[serde(rename = "kpa")]
    Kilopascal,
}

impl Unit for PressureUnit {
    fn factor(self) -> f64 {
        match self {
            PressureUnit::Bar => 1.0,
            PressureUnit::Psi => 14.5038,
            PressureUnit::Kilopascal => 100.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
            PressureUnit::Kilopascal => "kPa",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::round_to;

    #[test]
    fn canonical_units_are_identity() {
        assert_eq!(DistanceUnit::Kilometers.convert(42.0), 42.0);
        assert_eq!(SpeedUnit::KilometersPerHour.convert(88.0), 88.0);
        assert_eq!(PressureUnit::Bar.convert(2.2), 2.2);
    }

    #[test]
    fn miles_round_after_conversion() {
        let miles = DistanceUnit::Miles.convert(196.5);
        assert_eq!(round_to(miles, 2), 122.1);
        assert_eq!(round_to(DistanceUnit::Miles.convert(196.484), 2), 122.09);
    }

    #[test]
    fn pressure_to_psi() {
        assert_eq!(round_to(PressureUnit::Psi.convert(2.0), 2), 29.01);
        assert_eq!(PressureUnit::Kilopascal.convert(2.5), 250.0);
    }

    #[test]
    fn labels() {
        assert_eq!(SpeedUnit::MilesPerHour.label(), "mph");
        assert_eq!(SpeedUnit::Knots.label(), "kn");
        assert_eq!(PressureUnit::Kilopascal.label(), "kPa");
    }

    #[test]
    fn serde_uses_short_names() {
        let unit: DistanceUnit = serde_json::from_str("\"mi\"").unwrap();
        assert_eq!(unit, DistanceUnit::Miles);
        assert_eq!(serde_json::to_string(&SpeedUnit::KilometersPerHour).unwrap(), "\"kmh\"");
    }
}
