//! Locale-aware number formatting.
//!
//! Numbers are rendered with a locale's grouping and decimal separators after
//! rounding half away from zero to a fixed number of decimals.
//!
//! ```rust
//! use viewkit_format::{format_number, NumberFormat};
//!
//! let de = NumberFormat::for_locale("de");
//! assert_eq!(format_number(1234.5, 2, &de), "1.234,50");
//!
//! let en = NumberFormat::for_locale("en-GB");
//! assert_eq!(format_number(1234.5, 2, &en), "1,234.50");
//! ```

/// No-break space, used as the group separator by several European locales.
pub const NBSP: char = '\u{a0}';

/// Grouping and decimal separators for a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator inserted every three integer digits, if any.
    pub group: Option<char>,
    /// Separator between the integer and fractional parts.
    pub decimal: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group: Some(','),
            decimal: '.',
        }
    }
}

impl NumberFormat {
    /// Creates a format with explicit separators.
    pub fn new(group: Option<char>, decimal: char) -> Self {
        NumberFormat { group, decimal }
    }

    /// Resolves the separators for a BCP 47 style locale tag (`de`, `en-GB`, `de_CH`).
    ///
    /// Unknown or empty tags fall back to the English convention.
    pub fn for_locale(locale: &str) -> Self {
        let normalized = locale.trim().replace('_', "-").to_ascii_lowercase();
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or("");
        let region = parts.next().unwrap_or("");

        if region == "ch" && matches!(language, "de" | "it" | "fr" | "rm") {
            return NumberFormat::new(Some('\''), '.');
        }

        match language {
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr" | "sl" => {
                NumberFormat::new(Some('.'), ',')
            }
            "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "uk" | "hu" | "bg"
            | "lt" | "lv" | "et" => NumberFormat::new(Some(NBSP), ','),
            _ => NumberFormat::default(),
        }
    }
}

/// Rounds `value` half away from zero to `decimals` fractional digits.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Formats `value` with `decimals` fractional digits using the given separators.
///
/// Non-finite values render as an empty string. A value that rounds to zero
/// never carries a minus sign.
pub fn format_number(value: f64, decimals: u32, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let rounded = round_to(value, decimals);
    let plain = format!("{:.*}", decimals as usize, rounded.abs());
    let negative = rounded < 0.0 && plain.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, format.group));
    if let Some(frac) = frac_part {
        out.push(format.decimal);
        out.push_str(frac);
    }
    out
}

/// Formats an integer with the locale's group separator.
pub fn format_integer(value: i64, format: &NumberFormat) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits, format.group);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parses text produced by [`format_number`] back into a number.
pub fn parse_number(text: &str, format: &NumberFormat) -> Option<f64> {
    let mut normalized = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if Some(c) == format.group || (format.group == Some(NBSP) && c == ' ') {
            continue;
        }
        if c == format.decimal {
            normalized.push('.');
        } else {
            normalized.push(c);
        }
    }
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

fn group_digits(digits: &str, group: Option<char>) -> String {
    let Some(sep) = group else {
        return digits.to_string();
    };
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_uses_comma_decimal() {
        let de = NumberFormat::for_locale("de");
        assert_eq!(format_number(196.5, 2, &de), "196,50");
        assert_eq!(format_number(628.5, 3, &de), "628,500");
        assert_eq!(format_number(1234567.891, 2, &de), "1.234.567,89");
    }

    #[test]
    fn british_uses_dot_decimal() {
        let gb = NumberFormat::for_locale("en-GB");
        assert_eq!(format_number(45.67, 2, &gb), "45.67");
        assert_eq!(format_number(1234.0, 0, &gb), "1,234");
    }

    #[test]
    fn swiss_region_overrides_language() {
        let ch = NumberFormat::for_locale("de_CH");
        assert_eq!(format_number(1234.5, 1, &ch), "1'234.5");
    }

    #[test]
    fn french_groups_with_no_break_space() {
        let fr = NumberFormat::for_locale("fr-FR");
        assert_eq!(format_number(12345.5, 1, &fr), "12\u{a0}345,5");
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        assert_eq!(NumberFormat::for_locale("xx"), NumberFormat::default());
        assert_eq!(NumberFormat::for_locale(""), NumberFormat::default());
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(122.0915, 2), 122.09);
    }

    #[test]
    fn negative_zero_has_no_sign() {
        let en = NumberFormat::default();
        assert_eq!(format_number(-0.001, 2, &en), "0.00");
        assert_eq!(format_number(-1234.5, 1, &en), "-1,234.5");
    }

    #[test]
    fn non_finite_is_empty() {
        let en = NumberFormat::default();
        assert_eq!(format_number(f64::NAN, 2, &en), "");
        assert_eq!(format_number(f64::INFINITY, 2, &en), "");
    }

    #[test]
    fn integers_are_grouped() {
        let de = NumberFormat::for_locale("de");
        assert_eq!(format_integer(-1234567, &de), "-1.234.567");
        assert_eq!(format_integer(12, &de), "12");
    }

    #[test]
    fn parse_inverts_format() {
        let de = NumberFormat::for_locale("de");
        assert_eq!(parse_number("1.234,50", &de), Some(1234.5));
        assert_eq!(parse_number("", &de), None);
        assert_eq!(parse_number("abc", &de), None);
    }
}
