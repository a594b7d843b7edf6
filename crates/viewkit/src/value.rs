//! Tagged values emitted at the JSON boundary.
//!
//! Field logic works with concretely typed values and converts to [`Cell`]
//! only when a row is rendered. `Cell` serializes to exactly the JSON shapes
//! the frontend expects; in particular [`Cell::Pair`] becomes a two element
//! `[display, number]` array used for sort-by-number, show-by-string columns.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq, SerializeTuple};
use serde::{Serialize, Serializer};

/// One rendered row (or footer), keyed by field id.
pub type RowData = BTreeMap<String, Cell>;

/// A rendered JSON value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// Integral JSON number.
    Int(i64),
    /// Floating point JSON number; non-finite values serialize as `null`.
    Number(f64),
    /// JSON string.
    Text(String),
    /// `[display, number]`.
    Pair(String, f64),
    /// JSON array.
    List(Vec<Cell>),
    /// JSON object.
    Map(BTreeMap<String, Cell>),
}

impl Cell {
    /// Returns true for `Cell::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// The string content of a text cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content of a number, integer or pair cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(n) => Some(*n as f64),
            Cell::Number(n) | Cell::Pair(_, n) => Some(*n),
            _ => None,
        }
    }

    /// Whether the value counts as present for a count footer.
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Null => false,
            Cell::Bool(b) => *b,
            Cell::Int(n) => *n != 0,
            Cell::Number(n) => *n != 0.0 && !n.is_nan(),
            Cell::Text(s) => !s.is_empty(),
            Cell::Pair(s, _) => !s.is_empty(),
            Cell::List(items) => !items.is_empty(),
            Cell::Map(map) => !map.is_empty(),
        }
    }

    /// Flattens the cell into one line of plain text, for CSV cells.
    pub fn to_plain_text(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Bool(b) => b.to_string(),
            Cell::Int(n) => n.to_string(),
            Cell::Number(n) if n.is_finite() => n.to_string(),
            Cell::Number(_) => String::new(),
            Cell::Text(s) | Cell::Pair(s, _) => s.clone(),
            Cell::List(items) => items
                .iter()
                .map(Cell::to_plain_text)
                .collect::<Vec<_>>()
                .join(", "),
            Cell::Map(map) => map
                .values()
                .map(Cell::to_plain_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_none(),
            Cell::Bool(b) => serializer.serialize_bool(*b),
            Cell::Int(n) => serializer.serialize_i64(*n),
            Cell::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Cell::Number(_) => serializer.serialize_none(),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Pair(display, number) => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(display)?;
                if number.is_finite() {
                    tuple.serialize_element(number)?;
                } else {
                    tuple.serialize_element(&Option::<f64>::None)?;
                }
                tuple.end()
            }
            Cell::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Cell::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Int(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Int(i64::from(n))
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Int(i64::from(n))
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Cell {
    fn from(items: Vec<T>) -> Self {
        Cell::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(cell: &Cell) -> serde_json::Value {
        serde_json::to_value(cell).unwrap()
    }

    #[test]
    fn pair_serializes_as_two_element_array() {
        let cell = Cell::Pair("196,50".to_string(), 196.5);
        assert_eq!(to_json(&cell), json!(["196,50", 196.5]));
    }

    #[test]
    fn non_finite_numbers_become_null() {
        assert_eq!(to_json(&Cell::Number(f64::NAN)), json!(null));
        assert_eq!(
            to_json(&Cell::Pair(String::new(), f64::INFINITY)),
            json!(["", null])
        );
    }

    #[test]
    fn nested_values() {
        let mut map = BTreeMap::new();
        map.insert("0".to_string(), Cell::from("/edit/1"));
        map.insert("1".to_string(), Cell::Bool(false));
        let cell = Cell::List(vec![Cell::Map(map), Cell::Int(3)]);
        assert_eq!(to_json(&cell), json!([{"0": "/edit/1", "1": false}, 3]));
    }

    #[test]
    fn truthiness() {
        assert!(!Cell::Null.is_truthy());
        assert!(!Cell::Int(0).is_truthy());
        assert!(Cell::Number(0.5).is_truthy());
        assert!(!Cell::Text(String::new()).is_truthy());
        assert!(Cell::Bool(true).is_truthy());
        assert!(!Cell::List(vec![]).is_truthy());
    }

    #[test]
    fn plain_text_joins_lists() {
        let cell = Cell::from(vec!["a", "b"]);
        assert_eq!(cell.to_plain_text(), "a, b");
        assert_eq!(Cell::Pair("1,5".into(), 1.5).to_plain_text(), "1,5");
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Cell::from(None::<i64>), Cell::Null);
        assert_eq!(Cell::from(Some(4i64)), Cell::Int(4));
    }
}
