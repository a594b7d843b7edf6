//! Icon definitions and icon set registries.
//!
//! An icon column stores a short key per row (`"online"`, `"fault"`) and an
//! [`IconSet`] maps those keys to what the frontend draws: an icon name, a
//! color and a hint (a translation key shown on hover).
//!
//! # Example
//!
//! ```rust
//! use viewkit::icon::{IconDefinition, IconSet};
//!
//! let icons = IconSet::new()
//!     .add("online", IconDefinition::new("mdi-check-circle").color("green").hint("Online"))
//!     .add("offline", IconDefinition::new("mdi-close-circle").color("grey"));
//!
//! assert_eq!(icons.resolve("online").unwrap().color, "green");
//!
//! // Unknown keys are not an error.
//! assert!(icons.resolve("exploded").is_none());
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::context::{translate, Translate};
use crate::value::Cell;

/// A single icon: what to draw, in which color, with which hover hint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconDefinition {
    /// Icon name understood by the frontend (e.g. `mdi-check`).
    pub icon: String,
    /// Color name or hex value. Empty means the frontend default.
    pub color: String,
    /// Translation key for the hint. Empty means no hint.
    pub hint: String,
}

impl IconDefinition {
    /// Creates an icon definition without color or hint.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            color: String::new(),
            hint: String::new(),
        }
    }

    /// Sets the icon color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the hint translation key.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Renders `{icon, color, hint}` with the hint translated.
    pub fn to_cell(&self, translator: Option<&dyn Translate>) -> Cell {
        let hint = if self.hint.is_empty() {
            String::new()
        } else {
            translate(translator, &self.hint)
        };
        let mut map = BTreeMap::new();
        map.insert("icon".to_string(), Cell::Text(self.icon.clone()));
        map.insert("color".to_string(), Cell::Text(self.color.clone()));
        map.insert("hint".to_string(), Cell::Text(hint));
        Cell::Map(map)
    }
}

/// A registry of named icon definitions.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: HashMap<String, IconDefinition>,
}

impl IconSet {
    /// Creates an empty icon set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an icon definition, returning `self` for chaining.
    pub fn add(mut self, key: impl Into<String>, def: IconDefinition) -> Self {
        self.icons.insert(key.into(), def);
        self
    }

    /// Inserts an icon definition by mutable reference.
    pub fn insert(&mut self, key: impl Into<String>, def: IconDefinition) {
        self.icons.insert(key.into(), def);
    }

    /// Looks up a key. Unknown keys yield `None`, never an error.
    pub fn resolve(&self, key: &str) -> Option<&IconDefinition> {
        let found = self.icons.get(key);
        if found.is_none() {
            tracing::trace!(key, "icon key not registered");
        }
        found
    }

    /// Renders the icon for `key`, or `Cell::Null` for unknown keys.
    pub fn resolve_cell(&self, key: &str, translator: Option<&dyn Translate>) -> Cell {
        self.resolve(key)
            .map_or(Cell::Null, |def| def.to_cell(translator))
    }

    /// Returns true if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.icons.contains_key(key)
    }

    /// Returns true if no icons are defined.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Returns the number of defined icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Merges another icon set into this one.
    ///
    /// Icons from `other` take precedence over icons in `self`.
    pub fn merge(mut self, other: IconSet) -> Self {
        self.icons.extend(other.icons);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fleet_icons() -> IconSet {
        IconSet::new()
            .add(
                "online",
                IconDefinition::new("mdi-check").color("green").hint("Online"),
            )
            .add("offline", IconDefinition::new("mdi-close").color("grey"))
    }

    #[test]
    fn test_icon_definition_builder() {
        let icon = IconDefinition::new("mdi-alert").color("red").hint("Fault");
        assert_eq!(icon.icon, "mdi-alert");
        assert_eq!(icon.color, "red");
        assert_eq!(icon.hint, "Fault");
    }

    #[test]
    fn test_icon_set_resolve_known() {
        let icons = fleet_icons();
        assert_eq!(icons.resolve("offline").unwrap().icon, "mdi-close");
        assert!(icons.contains("online"));
    }

    #[test]
    fn test_icon_set_resolve_unknown_is_none() {
        let icons = fleet_icons();
        assert!(icons.resolve("").is_none());
        assert!(icons.resolve("ONLINE").is_none());
        assert_eq!(icons.resolve_cell("missing", None), Cell::Null);
    }

    #[test]
    fn test_icon_cell_translates_hint() {
        let icons = fleet_icons();
        let german = |key: &str| if key == "Online" { "Verbunden".to_string() } else { key.to_string() };
        let cell = icons.resolve_cell("online", Some(&german));
        assert_eq!(
            serde_json::to_value(&cell).unwrap(),
            json!({"icon": "mdi-check", "color": "green", "hint": "Verbunden"})
        );
    }

    #[test]
    fn test_icon_cell_empty_hint_stays_empty() {
        let icons = fleet_icons();
        let upper = |key: &str| key.to_uppercase();
        let cell = icons.resolve_cell("offline", Some(&upper));
        assert_eq!(
            serde_json::to_value(&cell).unwrap(),
            json!({"icon": "mdi-close", "color": "grey", "hint": ""})
        );
    }

    #[test]
    fn test_icon_set_insert_and_len() {
        let mut set = IconSet::new();
        assert!(set.is_empty());
        set.insert("idle", IconDefinition::new("mdi-sleep"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_icon_set_merge() {
        let base = IconSet::new()
            .add("keep", IconDefinition::new("K"))
            .add("override", IconDefinition::new("OLD"));
        let extension = IconSet::new()
            .add("override", IconDefinition::new("NEW"))
            .add("added", IconDefinition::new("A"));

        let merged = base.merge(extension);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.resolve("keep").unwrap().icon, "K");
        assert_eq!(merged.resolve("override").unwrap().icon, "NEW");
        assert_eq!(merged.resolve("added").unwrap().icon, "A");
    }
}
