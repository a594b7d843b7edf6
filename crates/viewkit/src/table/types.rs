//! Core types for table configuration.
//!
//! Column layout (alignment, width), footer modes, row action buttons and the
//! table-wide options shared by every field.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::context::{translate, Translate};
use crate::error::Result;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

/// How a column sizes itself. A column has at most one of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Width {
    /// Fixed CSS width, e.g. `"120px"`.
    Fixed(String),
    /// Responsive column that never shrinks below this CSS width.
    Min(String),
}

impl Width {
    /// Create a fixed-width column.
    pub fn fixed(width: impl Into<String>) -> Self {
        Width::Fixed(width.into())
    }

    /// Create a responsive column with a minimum width.
    pub fn min(width: impl Into<String>) -> Self {
        Width::Min(width.into())
    }

    /// The JSON key this width is emitted under.
    pub fn key(&self) -> &'static str {
        match self {
            Width::Fixed(_) => "width",
            Width::Min(_) => "minWidth",
        }
    }

    /// The CSS value.
    pub fn value(&self) -> &str {
        match self {
            Width::Fixed(w) | Width::Min(w) => w,
        }
    }
}

/// Aggregate shown below a column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FooterMode {
    #[default]
    None,
    /// Sum of the raw values, formatted like a single cell.
    Sum,
    /// Number of rows with a present, non-zero or true value.
    Count,
    /// Fixed text (a translation key).
    Static(String),
}

impl FooterMode {
    pub fn is_none(&self) -> bool {
        matches!(self, FooterMode::None)
    }

    /// Tag used in field definitions, `None` when no footer is configured.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            FooterMode::None => None,
            FooterMode::Sum => Some("sum"),
            FooterMode::Count => Some("count"),
            FooterMode::Static(_) => Some("static"),
        }
    }
}

/// What a row action button does when clicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    /// Navigate to the row's URL.
    #[default]
    Link,
    /// Open the URL in a new tab.
    NewTab,
    /// Open the URL as an edit dialog.
    Edit,
    /// Confirm, then request the URL to delete the row.
    Delete,
    /// Download the file behind the URL.
    Download,
    /// Load the URL into a dialog.
    Dialog,
}

/// Static description of one button in a Buttons column.
///
/// Which buttons show up on a given row, and where they point, comes from the
/// row accessor; this holds what stays the same for every row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonDefinition {
    pub action: ButtonAction,
    pub icon: String,
    pub color: String,
    /// Translation key for the hover hint.
    pub hint: String,
}

impl ButtonDefinition {
    pub fn new(action: ButtonAction, icon: impl Into<String>) -> Self {
        ButtonDefinition {
            action,
            icon: icon.into(),
            color: String::new(),
            hint: String::new(),
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub(crate) fn definition(&self, translator: Option<&dyn Translate>) -> Value {
        let hint = if self.hint.is_empty() {
            String::new()
        } else {
            translate(translator, &self.hint)
        };
        json!({
            "action": self.action,
            "icon": self.icon,
            "color": self.color,
            "hint": hint,
        })
    }
}

/// Display text and target of a Link cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkValue {
    pub text: String,
    pub url: String,
}

impl LinkValue {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        LinkValue {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Table-wide presentation options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    pub items_per_page: u32,
    pub dense: bool,
    pub pagination: bool,
    pub search: bool,
    /// Endpoint that receives edits from Input columns.
    pub save_input_url: Option<String>,
    /// Translation key shown when there are no rows.
    pub no_data_text: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            items_per_page: 25,
            dense: false,
            pagination: true,
            search: true,
            save_input_url: None,
            no_data_text: None,
        }
    }
}

impl TableOptions {
    /// Parses options from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_keys() {
        assert_eq!(Width::fixed("80px").key(), "width");
        assert_eq!(Width::min("120px").key(), "minWidth");
        assert_eq!(Width::min("120px").value(), "120px");
    }

    #[test]
    fn footer_tags() {
        assert_eq!(FooterMode::None.tag(), None);
        assert_eq!(FooterMode::Sum.tag(), Some("sum"));
        assert_eq!(FooterMode::Static("Total".into()).tag(), Some("static"));
    }

    #[test]
    fn button_definition_translates_hint() {
        let button = ButtonDefinition::new(ButtonAction::Edit, "mdi-pencil").hint("Edit");
        let german = |key: &str| {
            if key == "Edit" {
                "Bearbeiten".to_string()
            } else {
                key.to_string()
            }
        };
        assert_eq!(
            button.definition(Some(&german)),
            json!({"action": "edit", "icon": "mdi-pencil", "color": "", "hint": "Bearbeiten"})
        );
    }

    #[test]
    fn new_tab_action_is_lowercase() {
        assert_eq!(serde_json::to_value(ButtonAction::NewTab).unwrap(), json!("newtab"));
    }

    #[test]
    fn options_from_yaml() {
        let options = TableOptions::from_yaml("itemsPerPage: 50\ndense: true\n").unwrap();
        assert_eq!(options.items_per_page, 50);
        assert!(options.dense);
        assert!(options.pagination);
        assert_eq!(options.save_input_url, None);
    }
}
