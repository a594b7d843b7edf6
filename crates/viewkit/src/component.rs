//! The `{type, display, data}` envelope shared by every view model.
//!
//! A component splits its payload into static presentation (`display`) and
//! the rendered records (`data`). Components whose data is loaded by the
//! frontend report a URL instead, and their `data` is `null`.

use serde_json::{Map, Value};

use crate::context::Translate;

/// A view model the frontend can mount.
pub trait Component {
    /// The `type` tag the frontend dispatches on.
    fn component_type(&self) -> &'static str;

    /// Presentation metadata.
    fn display(&self, translator: Option<&dyn Translate>) -> Value;

    /// Rendered records, or `null` when the frontend fetches them.
    fn data(&self, translator: Option<&dyn Translate>) -> Value;

    /// Endpoint the frontend loads data from, if any.
    fn url(&self) -> Option<&str> {
        None
    }

    /// Assembles the full payload. `url` is only present when set.
    fn print(&self, translator: Option<&dyn Translate>) -> Value {
        let mut out = Map::new();
        out.insert("type".into(), Value::String(self.component_type().into()));
        out.insert("display".into(), self.display(translator));
        out.insert("data".into(), self.data(translator));
        if let Some(url) = self.url() {
            out.insert("url".into(), Value::String(url.into()));
        }
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Stat {
        label: String,
        value: i64,
    }

    impl Component for Stat {
        fn component_type(&self) -> &'static str {
            "stat"
        }

        fn display(&self, translator: Option<&dyn Translate>) -> Value {
            json!({ "label": crate::context::translate(translator, &self.label) })
        }

        fn data(&self, _: Option<&dyn Translate>) -> Value {
            json!(self.value)
        }
    }

    #[test]
    fn envelope_without_url() {
        let stat = Stat {
            label: "Vehicles".into(),
            value: 12,
        };
        assert_eq!(
            stat.print(None),
            json!({"type": "stat", "display": {"label": "Vehicles"}, "data": 12})
        );
    }
}
