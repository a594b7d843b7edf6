//! The built table: frozen fields plus row data or an AJAX URL.

use std::fmt;
use std::rc::Rc;

use serde_json::{json, Map, Value};

use crate::component::Component;
use crate::context::{translate, OutputTarget, Translate, UnitPreferences, UserContext};
use crate::error::Result;
use crate::value::RowData;

use super::field::Field;
use super::format::RenderEnv;
use super::types::TableOptions;

pub(crate) type UnitOverride<R> = Rc<dyn Fn(&R) -> Option<UnitPreferences>>;

/// Where a table's rows come from. Exactly one applies at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource<R> {
    /// Rows embedded in the payload.
    Rows(Vec<R>),
    /// Rows fetched by the frontend from this URL.
    Url(String),
}

/// A table ready to render.
///
/// The field list is fixed when the table is built; only the data source
/// changes afterwards, via [`Table::set_data`] and [`Table::set_url`].
pub struct Table<R> {
    pub(crate) fields: Vec<Field<R>>,
    pub(crate) source: DataSource<R>,
    pub(crate) options: TableOptions,
    pub(crate) context: UserContext,
    pub(crate) translator: Option<Rc<dyn Translate>>,
    pub(crate) filter: Option<Vec<Value>>,
    pub(crate) unit_override: Option<UnitOverride<R>>,
}

impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            DataSource::Rows(rows) => format!("{} rows", rows.len()),
            DataSource::Url(url) => format!("url {url}"),
        };
        f.debug_struct("Table")
            .field("fields", &self.fields)
            .field("source", &source)
            .field("options", &self.options)
            .field("context", &self.context)
            .field("has_filter", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}

impl<R> Table<R> {
    /// Switches to static mode with these rows, dropping any URL.
    pub fn set_data(&mut self, rows: Vec<R>) {
        self.source = DataSource::Rows(rows);
    }

    /// Switches to AJAX mode, dropping any rows.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.source = DataSource::Url(url.into());
    }

    /// Attaches an opaque filter form definition.
    pub fn set_filter(&mut self, fields: Vec<Value>) {
        self.filter = Some(fields);
    }

    pub fn source(&self) -> &DataSource<R> {
        &self.source
    }

    pub fn is_ajax(&self) -> bool {
        matches!(self.source, DataSource::Url(_))
    }

    pub fn url(&self) -> Option<&str> {
        match &self.source {
            DataSource::Url(url) => Some(url),
            DataSource::Rows(_) => None,
        }
    }

    /// Current rows; empty in AJAX mode.
    pub fn rows(&self) -> &[R] {
        match &self.source {
            DataSource::Rows(rows) => rows,
            DataSource::Url(_) => &[],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// All registered fields in column order, including hidden ones.
    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&Field<R>> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn context(&self) -> &UserContext {
        &self.context
    }

    /// Fields this viewer gets to see, in column order.
    pub(crate) fn visible_fields(&self) -> impl Iterator<Item = &Field<R>> {
        self.fields
            .iter()
            .filter(move |f| f.is_visible_to(&self.context))
    }

    /// Rows rendered for `target`, one map per row keyed by field id.
    ///
    /// Bool labels and icon hints go through the table's translator.
    pub fn get_data(&self, target: OutputTarget) -> Vec<RowData> {
        self.render_rows(target, self.translator.as_deref())
    }

    pub(crate) fn render_rows(
        &self,
        target: OutputTarget,
        translator: Option<&dyn Translate>,
    ) -> Vec<RowData> {
        let rows = self.rows();
        let fields: Vec<&Field<R>> = self
            .visible_fields()
            .filter(|f| !target.is_export() || f.is_exported())
            .collect();
        tracing::debug!(?target, rows = rows.len(), fields = fields.len(), "rendering table rows");

        let base = RenderEnv::new(&self.context, target, translator);
        rows.iter()
            .map(|row| {
                let env = match self.unit_override.as_ref().and_then(|f| f(row)) {
                    Some(units) => base.with_units(units),
                    None => base,
                };
                let mut out = RowData::new();
                for field in &fields {
                    field.render_into(row, &env, &mut out);
                }
                out
            })
            .collect()
    }

    /// Aggregates for every visible field with a footer mode.
    ///
    /// Fields without a footer are absent from the result.
    pub fn calculate_footer(&self, target: OutputTarget) -> RowData {
        self.footer_with(target, self.translator.as_deref())
    }

    pub(crate) fn footer_with(
        &self,
        target: OutputTarget,
        translator: Option<&dyn Translate>,
    ) -> RowData {
        let env = RenderEnv::new(&self.context, target, translator);
        let rows = self.rows();
        self.visible_fields()
            .filter(|f| !target.is_export() || f.is_exported())
            .filter_map(|f| f.footer_cell(rows, &env).map(|cell| (f.id.clone(), cell)))
            .collect()
    }

    pub(crate) fn has_footer(&self) -> bool {
        self.visible_fields().any(|f| !f.footer.is_none())
    }

    /// The full component payload, see [`Component::print`].
    pub fn print(&self, translator: Option<&dyn Translate>) -> Value {
        Component::print(self, translator)
    }

    /// [`Table::print`] serialized to a JSON string.
    pub fn to_json_string(&self, translator: Option<&dyn Translate>) -> Result<String> {
        Ok(serde_json::to_string(&self.print(translator))?)
    }
}

impl<R> Component for Table<R> {
    fn component_type(&self) -> &'static str {
        "table"
    }

    fn display(&self, translator: Option<&dyn Translate>) -> Value {
        let fields: Vec<Value> = self
            .visible_fields()
            .map(|f| f.definition(&self.context, translator))
            .collect();

        let mut display = Map::new();
        display.insert("fields".into(), Value::Array(fields));
        display.insert("pagination".into(), json!(self.options.pagination));
        display.insert("search".into(), json!(self.options.search));
        display.insert("dense".into(), json!(self.options.dense));
        display.insert("itemsPerPage".into(), json!(self.options.items_per_page));
        if let Some(url) = &self.options.save_input_url {
            display.insert("saveInputUrl".into(), json!(url));
        }
        if let Some(text) = &self.options.no_data_text {
            display.insert("textNoData".into(), json!(translate(translator, text)));
        }
        display.insert("hasFilter".into(), json!(self.filter.is_some()));
        if let Some(filter) = &self.filter {
            display.insert("filter".into(), Value::Array(filter.clone()));
        }
        if !self.is_ajax() && self.has_footer() {
            let footer = self.footer_with(OutputTarget::Web, translator);
            display.insert("footer".into(), json!(footer));
        }
        Value::Object(display)
    }

    fn data(&self, translator: Option<&dyn Translate>) -> Value {
        if self.is_ajax() {
            return Value::Null;
        }
        json!(self.render_rows(OutputTarget::Web, translator))
    }

    fn url(&self) -> Option<&str> {
        Table::url(self)
    }
}
