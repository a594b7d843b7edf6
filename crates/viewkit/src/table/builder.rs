//! Fluent registration of fields, frozen into a [`Table`] by [`Builder::build`].

use std::collections::HashSet;
use std::rc::Rc;

use serde_json::Value;

use crate::context::{Translate, UnitPreferences, UserContext};
use crate::error::{Result, ViewError};

use super::field::{Field, FieldKind};
use super::format::link_key;
use super::model::{DataSource, Table, UnitOverride};
use super::types::{FooterMode, TableOptions};

/// Builder for constructing [`Table`] instances.
///
/// `build` borrows the builder and copies its fields, so one builder can
/// produce several independent tables (one per request, say).
///
/// ```rust
/// use viewkit::context::UserContext;
/// use viewkit::table::{Builder, Field};
///
/// struct Driver { id: i64, name: String }
///
/// let table = Builder::new(UserContext::new())
///     .field(Field::id_field("id", "ID", |d: &Driver| d.id).hidden())
///     .field(Field::text("name", "Name", |d: &Driver| d.name.clone()))
///     .items_per_page(50)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.fields().len(), 2);
/// assert_eq!(table.options().items_per_page, 50);
/// ```
pub struct Builder<R> {
    fields: Vec<Field<R>>,
    options: TableOptions,
    context: UserContext,
    translator: Option<Rc<dyn Translate>>,
    filter: Option<Vec<Value>>,
    unit_override: Option<UnitOverride<R>>,
}

impl<R> Builder<R> {
    /// Starts an empty table for this viewer.
    pub fn new(context: UserContext) -> Self {
        Builder {
            fields: Vec::new(),
            options: TableOptions::default(),
            context,
            translator: None,
            filter: None,
            unit_override: None,
        }
    }

    /// Registers a field. Registration order is the default column order.
    pub fn field(mut self, field: Field<R>) -> Self {
        self.fields.push(field);
        self
    }

    /// Registers several fields in order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field<R>>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Registers a field without consuming the builder.
    pub fn add_field(&mut self, field: Field<R>) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Replaces all table options at once.
    pub fn options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    pub fn items_per_page(mut self, items: u32) -> Self {
        self.options.items_per_page = items;
        self
    }

    pub fn dense(mut self, dense: bool) -> Self {
        self.options.dense = dense;
        self
    }

    pub fn pagination(mut self, pagination: bool) -> Self {
        self.options.pagination = pagination;
        self
    }

    pub fn search(mut self, search: bool) -> Self {
        self.options.search = search;
        self
    }

    /// Endpoint receiving edits from Input columns.
    pub fn save_input_url(mut self, url: impl Into<String>) -> Self {
        self.options.save_input_url = Some(url.into());
        self
    }

    /// Translation key shown when the table has no rows.
    pub fn no_data_text(mut self, key: impl Into<String>) -> Self {
        self.options.no_data_text = Some(key.into());
        self
    }

    /// Translator for [`Table::get_data`] and [`Table::calculate_footer`].
    pub fn translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Some(Rc::new(translator));
        self
    }

    /// Per-row unit preferences, e.g. from the device that recorded the row.
    /// Rows for which this returns `None` use the viewer's units.
    pub fn unit_override(
        mut self,
        f: impl Fn(&R) -> Option<UnitPreferences> + 'static,
    ) -> Self {
        self.unit_override = Some(Rc::new(f));
        self
    }

    /// Attaches a filter form, passed through to the frontend untouched.
    pub fn filter(mut self, fields: Vec<Value>) -> Self {
        self.filter = Some(fields);
        self
    }

    /// Validates the fields and freezes them into a table in column order.
    ///
    /// # Errors
    ///
    /// [`ViewError::DuplicateField`] when two fields would write the same row
    /// key (a Link field also writes `{id}Link`), and
    /// [`ViewError::InvalidFooter`] when a sum footer sits on a kind that has
    /// no numeric value to sum.
    pub fn build(&self) -> Result<Table<R>> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            let mut keys = vec![field.id.clone()];
            if matches!(field.kind, FieldKind::Link(_)) {
                keys.push(link_key(&field.id));
            }
            for key in keys {
                if seen.contains(&key) {
                    return Err(ViewError::DuplicateField { id: key });
                }
                seen.insert(key);
            }
            if field.footer == FooterMode::Sum && !field.kind.is_summable() {
                return Err(ViewError::InvalidFooter {
                    id: field.id.clone(),
                    kind: field.kind.tag(),
                });
            }
        }

        let mut fields: Vec<(i64, Field<R>)> = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let order = field.order.map_or(index as i64, i64::from);
                (order, field.clone())
            })
            .collect();
        // Vec::sort_by_key is stable: equal orders keep registration order.
        fields.sort_by_key(|(order, _)| *order);

        tracing::debug!(fields = fields.len(), "built table");

        Ok(Table {
            fields: fields.into_iter().map(|(_, field)| field).collect(),
            source: DataSource::Rows(Vec::new()),
            options: self.options.clone(),
            context: self.context.clone(),
            translator: self.translator.clone(),
            filter: self.filter.clone(),
            unit_override: self.unit_override.clone(),
        })
    }
}
