//! Field definitions: one column of a table.
//!
//! A [`Field`] pairs a typed row accessor with presentation options. The
//! accessor's return type is fixed by the constructor used, so a distance
//! column can only ever produce `f64` kilometers and a `Text2` column always
//! yields exactly two strings.
//!
//! ```rust
//! use viewkit::table::{Field, FooterMode};
//!
//! struct Trip { driver: String, km: f64 }
//!
//! let driver = Field::text("driver", "Driver", |t: &Trip| t.driver.clone());
//! let distance = Field::distance("distance", "Distance", |t: &Trip| t.km)
//!     .decimals(2)
//!     .footer(FooterMode::Sum);
//!
//! assert_eq!(distance.format_tag(), "distance");
//! assert_eq!(driver.id(), "driver");
//! ```

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use viewkit_format::Unit;

use crate::context::{translate, Translate, UserContext};
use crate::icon::IconSet;
use crate::value::Cell;

use super::types::{Align, ButtonDefinition, FooterMode, LinkValue, Width};

/// A shared, side-effect free row accessor.
pub type Accessor<R, V> = Rc<dyn Fn(&R) -> V>;

/// Which canonical unit a unit-bearing kind is stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Distance,
    Speed,
    Pressure,
}

/// Labels for a Bool column, as translation keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolLabels {
    pub yes: String,
    pub no: String,
}

impl Default for BoolLabels {
    fn default() -> Self {
        BoolLabels {
            yes: "Yes".to_string(),
            no: "No".to_string(),
        }
    }
}

/// The kind of a field, carrying an accessor whose type matches the kind.
pub enum FieldKind<R> {
    Id(Accessor<R, i64>),
    Int(Accessor<R, i64>),
    Float(Accessor<R, f64>),
    /// Kilometers.
    Distance(Accessor<R, f64>),
    /// Kilometers per hour.
    Speed(Accessor<R, f64>),
    /// Bar.
    Pressure(Accessor<R, f64>),
    /// Seconds.
    TimeLength(Accessor<R, i64>),
    Text(Accessor<R, String>),
    Html(Accessor<R, String>),
    Bool {
        value: Accessor<R, bool>,
        labels: BoolLabels,
    },
    DateTime(Accessor<R, Option<DateTime<Utc>>>),
    Date(Accessor<R, Option<DateTime<Utc>>>),
    Icon {
        key: Accessor<R, String>,
        icons: IconSet,
    },
    /// Per-row URL for each button; `None` hides that button on the row.
    Buttons {
        links: Accessor<R, Vec<Option<String>>>,
        buttons: Vec<ButtonDefinition>,
    },
    Link(Accessor<R, LinkValue>),
    Text2(Accessor<R, [String; 2]>),
    Int2(Accessor<R, [i64; 2]>),
    Float2(Accessor<R, [f64; 2]>),
    TextN(Accessor<R, Vec<String>>),
    IntN(Accessor<R, Vec<i64>>),
    FloatN(Accessor<R, Vec<f64>>),
    /// Layout-only column group marker; never produces data.
    Header,
    /// Editable cell; emits the raw value.
    Input(Accessor<R, Cell>),
}

impl<R> Clone for FieldKind<R> {
    fn clone(&self) -> Self {
        match self {
            FieldKind::Id(f) => FieldKind::Id(Rc::clone(f)),
            FieldKind::Int(f) => FieldKind::Int(Rc::clone(f)),
            FieldKind::Float(f) => FieldKind::Float(Rc::clone(f)),
            FieldKind::Distance(f) => FieldKind::Distance(Rc::clone(f)),
            FieldKind::Speed(f) => FieldKind::Speed(Rc::clone(f)),
            FieldKind::Pressure(f) => FieldKind::Pressure(Rc::clone(f)),
            FieldKind::TimeLength(f) => FieldKind::TimeLength(Rc::clone(f)),
            FieldKind::Text(f) => FieldKind::Text(Rc::clone(f)),
            FieldKind::Html(f) => FieldKind::Html(Rc::clone(f)),
            FieldKind::Bool { value, labels } => FieldKind::Bool {
                value: Rc::clone(value),
                labels: labels.clone(),
            },
            FieldKind::DateTime(f) => FieldKind::DateTime(Rc::clone(f)),
            FieldKind::Date(f) => FieldKind::Date(Rc::clone(f)),
            FieldKind::Icon { key, icons } => FieldKind::Icon {
                key: Rc::clone(key),
                icons: icons.clone(),
            },
            FieldKind::Buttons { links, buttons } => FieldKind::Buttons {
                links: Rc::clone(links),
                buttons: buttons.clone(),
            },
            FieldKind::Link(f) => FieldKind::Link(Rc::clone(f)),
            FieldKind::Text2(f) => FieldKind::Text2(Rc::clone(f)),
            FieldKind::Int2(f) => FieldKind::Int2(Rc::clone(f)),
            FieldKind::Float2(f) => FieldKind::Float2(Rc::clone(f)),
            FieldKind::TextN(f) => FieldKind::TextN(Rc::clone(f)),
            FieldKind::IntN(f) => FieldKind::IntN(Rc::clone(f)),
            FieldKind::FloatN(f) => FieldKind::FloatN(Rc::clone(f)),
            FieldKind::Header => FieldKind::Header,
            FieldKind::Input(f) => FieldKind::Input(Rc::clone(f)),
        }
    }
}

impl<R> FieldKind<R> {
    /// The `format` tag the frontend switches on.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Id(_) => "id",
            FieldKind::Int(_) => "int",
            FieldKind::Float(_) => "float",
            FieldKind::Distance(_) => "distance",
            FieldKind::Speed(_) => "speed",
            FieldKind::Pressure(_) => "pressure",
            FieldKind::TimeLength(_) => "timelength",
            FieldKind::Text(_) => "text",
            FieldKind::Html(_) => "html",
            FieldKind::Bool { .. } => "bool",
            FieldKind::DateTime(_) => "datetime",
            FieldKind::Date(_) => "date",
            FieldKind::Icon { .. } => "icon",
            FieldKind::Buttons { .. } => "buttons",
            FieldKind::Link(_) => "link",
            FieldKind::Text2(_) => "text2",
            FieldKind::Int2(_) => "int2",
            FieldKind::Float2(_) => "float2",
            FieldKind::TextN(_) => "textN",
            FieldKind::IntN(_) => "intN",
            FieldKind::FloatN(_) => "floatN",
            FieldKind::Header => "header",
            FieldKind::Input(_) => "input",
        }
    }

    /// Numeric kinds are right-aligned by default.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldKind::Id(_)
                | FieldKind::Int(_)
                | FieldKind::Float(_)
                | FieldKind::Distance(_)
                | FieldKind::Speed(_)
                | FieldKind::Pressure(_)
                | FieldKind::TimeLength(_)
                | FieldKind::Int2(_)
                | FieldKind::Float2(_)
                | FieldKind::IntN(_)
                | FieldKind::FloatN(_)
        )
    }

    /// Whether a sum footer is meaningful for this kind.
    pub fn is_summable(&self) -> bool {
        matches!(
            self,
            FieldKind::Id(_)
                | FieldKind::Int(_)
                | FieldKind::Float(_)
                | FieldKind::Distance(_)
                | FieldKind::Speed(_)
                | FieldKind::Pressure(_)
                | FieldKind::TimeLength(_)
        )
    }

    pub fn default_decimals(&self) -> u32 {
        match self {
            FieldKind::Float(_) | FieldKind::Float2(_) | FieldKind::FloatN(_) => 2,
            FieldKind::Distance(_) | FieldKind::Pressure(_) => 1,
            _ => 0,
        }
    }

    pub fn unit_kind(&self) -> Option<UnitKind> {
        match self {
            FieldKind::Distance(_) => Some(UnitKind::Distance),
            FieldKind::Speed(_) => Some(UnitKind::Speed),
            FieldKind::Pressure(_) => Some(UnitKind::Pressure),
            _ => None,
        }
    }
}

/// One column of a table.
pub struct Field<R> {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) kind: FieldKind<R>,
    pub(crate) align: Option<Align>,
    pub(crate) width: Option<Width>,
    pub(crate) sticky: bool,
    pub(crate) hidden: bool,
    pub(crate) header: Option<String>,
    pub(crate) header_span: Option<u32>,
    pub(crate) hint: Option<String>,
    pub(crate) prefix: String,
    pub(crate) suffix: String,
    pub(crate) order: Option<i32>,
    pub(crate) access: Vec<String>,
    pub(crate) footer: FooterMode,
    pub(crate) decimals: Option<u32>,
    pub(crate) csv: Option<bool>,
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Field {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            align: self.align,
            width: self.width.clone(),
            sticky: self.sticky,
            hidden: self.hidden,
            header: self.header.clone(),
            header_span: self.header_span,
            hint: self.hint.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            order: self.order,
            access: self.access.clone(),
            footer: self.footer.clone(),
            decimals: self.decimals,
            csv: self.csv,
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind.tag())
            .field("order", &self.order)
            .field("hidden", &self.hidden)
            .field("footer", &self.footer)
            .finish_non_exhaustive()
    }
}

impl<R> Field<R> {
    /// Creates a field from an explicit kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FieldKind<R>) -> Self {
        Field {
            id: id.into(),
            name: name.into(),
            kind,
            align: None,
            width: None,
            sticky: false,
            hidden: false,
            header: None,
            header_span: None,
            hint: None,
            prefix: String::new(),
            suffix: String::new(),
            order: None,
            access: Vec::new(),
            footer: FooterMode::None,
            decimals: None,
            csv: None,
        }
    }

    pub fn id_field(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> i64 + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Id(Rc::new(f)))
    }

    pub fn int(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> i64 + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Int(Rc::new(f)))
    }

    pub fn float(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> f64 + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Float(Rc::new(f)))
    }

    /// Distance in kilometers, shown in the viewer's distance unit.
    pub fn distance(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> f64 + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Distance(Rc::new(f)))
    }

    /// Speed in km/h, shown in the viewer's speed unit.
    pub fn speed(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> f64 + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Speed(Rc::new(f)))
    }

    /// Pressure in bar, shown in the viewer's pressure unit.
    pub fn pressure(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> f64 + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Pressure(Rc::new(f)))
    }

    /// Duration in seconds.
    pub fn time_length(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> i64 + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::TimeLength(Rc::new(f)))
    }

    pub fn text(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Text(Rc::new(f)))
    }

    pub fn html(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Html(Rc::new(f)))
    }

    pub fn bool(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> bool + 'static,
    ) -> Self {
        Self::new(
            id,
            name,
            FieldKind::Bool {
                value: Rc::new(f),
                labels: BoolLabels::default(),
            },
        )
    }

    pub fn datetime(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> Option<DateTime<Utc>> + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::DateTime(Rc::new(f)))
    }

    pub fn date(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> Option<DateTime<Utc>> + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Date(Rc::new(f)))
    }

    /// Icon column resolving each row's key through `icons`.
    pub fn icon(
        id: impl Into<String>,
        name: impl Into<String>,
        icons: IconSet,
        f: impl Fn(&R) -> String + 'static,
    ) -> Self {
        Self::new(
            id,
            name,
            FieldKind::Icon {
                key: Rc::new(f),
                icons,
            },
        )
    }

    /// Row action buttons. The accessor returns one entry per button:
    /// `Some(url)` shows it, `None` hides it on that row.
    pub fn buttons(
        id: impl Into<String>,
        name: impl Into<String>,
        buttons: Vec<ButtonDefinition>,
        f: impl Fn(&R) -> Vec<Option<String>> + 'static,
    ) -> Self {
        Self::new(
            id,
            name,
            FieldKind::Buttons {
                links: Rc::new(f),
                buttons,
            },
        )
    }

    pub fn link(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> LinkValue + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Link(Rc::new(f)))
    }

    pub fn text2(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> [String; 2] + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Text2(Rc::new(f)))
    }

    pub fn int2(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> [i64; 2] + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Int2(Rc::new(f)))
    }

    pub fn float2(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> [f64; 2] + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Float2(Rc::new(f)))
    }

    pub fn text_n(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> Vec<String> + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::TextN(Rc::new(f)))
    }

    pub fn int_n(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> Vec<i64> + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::IntN(Rc::new(f)))
    }

    pub fn float_n(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> Vec<f64> + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::FloatN(Rc::new(f)))
    }

    /// Column group header. Spans `span` following columns.
    pub fn header_group(id: impl Into<String>, name: impl Into<String>, span: u32) -> Self {
        let mut field = Self::new(id, name, FieldKind::Header);
        field.header_span = Some(span);
        field
    }

    /// Editable column; the save endpoint is set on the table.
    pub fn input(
        id: impl Into<String>,
        name: impl Into<String>,
        f: impl Fn(&R) -> Cell + 'static,
    ) -> Self {
        Self::new(id, name, FieldKind::Input(Rc::new(f)))
    }

    // ---------------------------------------------------------------------
    // Options
    // ---------------------------------------------------------------------

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn left(self) -> Self {
        self.align(Align::Left)
    }

    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Fixed CSS width. Replaces any minimum width.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(Width::Fixed(width.into()));
        self
    }

    /// Responsive minimum CSS width. Replaces any fixed width.
    pub fn min_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(Width::Min(width.into()));
        self
    }

    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }

    /// Excludes the column from output while keeping it registered.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Overrides the header text shown above the column name.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn header_span(mut self, span: u32) -> Self {
        self.header_span = Some(span);
        self
    }

    /// Hover hint, as a translation key.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Literal text put before every formatted value.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Literal text put after every formatted value.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Explicit column position. Without one, the registration index is used.
    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Permissions allowed to see this column; any one of them suffices.
    pub fn access<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.access = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn footer(mut self, footer: FooterMode) -> Self {
        self.footer = footer;
        self
    }

    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Includes or excludes the column from CSV, PDF and Excel output.
    pub fn csv(mut self, visible: bool) -> Self {
        self.csv = Some(visible);
        self
    }

    /// Overrides the yes/no labels of a Bool column. Other kinds ignore this.
    pub fn labels(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        if let FieldKind::Bool { labels, .. } = &mut self.kind {
            labels.yes = yes.into();
            labels.no = no.into();
        }
        self
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The name's translation key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind<R> {
        &self.kind
    }

    pub fn format_tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn footer_mode(&self) -> &FooterMode {
        &self.footer
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn explicit_order(&self) -> Option<i32> {
        self.order
    }

    pub fn access_list(&self) -> &[String] {
        &self.access
    }

    /// Effective alignment: explicit, else right for numeric kinds.
    pub fn effective_align(&self) -> Align {
        self.align.unwrap_or(if self.kind.is_numeric() {
            Align::Right
        } else {
            Align::Left
        })
    }

    pub fn effective_decimals(&self) -> u32 {
        self.decimals.unwrap_or_else(|| self.kind.default_decimals())
    }

    /// Whether the column appears in CSV, PDF and Excel output.
    pub fn is_exported(&self) -> bool {
        match self.kind {
            FieldKind::Header => false,
            FieldKind::Buttons { .. } => self.csv.unwrap_or(false),
            _ => self.csv.unwrap_or(true),
        }
    }

    /// Visible to this viewer at all.
    pub fn is_visible_to(&self, ctx: &UserContext) -> bool {
        !self.hidden && ctx.can_access(&self.access)
    }

    /// Field metadata for the frontend.
    pub(crate) fn definition(&self, ctx: &UserContext, translator: Option<&dyn Translate>) -> Value {
        let mut def = Map::new();
        def.insert("id".into(), json!(self.id));
        def.insert("name".into(), json!(translate(translator, &self.name)));
        def.insert("format".into(), json!(self.kind.tag()));
        def.insert("align".into(), json!(self.effective_align().as_str()));
        def.insert("sticky".into(), json!(self.sticky));

        if let Some(width) = &self.width {
            def.insert(width.key().into(), json!(width.value()));
        }
        if let Some(hint) = &self.hint {
            def.insert("hint".into(), json!(translate(translator, hint)));
        }
        if let Some(header) = &self.header {
            def.insert("header".into(), json!(translate(translator, header)));
        }
        if let Some(span) = self.header_span {
            def.insert("headerSpan".into(), json!(span));
        }
        if !self.access.is_empty() {
            def.insert("access".into(), json!(self.access));
        }
        if let Some(tag) = self.footer.tag() {
            def.insert("footer".into(), json!(tag));
        }
        if self.kind.is_numeric() && !matches!(self.kind, FieldKind::TimeLength(_)) {
            def.insert("decimals".into(), json!(self.effective_decimals()));
        }
        if !self.prefix.is_empty() {
            def.insert("prefix".into(), json!(self.prefix));
        }
        if !self.suffix.is_empty() {
            def.insert("suffix".into(), json!(self.suffix));
        }
        if let Some(unit) = self.kind.unit_kind() {
            let units = ctx.units();
            let label = match unit {
                UnitKind::Distance => units.distance.label(),
                UnitKind::Speed => units.speed.label(),
                UnitKind::Pressure => units.pressure.label(),
            };
            def.insert("unit".into(), json!(label));
        }
        if let FieldKind::Buttons { buttons, .. } = &self.kind {
            let defs: Vec<Value> = buttons.iter().map(|b| b.definition(translator)).collect();
            def.insert("buttons".into(), Value::Array(defs));
        }

        Value::Object(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ButtonAction;

    struct Vehicle {
        id: i64,
        name: String,
    }

    #[test]
    fn default_alignment_follows_kind() {
        let id = Field::id_field("id", "ID", |v: &Vehicle| v.id);
        let name = Field::text("name", "Name", |v: &Vehicle| v.name.clone());
        assert_eq!(id.effective_align(), Align::Right);
        assert_eq!(name.effective_align(), Align::Left);
        assert_eq!(name.center().effective_align(), Align::Center);
    }

    #[test]
    fn default_decimals_per_kind() {
        assert_eq!(Field::int("n", "N", |_: &Vehicle| 1).effective_decimals(), 0);
        assert_eq!(Field::float("f", "F", |_: &Vehicle| 1.0).effective_decimals(), 2);
        assert_eq!(Field::distance("d", "D", |_: &Vehicle| 1.0).effective_decimals(), 1);
        assert_eq!(Field::speed("s", "S", |_: &Vehicle| 1.0).effective_decimals(), 0);
        assert_eq!(
            Field::float("f", "F", |_: &Vehicle| 1.0).decimals(4).effective_decimals(),
            4
        );
    }

    #[test]
    fn width_and_min_width_are_exclusive() {
        let field = Field::text("name", "Name", |v: &Vehicle| v.name.clone())
            .width("100px")
            .min_width("80px");
        assert_eq!(field.width, Some(Width::Min("80px".into())));
    }

    #[test]
    fn buttons_are_not_exported_by_default() {
        let buttons = Field::buttons("actions", "", vec![], |_: &Vehicle| vec![]);
        assert!(!buttons.is_exported());
        assert!(buttons.csv(true).is_exported());
        assert!(!Field::<Vehicle>::header_group("grp", "Group", 2).is_exported());
        assert!(Field::text("name", "Name", |v: &Vehicle| v.name.clone()).is_exported());
    }

    #[test]
    fn labels_only_apply_to_bool() {
        let field = Field::bool("active", "Active", |_: &Vehicle| true).labels("On", "Off");
        match field.kind() {
            FieldKind::Bool { labels, .. } => {
                assert_eq!(labels.yes, "On");
                assert_eq!(labels.no, "Off");
            }
            _ => panic!("expected bool kind"),
        }
    }

    #[test]
    fn visibility_combines_hidden_and_access() {
        let ctx = UserContext::new().with_permission("fleet.admin");
        let field = Field::text("vin", "VIN", |v: &Vehicle| v.name.clone());
        assert!(field.is_visible_to(&ctx));
        assert!(!field.clone().hidden().is_visible_to(&ctx));
        assert!(field.clone().access(["fleet.admin"]).is_visible_to(&ctx));
        assert!(!field.access(["billing"]).is_visible_to(&ctx));
    }

    #[test]
    fn definition_contains_layout_options() {
        let ctx = UserContext::new().with_distance_unit(viewkit_format::DistanceUnit::Miles);
        let field = Field::distance("distance", "Distance", |_: &Vehicle| 0.0)
            .min_width("90px")
            .hint("Driven distance")
            .footer(FooterMode::Sum)
            .sticky();
        let def = field.definition(&ctx, None);
        assert_eq!(def["id"], "distance");
        assert_eq!(def["format"], "distance");
        assert_eq!(def["align"], "right");
        assert_eq!(def["minWidth"], "90px");
        assert_eq!(def["footer"], "sum");
        assert_eq!(def["unit"], "mi");
        assert_eq!(def["decimals"], 1);
        assert_eq!(def["sticky"], true);
        assert!(def.get("width").is_none());
        assert!(def.get("access").is_none());
    }

    #[test]
    fn definition_lists_buttons() {
        let field = Field::buttons(
            "actions",
            "Actions",
            vec![ButtonDefinition::new(ButtonAction::Edit, "mdi-pencil")],
            |_: &Vehicle| vec![None],
        );
        let def = field.definition(&UserContext::new(), None);
        assert_eq!(def["buttons"][0]["action"], "edit");
        assert_eq!(def["buttons"][0]["icon"], "mdi-pencil");
    }
}
