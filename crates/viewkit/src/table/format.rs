//! Per-kind value formatting.
//!
//! Each field turns a row's raw value into a [`Cell`] shaped for the output
//! target:
//!
//! | Kind | Web | Export (CSV/PDF/Excel) |
//! |------|-----|------------------------|
//! | Int, Float, Distance, Speed, Pressure | `[display, number]` | `display` |
//! | Bool | translated label | translated label |
//! | DateTime | `YYYY-MM-DD HH:MM` | `YYYY-MM-DD HH:MM:SS` |
//! | Date | `YYYY-MM-DD` | `YYYY-MM-DD` |
//! | TimeLength | `HH:MM` / `{d}d HH:MM` | whole minutes |
//! | Link | `{id}` text + `{id}Link` url | text only |
//! | Icon | `{icon, color, hint}` or `null` | translated hint |
//! | Buttons | `{"0": url or false, ...}` | visible urls, comma separated |
//! | Text2, Int2, Float2 | `[a, b]` | `"a - b"` |
//! | TextN, IntN, FloatN | `[a, b, ...]` | `[a, b, ...]` |

use std::collections::BTreeMap;

use chrono_tz::Tz;
use viewkit_format::{
    format_date, format_datetime, format_integer, format_number, format_time_length, round_to,
    time_length_minutes, NumberFormat, Precision, Unit,
};

use crate::context::{translate, OutputTarget, Translate, UnitPreferences, UserContext};
use crate::value::{Cell, RowData};

use super::field::{Field, FieldKind, UnitKind};

/// Everything a field needs to render one value.
#[derive(Clone, Copy)]
pub(crate) struct RenderEnv<'a> {
    pub target: OutputTarget,
    pub number_format: NumberFormat,
    pub timezone: Tz,
    pub units: UnitPreferences,
    pub translator: Option<&'a dyn Translate>,
}

impl<'a> RenderEnv<'a> {
    pub fn new(
        ctx: &UserContext,
        target: OutputTarget,
        translator: Option<&'a dyn Translate>,
    ) -> Self {
        RenderEnv {
            target,
            number_format: ctx.number_format(),
            timezone: ctx.timezone,
            units: ctx.units(),
            translator,
        }
    }

    pub fn with_units(mut self, units: UnitPreferences) -> Self {
        self.units = units;
        self
    }

    fn unit(&self, kind: UnitKind) -> (f64, &'static str) {
        match kind {
            UnitKind::Distance => (self.units.distance.factor(), self.units.distance.label()),
            UnitKind::Speed => (self.units.speed.factor(), self.units.speed.label()),
            UnitKind::Pressure => (self.units.pressure.factor(), self.units.pressure.label()),
        }
    }
}

/// Key of the extra URL entry emitted by Link fields on the web.
pub(crate) fn link_key(id: &str) -> String {
    format!("{id}Link")
}

impl<R> Field<R> {
    /// Renders this field for one row into `out`.
    pub(crate) fn render_into(&self, row: &R, env: &RenderEnv<'_>, out: &mut RowData) {
        match &self.kind {
            FieldKind::Header => {}
            FieldKind::Link(get) => {
                let link = get(row);
                out.insert(self.id.clone(), Cell::Text(self.affix(&link.text)));
                if !env.target.is_export() {
                    out.insert(link_key(&self.id), Cell::Text(link.url));
                }
            }
            _ => {
                out.insert(self.id.clone(), self.render_value(row, env));
            }
        }
    }

    /// The rendered value of a single-key field.
    pub(crate) fn render_value(&self, row: &R, env: &RenderEnv<'_>) -> Cell {
        let export = env.target.is_export();
        match &self.kind {
            FieldKind::Id(get) | FieldKind::Int(get) => self.int_cell(get(row), env),
            FieldKind::Float(get) => self.float_cell(get(row), None, env),
            FieldKind::Distance(get) => self.float_cell(get(row), Some(UnitKind::Distance), env),
            FieldKind::Speed(get) => self.float_cell(get(row), Some(UnitKind::Speed), env),
            FieldKind::Pressure(get) => self.float_cell(get(row), Some(UnitKind::Pressure), env),
            FieldKind::TimeLength(get) => self.time_length_cell(get(row), env),
            FieldKind::Text(get) => Cell::Text(self.affix(&get(row))),
            FieldKind::Html(get) => {
                let html = get(row);
                if export {
                    Cell::Text(self.affix(&strip_tags(&html)))
                } else {
                    Cell::Text(self.affix(&html))
                }
            }
            FieldKind::Bool { value, labels } => {
                let key = if value(row) { &labels.yes } else { &labels.no };
                Cell::Text(translate(env.translator, key))
            }
            FieldKind::DateTime(get) => {
                let precision = if export {
                    Precision::Seconds
                } else {
                    Precision::Minutes
                };
                Cell::Text(
                    get(row)
                        .map(|t| format_datetime(t, env.timezone, precision))
                        .unwrap_or_default(),
                )
            }
            FieldKind::Date(get) => Cell::Text(
                get(row)
                    .map(|t| format_date(t, env.timezone))
                    .unwrap_or_default(),
            ),
            FieldKind::Icon { key, icons } => {
                let key = key(row);
                if export {
                    Cell::Text(
                        icons
                            .resolve(&key)
                            .filter(|def| !def.hint.is_empty())
                            .map(|def| translate(env.translator, &def.hint))
                            .unwrap_or_default(),
                    )
                } else {
                    icons.resolve_cell(&key, env.translator)
                }
            }
            FieldKind::Buttons { links, buttons } => {
                let links = links(row);
                if export {
                    let urls: Vec<String> = links.into_iter().flatten().collect();
                    Cell::Text(urls.join(", "))
                } else {
                    let mut map = BTreeMap::new();
                    for index in 0..buttons.len() {
                        let cell = match links.get(index) {
                            Some(Some(url)) if !url.is_empty() => Cell::Text(url.clone()),
                            _ => Cell::Bool(false),
                        };
                        map.insert(index.to_string(), cell);
                    }
                    Cell::Map(map)
                }
            }
            FieldKind::Link(get) => Cell::Text(self.affix(&get(row).text)),
            FieldKind::Text2(get) => {
                let parts = get(row).map(|s| self.affix(&s));
                self.pair_cell(parts, env)
            }
            FieldKind::Int2(get) => {
                let parts = get(row).map(|n| self.int_text(n, env));
                self.pair_cell(parts, env)
            }
            FieldKind::Float2(get) => {
                let parts = get(row).map(|n| self.float_text(n, env));
                self.pair_cell(parts, env)
            }
            FieldKind::TextN(get) => {
                Cell::List(get(row).iter().map(|s| Cell::Text(self.affix(s))).collect())
            }
            FieldKind::IntN(get) => Cell::List(
                get(row)
                    .into_iter()
                    .map(|n| Cell::Text(self.int_text(n, env)))
                    .collect(),
            ),
            FieldKind::FloatN(get) => Cell::List(
                get(row)
                    .into_iter()
                    .map(|n| Cell::Text(self.float_text(n, env)))
                    .collect(),
            ),
            FieldKind::Header => Cell::Null,
            FieldKind::Input(get) => get(row),
        }
    }

    /// Whether the row's raw value counts for a count footer.
    pub(crate) fn is_present(&self, row: &R) -> bool {
        match &self.kind {
            FieldKind::Id(get) | FieldKind::Int(get) | FieldKind::TimeLength(get) => get(row) != 0,
            FieldKind::Float(get)
            | FieldKind::Distance(get)
            | FieldKind::Speed(get)
            | FieldKind::Pressure(get) => {
                let v = get(row);
                v != 0.0 && !v.is_nan()
            }
            FieldKind::Text(get) | FieldKind::Html(get) => !get(row).is_empty(),
            FieldKind::Bool { value, .. } => value(row),
            FieldKind::DateTime(get) | FieldKind::Date(get) => get(row).is_some(),
            FieldKind::Icon { key, icons } => icons.contains(&key(row)),
            FieldKind::Buttons { links, .. } => links(row).iter().any(Option::is_some),
            FieldKind::Link(get) => !get(row).text.is_empty(),
            FieldKind::Text2(get) => get(row).iter().any(|s| !s.is_empty()),
            FieldKind::Int2(get) => get(row).iter().any(|n| *n != 0),
            FieldKind::Float2(get) => get(row).iter().any(|n| *n != 0.0),
            FieldKind::TextN(get) => !get(row).is_empty(),
            FieldKind::IntN(get) => !get(row).is_empty(),
            FieldKind::FloatN(get) => !get(row).is_empty(),
            FieldKind::Header => false,
            FieldKind::Input(get) => get(row).is_truthy(),
        }
    }

    // ---------------------------------------------------------------------
    // Value helpers, shared with footer aggregation
    // ---------------------------------------------------------------------

    pub(crate) fn affix(&self, text: &str) -> String {
        if self.prefix.is_empty() && self.suffix.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", self.prefix, text, self.suffix)
    }

    fn int_text(&self, value: i64, env: &RenderEnv<'_>) -> String {
        let decimals = self.effective_decimals();
        let number = if decimals == 0 {
            format_integer(value, &env.number_format)
        } else {
            format_number(value as f64, decimals, &env.number_format)
        };
        self.affix(&number)
    }

    fn float_text(&self, value: f64, env: &RenderEnv<'_>) -> String {
        self.affix(&format_number(
            value,
            self.effective_decimals(),
            &env.number_format,
        ))
    }

    pub(crate) fn int_cell(&self, value: i64, env: &RenderEnv<'_>) -> Cell {
        let display = self.int_text(value, env);
        if env.target.is_export() {
            Cell::Text(display)
        } else {
            Cell::Pair(display, value as f64)
        }
    }

    /// Converts from the canonical unit, rounds, then formats.
    pub(crate) fn float_cell(&self, value: f64, unit: Option<UnitKind>, env: &RenderEnv<'_>) -> Cell {
        let decimals = self.effective_decimals();
        let (converted, label) = match unit {
            Some(kind) => {
                let (factor, label) = env.unit(kind);
                (value * factor, Some(label))
            }
            None => (value, None),
        };
        let rounded = round_to(converted, decimals);
        let mut display = self.affix(&format_number(rounded, decimals, &env.number_format));
        if let Some(label) = label {
            display.push(' ');
            display.push_str(label);
        }
        if env.target.is_export() {
            Cell::Text(display)
        } else {
            Cell::Pair(display, rounded)
        }
    }

    pub(crate) fn time_length_cell(&self, seconds: i64, env: &RenderEnv<'_>) -> Cell {
        if env.target.is_export() {
            Cell::Text(time_length_minutes(seconds).to_string())
        } else {
            Cell::Text(self.affix(&format_time_length(seconds)))
        }
    }

    fn pair_cell(&self, [a, b]: [String; 2], env: &RenderEnv<'_>) -> Cell {
        if env.target.is_export() {
            Cell::Text(format!("{a} - {b}"))
        } else {
            Cell::List(vec![Cell::Text(a), Cell::Text(b)])
        }
    }
}

/// Removes markup and decodes the common entities, for plain-text exports.
pub(crate) fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
