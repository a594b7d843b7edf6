//! Footer aggregation across the current rows.
//!
//! Sums are taken over raw, canonical values and formatted once, exactly like
//! a single cell of the same field: a distance sum is converted to the
//! viewer's unit after summing, never summed from already rounded values.

use crate::context::translate;
use crate::value::Cell;

use super::field::{Field, FieldKind, UnitKind};
use super::format::RenderEnv;
use super::types::FooterMode;

impl<R> Field<R> {
    /// The footer cell for this field, or `None` when it has no footer.
    pub(crate) fn footer_cell(&self, rows: &[R], env: &RenderEnv<'_>) -> Option<Cell> {
        match &self.footer {
            FooterMode::None => None,
            FooterMode::Sum => Some(self.sum_cell(rows, env)),
            FooterMode::Count => {
                let count = rows.iter().filter(|row| self.is_present(row)).count();
                Some(Cell::Int(count as i64))
            }
            FooterMode::Static(text) => Some(Cell::Text(translate(env.translator, text))),
        }
    }

    fn sum_cell(&self, rows: &[R], env: &RenderEnv<'_>) -> Cell {
        match &self.kind {
            FieldKind::Id(get) | FieldKind::Int(get) => {
                let total = rows.iter().fold(0i64, |acc, row| acc.saturating_add(get(row)));
                self.int_cell(total, env)
            }
            FieldKind::TimeLength(get) => {
                let total = rows.iter().fold(0i64, |acc, row| acc.saturating_add(get(row)));
                self.time_length_cell(total, env)
            }
            FieldKind::Float(get) => self.float_cell(self.sum_f64(rows, &**get), None, env),
            FieldKind::Distance(get) => self.float_cell(
                self.sum_f64(rows, &**get),
                Some(UnitKind::Distance),
                env,
            ),
            FieldKind::Speed(get) => {
                self.float_cell(self.sum_f64(rows, &**get), Some(UnitKind::Speed), env)
            }
            FieldKind::Pressure(get) => self.float_cell(
                self.sum_f64(rows, &**get),
                Some(UnitKind::Pressure),
                env,
            ),
            // Rejected by Builder::build; a hand-assembled table gets an empty cell.
            _ => Cell::Null,
        }
    }

    fn sum_f64(&self, rows: &[R], get: &dyn Fn(&R) -> f64) -> f64 {
        let total: f64 = rows.iter().map(get).sum();
        if !total.is_finite() {
            tracing::warn!(field = %self.id, "footer sum is not finite");
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{OutputTarget, UserContext};
    use serde_json::json;
    use viewkit_format::DistanceUnit;

    struct Leg {
        km: f64,
        refuel: bool,
        seconds: i64,
    }

    fn legs() -> Vec<Leg> {
        vec![
            Leg {
                km: 196.5,
                refuel: true,
                seconds: 2700,
            },
            Leg {
                km: 342.8,
                refuel: false,
                seconds: 19_800,
            },
            Leg {
                km: 89.2,
                refuel: true,
                seconds: 600,
            },
        ]
    }

    fn footer<R>(
        field: &Field<R>,
        rows: &[R],
        ctx: &UserContext,
        target: OutputTarget,
    ) -> serde_json::Value {
        let env = RenderEnv::new(ctx, target, None);
        serde_json::to_value(field.footer_cell(rows, &env)).unwrap()
    }

    #[test]
    fn sum_in_german_locale() {
        let ctx = UserContext::new().with_locale("de");
        let field = Field::float("km", "Km", |l: &Leg| l.km)
            .decimals(3)
            .footer(FooterMode::Sum);
        assert_eq!(
            footer(&field, &legs(), &ctx, OutputTarget::Web),
            json!(["628,500", 628.5])
        );
        assert_eq!(
            footer(&field, &legs(), &ctx, OutputTarget::Csv),
            json!("628,500")
        );
    }

    #[test]
    fn distance_sum_converts_once() {
        let ctx = UserContext::new().with_distance_unit(DistanceUnit::Miles);
        let field = Field::distance("km", "Km", |l: &Leg| l.km)
            .decimals(2)
            .footer(FooterMode::Sum);
        // 628.5 km * 0.621371
        assert_eq!(
            footer(&field, &legs(), &ctx, OutputTarget::Web),
            json!(["390.53 mi", 390.53])
        );
    }

    #[test]
    fn count_of_true_values() {
        let ctx = UserContext::new();
        let field = Field::bool("refuel", "Refuel", |l: &Leg| l.refuel).footer(FooterMode::Count);
        assert_eq!(footer(&field, &legs(), &ctx, OutputTarget::Web), json!(2));
    }

    #[test]
    fn time_length_sum() {
        let ctx = UserContext::new();
        let field = Field::time_length("t", "T", |l: &Leg| l.seconds).footer(FooterMode::Sum);
        assert_eq!(footer(&field, &legs(), &ctx, OutputTarget::Web), json!("06:25"));
        assert_eq!(footer(&field, &legs(), &ctx, OutputTarget::Csv), json!("385"));
    }

    #[test]
    fn static_footer_is_translated() {
        let ctx = UserContext::new();
        let field = Field::text("label", "Label", |_: &Leg| String::new())
            .footer(FooterMode::Static("Total".into()));
        let german = |key: &str| {
            if key == "Total" {
                "Summe".to_string()
            } else {
                key.to_string()
            }
        };
        let env = RenderEnv::new(&ctx, OutputTarget::Web, Some(&german));
        assert_eq!(
            field.footer_cell(&legs(), &env),
            Some(Cell::Text("Summe".into()))
        );
    }

    #[test]
    fn no_footer_mode_yields_none() {
        let ctx = UserContext::new();
        let field = Field::float("km", "Km", |l: &Leg| l.km);
        let env = RenderEnv::new(&ctx, OutputTarget::Web, None);
        assert_eq!(field.footer_cell(&legs(), &env), None);
    }

    #[test]
    fn empty_rows_sum_to_zero() {
        let ctx = UserContext::new();
        let field = Field::int("n", "N", |_: &Leg| 5).footer(FooterMode::Sum);
        assert_eq!(footer(&field, &[], &ctx, OutputTarget::Web), json!(["0", 0.0]));
    }
}
