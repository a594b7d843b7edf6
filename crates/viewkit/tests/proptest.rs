//! Property-based tests for table building and rendering.

use proptest::prelude::*;
use viewkit::context::{OutputTarget, UserContext};
use viewkit::table::{Builder, Field, FooterMode};
use viewkit::Cell;

#[derive(Debug, Clone)]
struct Sample {
    amount: f64,
    count: i64,
    flag: bool,
}

fn sample_strategy() -> impl Strategy<Value = Sample> {
    (-1.0e6f64..1.0e6, -1000i64..1000, any::<bool>()).prop_map(|(amount, count, flag)| Sample {
        amount,
        count,
        flag,
    })
}

proptest! {
    /// Columns come out sorted by effective order, ties in registration order.
    #[test]
    fn column_order_is_stable(orders in prop::collection::vec(prop::option::of(-5i32..5), 0..12)) {
        let fields = orders.iter().enumerate().map(|(index, order)| {
            let field = Field::int(format!("f{index}"), "F", |s: &Sample| s.count);
            match order {
                Some(order) => field.order(*order),
                None => field,
            }
        });
        let table = Builder::new(UserContext::new()).fields(fields).build().unwrap();

        let mut expected: Vec<(i64, usize)> = orders
            .iter()
            .enumerate()
            .map(|(index, order)| (order.map_or(index as i64, i64::from), index))
            .collect();
        expected.sort();
        let expected: Vec<String> = expected.into_iter().map(|(_, index)| format!("f{index}")).collect();
        let actual: Vec<String> = table.fields().iter().map(|f| f.id().to_string()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Every row renders every visible field, for every target.
    #[test]
    fn one_map_per_row(rows in prop::collection::vec(sample_strategy(), 0..30)) {
        let mut table = Builder::new(UserContext::new())
            .field(Field::float("amount", "Amount", |s: &Sample| s.amount))
            .field(Field::int("count", "Count", |s: &Sample| s.count).hidden())
            .field(Field::bool("flag", "Flag", |s: &Sample| s.flag))
            .build()
            .unwrap();
        table.set_data(rows.clone());
        for target in [OutputTarget::Web, OutputTarget::Csv, OutputTarget::Pdf, OutputTarget::Excel] {
            let data = table.get_data(target);
            prop_assert_eq!(data.len(), rows.len());
            for row in &data {
                prop_assert_eq!(row.len(), 2);
                prop_assert!(row.contains_key("amount"));
                prop_assert!(row.contains_key("flag"));
            }
        }
    }

    /// The count footer equals the number of true flags.
    #[test]
    fn count_footer_counts_true_flags(rows in prop::collection::vec(sample_strategy(), 0..30)) {
        let mut table = Builder::new(UserContext::new())
            .field(Field::bool("flag", "Flag", |s: &Sample| s.flag).footer(FooterMode::Count))
            .build()
            .unwrap();
        let expected = rows.iter().filter(|s| s.flag).count() as i64;
        table.set_data(rows);
        let footer = table.calculate_footer(OutputTarget::Web);
        prop_assert_eq!(footer.get("flag"), Some(&Cell::Int(expected)));
    }

    /// An integer sum footer carries the exact total as its numeric half.
    #[test]
    fn int_sum_matches_total(rows in prop::collection::vec(sample_strategy(), 0..30)) {
        let mut table = Builder::new(UserContext::new())
            .field(Field::int("count", "Count", |s: &Sample| s.count).footer(FooterMode::Sum))
            .build()
            .unwrap();
        let expected: i64 = rows.iter().map(|s| s.count).sum();
        table.set_data(rows);
        let footer = table.calculate_footer(OutputTarget::Web);
        prop_assert_eq!(footer["count"].as_f64(), Some(expected as f64));
    }

    /// Switching to a URL always drops the rows, whatever they were.
    #[test]
    fn url_clears_rows(rows in prop::collection::vec(sample_strategy(), 0..10), url in "/[a-z]{1,12}") {
        let mut table = Builder::new(UserContext::new())
            .field(Field::float("amount", "Amount", |s: &Sample| s.amount))
            .build()
            .unwrap();
        table.set_data(rows);
        table.set_url(url.clone());
        prop_assert_eq!(table.row_count(), 0);
        prop_assert!(table.get_data(OutputTarget::Web).is_empty());
        let payload = table.print(None);
        prop_assert_eq!(payload["url"].as_str(), Some(url.as_str()));
    }
}
