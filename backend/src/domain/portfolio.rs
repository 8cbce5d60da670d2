//! Portfolio aggregation over a holdings snapshot.
//!
//! Every function recomputes from the full snapshot; nothing is cached.
//! Percentages are guarded so an empty or zero-valued portfolio reports 0
//! rather than NaN.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::holding::{AssetClass, Holding};

/// Sum of all holding values; 0 for an empty snapshot.
#[must_use]
pub fn total(snapshot: &[Holding]) -> f64 {
    snapshot.iter().map(Holding::value).sum()
}

/// Mean holding value; 0 for an empty snapshot.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "holding counts stay far below 2^52"
)]
pub fn average(snapshot: &[Holding]) -> f64 {
    if snapshot.is_empty() {
        return 0.0;
    }
    total(snapshot) / snapshot.len() as f64
}

/// `part / whole * 100`, or 0 when `whole` is not positive.
#[must_use]
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// Per-class value sums for the classes present in the snapshot.
#[must_use]
pub fn class_totals(snapshot: &[Holding]) -> BTreeMap<AssetClass, f64> {
    snapshot
        .iter()
        .fold(BTreeMap::new(), |mut totals, holding| {
            *totals.entry(holding.asset_class()).or_insert(0.0) += holding.value();
            totals
        })
}

/// Share of `total` held in each class present in the snapshot.
///
/// `total` is taken as given so callers that already computed it (the
/// advisor receives it alongside the snapshot) divide by the same figure.
#[must_use]
pub fn allocation(snapshot: &[Holding], total: f64) -> BTreeMap<AssetClass, f64> {
    class_totals(snapshot)
        .into_iter()
        .map(|(class, sum)| (class, percentage_of(sum, total)))
        .collect()
}

/// Aggregate figures for one asset class.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub asset_class: AssetClass,
    pub total_value: f64,
    pub count: usize,
    pub average_value: f64,
    pub percentage: f64,
}

/// Group the snapshot by asset class.
///
/// Rows are ordered by class label.
///
/// # Examples
/// ```
/// use chrono::NaiveDateTime;
/// use finsight::domain::portfolio::breakdown;
/// use finsight::domain::{AssetClass, Holding, HoldingId, Username};
///
/// let owner = Username::new("ada").expect("username");
/// let snapshot = vec![
///     Holding::from_parts(HoldingId::new(1), owner.clone(), "A".into(), AssetClass::Stock, 300.0, NaiveDateTime::default()),
///     Holding::from_parts(HoldingId::new(2), owner, "B".into(), AssetClass::Gold, 100.0, NaiveDateTime::default()),
/// ];
/// let rows = breakdown(&snapshot);
/// assert_eq!(rows[0].asset_class, AssetClass::Gold);
/// assert_eq!(rows[1].percentage, 75.0);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "holding counts stay far below 2^52"
)]
pub fn breakdown(snapshot: &[Holding]) -> Vec<ClassSummary> {
    let grand_total = total(snapshot);
    let mut groups: BTreeMap<AssetClass, (f64, usize)> = BTreeMap::new();
    for holding in snapshot {
        let entry = groups.entry(holding.asset_class()).or_insert((0.0, 0));
        entry.0 += holding.value();
        entry.1 += 1;
    }

    let mut rows: Vec<ClassSummary> = groups
        .into_iter()
        .map(|(asset_class, (sum, count))| ClassSummary {
            asset_class,
            total_value: sum,
            count,
            average_value: sum / count as f64,
            percentage: percentage_of(sum, grand_total),
        })
        .collect();
    rows.sort_by_key(|row| row.asset_class.label());
    rows
}

/// Round to two decimal places for presentation.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HoldingId, Username};
    use chrono::NaiveDateTime;
    use rstest::{fixture, rstest};

    fn holding(id: i64, class: AssetClass, value: f64) -> Holding {
        Holding::from_parts(
            HoldingId::new(id),
            Username::new("ada").expect("username"),
            format!("asset-{id}"),
            class,
            value,
            NaiveDateTime::default(),
        )
    }

    #[fixture]
    fn mixed() -> Vec<Holding> {
        vec![
            holding(1, AssetClass::Stock, 40_000.0),
            holding(2, AssetClass::Crypto, 10_000.0),
            holding(3, AssetClass::Stock, 20_000.0),
            holding(4, AssetClass::RealEstate, 25_000.0),
            holding(5, AssetClass::Gold, 5_000.0),
        ]
    }

    #[rstest]
    fn empty_snapshot_is_zero_everywhere() {
        assert_eq!(total(&[]), 0.0);
        assert_eq!(average(&[]), 0.0);
        assert!(breakdown(&[]).is_empty());
        assert!(allocation(&[], 0.0).is_empty());
    }

    #[rstest]
    fn total_and_average_match_arithmetic(mixed: Vec<Holding>) {
        assert_eq!(total(&mixed), 100_000.0);
        assert_eq!(average(&mixed), 20_000.0);
    }

    #[rstest]
    fn breakdown_groups_by_class_in_label_order(mixed: Vec<Holding>) {
        let rows = breakdown(&mixed);
        let labels: Vec<&str> = rows.iter().map(|row| row.asset_class.label()).collect();
        assert_eq!(labels, ["Crypto", "Gold", "Real Estate", "Stock"]);

        let stock = rows
            .iter()
            .find(|row| row.asset_class == AssetClass::Stock)
            .expect("stock row");
        assert_eq!(stock.count, 2);
        assert_eq!(stock.total_value, 60_000.0);
        assert_eq!(stock.average_value, 30_000.0);
        assert_eq!(stock.percentage, 60.0);
    }

    #[rstest]
    fn breakdown_percentages_sum_to_one_hundred(mixed: Vec<Holding>) {
        let sum: f64 = breakdown(&mixed).iter().map(|row| row.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "percentages summed to {sum}");
    }

    #[rstest]
    fn uneven_values_still_sum_to_one_hundred() {
        let snapshot = vec![
            holding(1, AssetClass::Stock, 1.0 / 3.0),
            holding(2, AssetClass::Others, 2.0 / 7.0),
            holding(3, AssetClass::MutualFund, 1234.567),
        ];
        let sum: f64 = breakdown(&snapshot).iter().map(|row| row.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "percentages summed to {sum}");
    }

    #[rstest]
    fn percentage_is_guarded_against_zero_total() {
        assert_eq!(percentage_of(10.0, 0.0), 0.0);
        assert_eq!(allocation(&[holding(1, AssetClass::Gold, 5.0)], 0.0)[&AssetClass::Gold], 0.0);
    }

    #[rstest]
    #[case(1.005, 1.0)]
    #[case(2.675_1, 2.68)]
    #[case(103_000.0, 103_000.0)]
    fn round_cents_rounds_to_two_places(#[case] input: f64, #[case] expected: f64) {
        assert!((round_cents(input) - expected).abs() < 1e-9);
    }
}
