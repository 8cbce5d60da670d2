//! Simulated twelve-month growth series for the analytics view.
//!
//! The series is illustrative only. It is seeded with a constant so the same
//! total always draws the same curve.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use utoipa::ToSchema;

const SEED: u64 = 42;
const START_FRACTION: f64 = 0.7;
const MONTHLY_MIN: f64 = 0.95;
const MONTHLY_MAX: f64 = 1.05;

/// Month labels in series order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One point on the growth curve.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPoint {
    #[schema(value_type = String, example = "Jan")]
    pub month: &'static str,
    pub value: f64,
}

/// Build the growth series for `total`.
///
/// # Examples
/// ```
/// use finsight::domain::growth::growth_trend;
///
/// let series = growth_trend(1_000.0);
/// assert_eq!(series.len(), 12);
/// assert_eq!(series[0].value, 700.0);
/// assert_eq!(series, growth_trend(1_000.0));
/// ```
#[must_use]
pub fn growth_trend(total: f64) -> Vec<GrowthPoint> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut value = (START_FRACTION * total).max(0.0);
    let mut points = Vec::with_capacity(MONTHS.len());
    for (index, month) in MONTHS.into_iter().enumerate() {
        if index > 0 {
            value *= rng.gen_range(MONTHLY_MIN..=MONTHLY_MAX);
        }
        points.push(GrowthPoint { month, value });
    }
    points
}
