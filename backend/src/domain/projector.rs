//! Future-value estimate from a fixed synthetic history.
//!
//! The history is not observed data: seven points at six-month spacing scale
//! the current total by fixed fractions, a straight line is fitted through
//! them, and the line is read off at the requested horizon. One random factor
//! is applied and the result is floored at 80% of the current total.

use rand::Rng;

const HISTORY_MONTHS: [f64; 7] = [0.0, 6.0, 12.0, 18.0, 24.0, 30.0, 36.0];
const HISTORY_FRACTIONS: [f64; 7] = [0.7, 0.8, 0.9, 0.95, 1.0, 1.05, 1.1];
const NOISE_MIN: f64 = 0.98;
const NOISE_MAX: f64 = 1.08;
const FLOOR_FRACTION: f64 = 0.8;

/// Longest horizon the predictions view accepts, in years.
pub const MAX_HORIZON_YEARS: u32 = 20;
/// Horizon used when the caller does not pick one.
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Slope and intercept of the least-squares line through `(xs, ys)`.
fn least_squares(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    #[expect(clippy::cast_precision_loss, reason = "seven points")]
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let (covariance, variance) = xs.iter().zip(ys).fold((0.0, 0.0), |(cov, var), (x, y)| {
        let dx = x - mean_x;
        (cov + dx * (y - mean_y), var + dx * dx)
    });
    let slope = covariance / variance;
    (slope, mean_y - slope * mean_x)
}

/// Value of the fitted line at `years`, before noise and floor.
#[must_use]
pub fn trend_value(current_total: f64, years: u32) -> f64 {
    let history: Vec<f64> = HISTORY_FRACTIONS
        .iter()
        .map(|fraction| fraction * current_total)
        .collect();
    let (slope, intercept) = least_squares(&HISTORY_MONTHS, &history);
    slope * f64::from(years) * 12.0 + intercept
}

/// Predict the portfolio value `years` from now using `rng` for noise.
///
/// # Examples
/// ```
/// use finsight::domain::projector::project_with;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(project_with(&mut rng, 10_000.0, 0), 8_000.0);
/// ```
pub fn project_with<R: Rng + ?Sized>(rng: &mut R, current_total: f64, years: u32) -> f64 {
    let noise = rng.gen_range(NOISE_MIN..=NOISE_MAX);
    let floor = FLOOR_FRACTION * current_total;
    (trend_value(current_total, years) * noise).max(floor)
}

/// Predict with the thread-local generator.
#[must_use]
pub fn project(current_total: f64, years: u32) -> f64 {
    project_with(&mut rand::thread_rng(), current_total, years)
}

/// Straight-line path from `current` to `predicted`, one point per year
/// including both ends.
#[must_use]
pub fn trajectory(current: f64, predicted: f64, years: u32) -> Vec<f64> {
    if years == 0 {
        return vec![current];
    }
    let span = f64::from(years);
    (0..=years)
        .map(|year| current + (predicted - current) * f64::from(year) / span)
        .collect()
}

/// Percentage change from `current` to `predicted`; 0 when `current` is 0.
#[must_use]
pub fn growth_percentage(current: f64, predicted: f64) -> f64 {
    if current > 0.0 {
        (predicted - current) / current * 100.0
    } else {
        0.0
    }
}
