//! Rule-based portfolio suggestions.
//!
//! Rules run in a fixed order and every matching rule contributes one
//! suggestion. An empty snapshot short-circuits with a single prompt to start
//! investing; a snapshot that triggers nothing gets a single reassurance.

use std::fmt;

use serde::{Serialize, Serializer};

use super::holding::{AssetClass, Holding};
use super::portfolio::allocation;

const CRYPTO_CEILING_PERCENT: f64 = 30.0;
const MIN_DISTINCT_CLASSES: usize = 3;
const DOMINANT_CLASS_PERCENT: f64 = 50.0;
const WELL_DIVERSIFIED_CLASSES: usize = 4;
const WELL_DIVERSIFIED_MAX_PERCENT: f64 = 40.0;
const GOLD_FLOOR_PERCENT: f64 = 5.0;
const SMALL_PORTFOLIO_TOTAL: f64 = 100_000.0;
const LARGE_PORTFOLIO_TOTAL: f64 = 1_000_000.0;

/// One suggestion produced by [`advise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    StartBuilding,
    CryptoOverexposure,
    LowDiversification,
    ConcentratedPosition,
    WellDiversified,
    AddGoldHedge,
    StartSystematicInvesting,
    ConsultAdvisor,
    Healthy,
}

impl Advice {
    /// User-facing wording.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::StartBuilding => "Start building your portfolio by adding your first asset!",
            Self::CryptoOverexposure => {
                "High crypto exposure detected (>30%). Consider diversifying into stable assets like mutual funds or gold."
            }
            Self::LowDiversification => {
                "Low diversification! Try adding different asset types to balance risk and returns."
            }
            Self::ConcentratedPosition => {
                "One asset type dominates your portfolio (>50%). Spread investments to reduce risk."
            }
            Self::WellDiversified => {
                "Excellent diversification! Your portfolio is well-balanced across multiple asset types."
            }
            Self::AddGoldHedge => {
                "Consider adding 5-10% gold to your portfolio as a hedge against inflation."
            }
            Self::StartSystematicInvesting => {
                "Great start! Consider systematic investing (SIP) to grow your portfolio steadily."
            }
            Self::ConsultAdvisor => {
                "Impressive portfolio! Consider consulting a financial advisor for tax-efficient strategies."
            }
            Self::Healthy => "Your portfolio looks healthy. Keep monitoring and rebalancing regularly!",
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Advice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Evaluate the advice rules against a snapshot.
///
/// `total` is the snapshot total as already shown to the user; class shares
/// are computed against it.
///
/// # Examples
/// ```
/// use finsight::domain::advisor::{advise, Advice};
///
/// assert_eq!(advise(&[], 0.0), vec![Advice::StartBuilding]);
/// ```
#[must_use]
pub fn advise(snapshot: &[Holding], total: f64) -> Vec<Advice> {
    if snapshot.is_empty() {
        return vec![Advice::StartBuilding];
    }

    let shares = allocation(snapshot, total);
    let share_of = |class: AssetClass| shares.get(&class).copied();
    let largest_share = shares.values().copied().fold(0.0_f64, f64::max);
    let mut advice = Vec::new();

    if share_of(AssetClass::Crypto).is_some_and(|share| share > CRYPTO_CEILING_PERCENT) {
        advice.push(Advice::CryptoOverexposure);
    }
    if shares.len() < MIN_DISTINCT_CLASSES {
        advice.push(Advice::LowDiversification);
    }
    if largest_share > DOMINANT_CLASS_PERCENT {
        advice.push(Advice::ConcentratedPosition);
    }
    if shares.len() >= WELL_DIVERSIFIED_CLASSES && largest_share < WELL_DIVERSIFIED_MAX_PERCENT {
        advice.push(Advice::WellDiversified);
    }
    if share_of(AssetClass::Gold).is_none_or(|share| share < GOLD_FLOOR_PERCENT) {
        advice.push(Advice::AddGoldHedge);
    }
    if total < SMALL_PORTFOLIO_TOTAL {
        advice.push(Advice::StartSystematicInvesting);
    } else if total > LARGE_PORTFOLIO_TOTAL {
        advice.push(Advice::ConsultAdvisor);
    }

    if advice.is_empty() {
        advice.push(Advice::Healthy);
    }
    advice
}
