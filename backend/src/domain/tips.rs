//! Rotating financial tips shown on the dashboard.

use rand::Rng;
use rand::seq::SliceRandom;

/// The full tip list.
pub const FINANCIAL_TIPS: [&str; 10] = [
    "Invest regularly through SIP to benefit from rupee cost averaging.",
    "Diversification is the only free lunch in investing.",
    "Time in the market beats timing the market.",
    "Set clear financial goals before making investment decisions.",
    "Review and rebalance your portfolio every 6 months.",
    "Emergency fund first, investments second.",
    "Research thoroughly before investing in any asset.",
    "Long-term investing reduces risk and increases returns.",
    "Invest in your financial education continuously.",
    "Balance risk and return based on your age and goals.",
];

/// Pick one tip using `rng`.
pub fn tip_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FINANCIAL_TIPS.choose(rng).copied().unwrap_or(FINANCIAL_TIPS[0])
}

/// Pick one tip with the thread-local generator.
#[must_use]
pub fn random_tip() -> &'static str {
    tip_with(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    fn tips_come_from_the_list() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(FINANCIAL_TIPS.contains(&tip_with(&mut rng)));
        }
    }

    #[rstest]
    fn every_tip_is_eventually_drawn() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(tip_with(&mut rng));
        }
        assert_eq!(seen.len(), FINANCIAL_TIPS.len());
    }
}
