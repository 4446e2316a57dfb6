//! Kelly Criterion and Expected Value
//!
//! The Kelly criterion formula:
//!     f* = (b*p - q) / b
//!
//! Where:
//!     f* = fraction of bankroll to bet
//!     b = odds - 1 (net odds)
//!     p = probability of winning
//!     q = 1 - p (probability of losing)
//!     odds = decimal odds (e.g., 2.5 means 2.5x return)

use serde::{Deserialize, Serialize};

use super::precision::round_to;
use crate::error::{
    ensure_odds_above_one, ensure_probability_closed, ensure_probability_open, EngineError,
};

/// Raw Kelly fraction, negative when the bet has no edge.
///
/// Returns 0 for odds <= 1 where the formula is undefined.
pub fn kelly_fraction(probability: f64, odds: f64) -> f64 {
    if odds <= 1.0 {
        return 0.0;
    }
    let b = odds - 1.0;
    let q = 1.0 - probability;
    (b * probability - q) / b
}

/// Full Kelly fraction of bankroll to stake, in [0, 1], four decimals.
///
/// Negative edges clamp to 0 (no edge means no bet).
///
/// # Examples
/// ```
/// use betbuddy::core::kelly::calculate_kelly_criterion;
/// let f = calculate_kelly_criterion(0.55, 2.0).unwrap();
/// assert!((f - 0.10).abs() < 1e-9);
/// ```
pub fn calculate_kelly_criterion(win_probability: f64, odds: f64) -> Result<f64, EngineError> {
    ensure_probability_open(win_probability)?;
    ensure_odds_above_one(odds)?;

    let kelly = round_to(kelly_fraction(win_probability, odds), 4);
    Ok(kelly.max(0.0))
}

/// Expected value of a bet in currency units, two decimals:
///     EV = p * (stake * odds - stake) - (1 - p) * stake
pub fn calculate_expected_value(
    stake: f64,
    win_probability: f64,
    odds: f64,
) -> Result<f64, EngineError> {
    ensure_probability_closed(win_probability)?;

    let win_amount = stake * odds - stake;
    let lose_amount = -stake;
    let ev = win_probability * win_amount + (1.0 - win_probability) * lose_amount;

    Ok(round_to(ev, 2))
}

/// Edge summary for a single price
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KellyAssessment {
    pub probability: f64,
    pub odds: f64,
    pub expected_return: f64,      // p * odds per unit staked
    pub edge: f64,                 // expected_return - 1
    pub kelly_fraction: f64,       // Full Kelly, clamped
    pub recommended_fraction: f64, // After applying Kelly multiplier
}

impl KellyAssessment {
    /// Assess a price with a fractional Kelly multiplier (0.5 = half Kelly)
    pub fn new(probability: f64, odds: f64, kelly_multiplier: f64) -> Result<Self, EngineError> {
        let kelly = calculate_kelly_criterion(probability, odds)?;
        let expected_return = probability * odds;

        Ok(Self {
            probability,
            odds,
            expected_return,
            edge: expected_return - 1.0,
            kelly_fraction: kelly,
            recommended_fraction: kelly * kelly_multiplier,
        })
    }

    pub fn has_edge(&self) -> bool {
        self.kelly_fraction > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelly_fraction_positive_edge() {
        // EV = 0.25 * 5.0 = 1.25
        let kelly = kelly_fraction(0.25, 5.0);
        assert!((kelly - 0.0625).abs() < 0.0001);
    }

    #[test]
    fn test_kelly_fraction_negative_edge() {
        let kelly = kelly_fraction(0.10, 5.0);
        assert!(kelly < 0.0);
    }

    #[test]
    fn test_kelly_fraction_undefined_odds() {
        assert_eq!(kelly_fraction(0.25, 1.0), 0.0);
    }

    #[test]
    fn test_kelly_criterion_scenario() {
        let f = calculate_kelly_criterion(0.55, 2.0).unwrap();
        assert!((f - 0.10).abs() < 1e-9);
        // Half Kelly is 5% of bankroll
        assert!((f * 0.5 - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_kelly_criterion_clamps_no_edge() {
        assert_eq!(calculate_kelly_criterion(0.3, 2.0).unwrap(), 0.0);
        // Break-even: p == 1/odds
        assert_eq!(calculate_kelly_criterion(0.5, 2.0).unwrap(), 0.0);
        assert_eq!(calculate_kelly_criterion(0.25, 4.0).unwrap(), 0.0);
    }

    #[test]
    fn test_kelly_criterion_monotonic_in_probability() {
        for odds in [1.5, 2.0, 3.0, 7.5] {
            let mut previous = 0.0;
            for i in 1..100 {
                let p = i as f64 / 100.0;
                let f = calculate_kelly_criterion(p, odds).unwrap();
                assert!(f >= previous, "odds={} p={} f={} prev={}", odds, p, f, previous);
                assert!((0.0..=1.0).contains(&f));
                if p <= 1.0 / odds {
                    assert_eq!(f, 0.0, "odds={} p={}", odds, p);
                }
                previous = f;
            }
        }
    }

    #[test]
    fn test_kelly_criterion_domain_errors() {
        assert!(matches!(
            calculate_kelly_criterion(0.0, 2.0),
            Err(EngineError::Domain(_))
        ));
        assert!(calculate_kelly_criterion(1.0, 2.0).is_err());
        assert!(calculate_kelly_criterion(0.5, 1.0).is_err());
        assert!(calculate_kelly_criterion(0.5, 0.5).is_err());
    }

    #[test]
    fn test_expected_value() {
        // 0.5 * 150 - 0.5 * 100 = 25
        let ev = calculate_expected_value(100.0, 0.5, 2.5).unwrap();
        assert!((ev - 25.0).abs() < 1e-9);

        let ev = calculate_expected_value(100.0, 0.4, 2.0).unwrap();
        assert!((ev + 20.0).abs() < 1e-9);

        assert!(calculate_expected_value(100.0, 1.5, 2.0).is_err());
    }

    #[test]
    fn test_assessment() {
        let assessment = KellyAssessment::new(0.25, 5.0, 0.25).unwrap();
        assert!((assessment.expected_return - 1.25).abs() < 1e-9);
        assert!((assessment.edge - 0.25).abs() < 1e-9);
        assert!((assessment.kelly_fraction - 0.0625).abs() < 1e-9);
        assert!((assessment.recommended_fraction - 0.015625).abs() < 1e-9);
        assert!(assessment.has_edge());

        let assessment = KellyAssessment::new(0.10, 5.0, 0.25).unwrap();
        assert!(!assessment.has_edge());
        assert_eq!(assessment.recommended_fraction, 0.0);
    }
}
