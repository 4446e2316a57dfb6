//! Bankroll Management
//!
//! Stake sizing from bankroll and risk tolerance, plus responsible-gambling
//! limit checks and stop-loss / take-profit levels.
//!
//! Risk tolerance drives every table:
//!
//! | tolerance    | base stake | Kelly fraction | stop loss | take profit |
//! |--------------|-----------:|---------------:|----------:|------------:|
//! | conservative |         1% |            25% |       10% |         15% |
//! | moderate     |         2% |            50% |       20% |         30% |
//! | aggressive   |         5% |            75% |       30% |         50% |

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::kelly::kelly_fraction;
use super::precision::round_to;
use crate::error::{ensure_bankroll, ensure_odds_above_one, ensure_probability_open, EngineError};
use crate::models::{BankrollConfig, RiskTolerance};

/// Share of a period limit at which a warning is raised
const LIMIT_WARNING_RATIO: f64 = 0.8;

/// Single stakes above this share of bankroll draw a warning
const HIGH_RISK_STAKE_RATIO: f64 = 0.25;

/// Staking guidance for a single bet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeSuggestion {
    pub suggested_stake: f64,
    pub min_stake: f64,
    pub max_stake: f64,
    pub risk_level: RiskTolerance,
    pub reasoning: String,
}

/// Smallest sensible stake: 1 unit of currency or 0.1% of bankroll
fn min_stake_for(bankroll: f64) -> f64 {
    (bankroll * 0.001).max(1.0)
}

/// Suggested stake from fractional Kelly, clamped to `[min_stake, max_stake]`
/// where `max_stake` is twice the base stake for the risk tolerance.
///
/// The minimum is applied last. On small bankrolls (below 50 conservative,
/// 25 moderate, 10 aggressive) `min_stake` exceeds `max_stake` and the
/// suggestion equals `min_stake`, so `suggested_stake <= max_stake` does
/// not always hold.
pub fn calculate_suggested_stake(
    bankroll: f64,
    odds: f64,
    win_probability: f64,
    risk_tolerance: RiskTolerance,
) -> Result<StakeSuggestion, EngineError> {
    ensure_bankroll(bankroll)?;
    ensure_odds_above_one(odds)?;
    ensure_probability_open(win_probability)?;

    let full_kelly = kelly_fraction(win_probability, odds);
    let kelly_multiplier = risk_tolerance.kelly_fraction();
    let base_multiplier = risk_tolerance.stake_multiplier();

    let max_stake = bankroll * base_multiplier * 2.0;
    let min_stake = min_stake_for(bankroll);

    let (suggested_stake, reasoning) = if full_kelly <= 0.0 {
        (
            min_stake,
            "No positive edge detected. Consider skipping this bet or reducing stake.".to_string(),
        )
    } else {
        let raw = bankroll * full_kelly * kelly_multiplier;
        let clamped = raw.min(max_stake).max(min_stake);
        debug!(raw, clamped, min_stake, max_stake, "clamped kelly stake");

        let reasoning = if raw > max_stake {
            format!(
                "High edge detected, but stake capped at {:.0}% of bankroll for safety.",
                base_multiplier * 200.0
            )
        } else {
            format!(
                "Based on {:.0}% Kelly Criterion with {} risk profile.",
                kelly_multiplier * 100.0,
                risk_tolerance
            )
        };
        (round_to(clamped, 2), reasoning)
    };

    Ok(StakeSuggestion {
        suggested_stake: round_to(suggested_stake, 2),
        min_stake: round_to(min_stake, 2),
        max_stake: round_to(max_stake, 2),
        risk_level: risk_tolerance,
        reasoning,
    })
}

impl BankrollConfig {
    /// Suggested stake against this bankroll and risk profile
    pub fn suggest_stake(
        &self,
        odds: f64,
        win_probability: f64,
    ) -> Result<StakeSuggestion, EngineError> {
        calculate_suggested_stake(self.total_bankroll, odds, win_probability, self.risk_tolerance)
    }
}

/// Percentage-of-bankroll stake without edge information
pub fn calculate_flat_stake(
    bankroll: f64,
    risk_tolerance: RiskTolerance,
) -> Result<f64, EngineError> {
    ensure_bankroll(bankroll)?;
    let stake = bankroll * risk_tolerance.stake_multiplier();
    Ok(round_to(stake.max(1.0), 2))
}

/// Size of one betting unit when the bankroll is split into `units` units (commonly 100)
pub fn calculate_unit_size(bankroll: f64, units: f64) -> Result<f64, EngineError> {
    ensure_bankroll(bankroll)?;
    if !units.is_finite() || units <= 0.0 {
        return Err(EngineError::Domain(format!(
            "Units in bankroll must be greater than 0, got {}",
            units
        )));
    }
    Ok(round_to(bankroll / units, 2))
}

/// Amounts already wagered in each limit period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageredAmounts {
    #[serde(default)]
    pub today: f64,
    #[serde(default)]
    pub this_week: f64,
    #[serde(default)]
    pub this_month: f64,
}

/// Result of a responsible-gambling limit check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitCheck {
    pub allowed: bool,
    pub warnings: Vec<String>,
    pub violations: Vec<String>,
}

/// Check a prospective stake against the configured limits.
///
/// Violations: stake above `maxStakePercentage` of bankroll, or a period
/// total that would exceed its limit. Warnings: a period total above 80% of
/// its limit (when not already violated), or a stake above 25% of bankroll.
pub fn check_betting_limits(
    stake: f64,
    config: &BankrollConfig,
    wagered: WageredAmounts,
) -> LimitCheck {
    let mut warnings = Vec::new();
    let mut violations = Vec::new();

    let max_stake_percent = config.max_stake_percentage();
    let max_stake = config.total_bankroll * (max_stake_percent / 100.0);

    if stake > max_stake {
        violations.push(format!(
            "Stake exceeds {}% of bankroll (${:.2} max)",
            max_stake_percent, max_stake
        ));
    }

    let periods = [
        ("daily", config.daily_limit, wagered.today),
        ("weekly", config.weekly_limit, wagered.this_week),
        ("monthly", config.monthly_limit, wagered.this_month),
    ];

    for (period, limit, already) in periods {
        let Some(limit) = limit else { continue };
        let total = already + stake;
        if total > limit {
            violations.push(format!("Bet would exceed {} limit of ${:.2}", period, limit));
        } else if total > limit * LIMIT_WARNING_RATIO {
            warnings.push(format!("Approaching {} betting limit (>80%)", period));
        }
    }

    if stake > config.total_bankroll * HIGH_RISK_STAKE_RATIO {
        warnings.push("Stake is more than 25% of total bankroll - high risk!".to_string());
    }

    LimitCheck {
        allowed: violations.is_empty(),
        warnings,
        violations,
    }
}

/// Headroom left under each configured period limit (never negative)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingLimits {
    pub daily: Option<f64>,
    pub weekly: Option<f64>,
    pub monthly: Option<f64>,
}

pub fn remaining_limits(config: &BankrollConfig, wagered: WageredAmounts) -> RemainingLimits {
    let headroom = |limit: Option<f64>, used: f64| limit.map(|l| round_to((l - used).max(0.0), 2));
    RemainingLimits {
        daily: headroom(config.daily_limit, wagered.today),
        weekly: headroom(config.weekly_limit, wagered.this_week),
        monthly: headroom(config.monthly_limit, wagered.this_month),
    }
}

/// Stop-loss and take-profit thresholds for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLevels {
    pub stop_loss: f64,
    pub stop_loss_percentage: f64,
    pub take_profit: f64,
    pub take_profit_percentage: f64,
    pub recommendations: Vec<String>,
}

pub fn calculate_stop_levels(
    bankroll: f64,
    risk_tolerance: RiskTolerance,
) -> Result<StopLevels, EngineError> {
    ensure_bankroll(bankroll)?;

    let loss_fraction = risk_tolerance.stop_loss_fraction();
    let profit_fraction = risk_tolerance.take_profit_fraction();

    let stop_loss = bankroll * (1.0 - loss_fraction);
    let take_profit = bankroll * (1.0 + profit_fraction);

    let recommendations = vec![
        format!(
            "Stop betting for the day if bankroll drops to ${:.2}",
            stop_loss
        ),
        format!(
            "Consider taking profits when bankroll reaches ${:.2}",
            take_profit
        ),
        "Take regular breaks to maintain clear decision-making".to_string(),
        "Never chase losses - stick to your staking plan".to_string(),
    ];

    Ok(StopLevels {
        stop_loss: round_to(stop_loss, 2),
        stop_loss_percentage: round_to(loss_fraction * 100.0, 2),
        take_profit: round_to(take_profit, 2),
        take_profit_percentage: round_to(profit_fraction * 100.0, 2),
        recommendations,
    })
}
