//! Performance Breakdown
//!
//! Profit factor, drawdown and risk-adjusted return over settled bets, plus
//! results grouped by odds range.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::precision::round_to;
use crate::models::BetRecord;

/// Risk and profitability metrics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub settled_bets: usize,
    pub winning_bets: usize,
    pub gross_profit: f64,
    pub gross_loss: f64,
    pub net_profit: f64,
    /// Gross profit over gross loss; None when there are no losses
    pub profit_factor: Option<f64>,
    pub max_drawdown: f64,
    /// Max drawdown as a percentage of total settled stake
    pub max_drawdown_pct: f64,
    pub sharpe_ratio: f64,
}

/// Calculate metrics from settled bets, in the order given
pub fn calculate_performance(bets: &[BetRecord]) -> PerformanceMetrics {
    let settled: Vec<&BetRecord> = bets.iter().filter(|b| b.result.is_settled()).collect();
    if settled.is_empty() {
        return PerformanceMetrics::default();
    }

    let winning_bets = settled.iter().filter(|b| b.won()).count();
    let profits: Vec<f64> = settled.iter().map(|b| b.profit()).collect();
    let total_stake: f64 = settled.iter().map(|b| b.stake).sum();

    let gross_profit: f64 = profits.iter().filter(|&&p| p > 0.0).sum();
    let gross_loss: f64 = profits.iter().filter(|&&p| p < 0.0).map(|p| p.abs()).sum();
    let net_profit: f64 = profits.iter().sum();

    let profit_factor = if gross_loss > 0.0 {
        Some(round_to(gross_profit / gross_loss, 2))
    } else {
        None
    };

    // Drawdown over the cumulative profit curve, starting from zero
    let mut cumulative = 0.0;
    let mut peak = 0.0_f64;
    let mut max_drawdown = 0.0_f64;
    for &p in &profits {
        cumulative += p;
        peak = peak.max(cumulative);
        max_drawdown = max_drawdown.max(peak - cumulative);
    }

    let max_drawdown_pct = if total_stake > 0.0 {
        max_drawdown / total_stake * 100.0
    } else {
        0.0
    };

    PerformanceMetrics {
        settled_bets: settled.len(),
        winning_bets,
        gross_profit: round_to(gross_profit, 2),
        gross_loss: round_to(gross_loss, 2),
        net_profit: round_to(net_profit, 2),
        profit_factor,
        max_drawdown: round_to(max_drawdown, 2),
        max_drawdown_pct: round_to(max_drawdown_pct, 2),
        sharpe_ratio: round_to(sharpe_ratio(&settled), 4),
    }
}

/// Mean per-bet return over its standard deviation (risk-free rate 0)
fn sharpe_ratio(bets: &[&BetRecord]) -> f64 {
    if bets.is_empty() {
        return 0.0;
    }

    let returns: Vec<f64> = bets.iter().map(|b| b.profit() / b.stake).collect();
    let mean: f64 = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance: f64 =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return 0.0;
    }
    mean / std_dev
}

/// Results for one odds bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsRangeAnalysis {
    pub key: String,
    pub bets: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub stake: f64,
    pub profit: f64,
    pub roi: f64,
}

fn odds_bucket(odds: f64) -> &'static str {
    if odds < 2.0 {
        "low (<2.0)"
    } else if odds <= 5.0 {
        "mid (2.0-5.0)"
    } else {
        "high (>5.0)"
    }
}

/// Analyze settled bets by decimal odds range, sorted by key
pub fn analyze_by_odds_range(bets: &[BetRecord]) -> Vec<OddsRangeAnalysis> {
    let mut grouped: BTreeMap<&str, Vec<&BetRecord>> = BTreeMap::new();
    for bet in bets.iter().filter(|b| b.result.is_settled()) {
        grouped.entry(odds_bucket(bet.odds)).or_default().push(bet);
    }

    grouped
        .into_iter()
        .map(|(key, group)| {
            let total = group.len();
            let wins = group.iter().filter(|b| b.won()).count();
            let stake: f64 = group.iter().map(|b| b.stake).sum();
            let profit: f64 = group.iter().map(|b| b.profit()).sum();

            OddsRangeAnalysis {
                key: key.to_string(),
                bets: total,
                wins,
                win_rate: round_to(wins as f64 / total as f64 * 100.0, 2),
                stake: round_to(stake, 2),
                profit: round_to(profit, 2),
                roi: if stake > 0.0 {
                    round_to(profit / stake * 100.0, 2)
                } else {
                    0.0
                },
            }
        })
        .collect()
}
