//! Betting Statistics
//!
//! Aggregate win rate, ROI, averages and streaks from a sequence of bets.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;

use crate::core::precision::round_to;
use crate::error::EngineError;
use crate::models::{BetOutcome, BetRecord};

/// Direction of a streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Win,
    Lose,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streak {
    #[serde(rename = "type")]
    pub kind: StreakKind,
    pub count: usize,
}

/// Snapshot computed from a bet collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BettingStatistics {
    pub total_bets: usize,
    pub total_stake: f64,
    pub total_returns: f64,
    pub profit: f64,
    pub roi: f64,      // percent
    pub win_rate: f64, // percent, over all bets
    pub average_stake: f64,
    pub average_odds: f64,
    pub longest_win_streak: usize,
    pub longest_lose_streak: usize,
    pub current_streak: Streak,
}

/// Calculate statistics for a bet collection.
///
/// `winRate` divides wins by every bet, PUSH and PENDING included.
/// Use `settled_win_rate` for wins over WIN + LOSS only.
pub fn calculate_statistics(bets: &[BetRecord]) -> BettingStatistics {
    if bets.is_empty() {
        return BettingStatistics::default();
    }

    let total_bets = bets.len();
    let total_stake: f64 = bets.iter().map(|b| b.stake).sum();
    let won: Vec<&BetRecord> = bets.iter().filter(|b| b.won()).collect();
    let total_returns: f64 = won.iter().map(|b| b.stake * b.odds).sum();
    let profit = total_returns - total_stake;

    let roi = if total_stake > 0.0 {
        profit / total_stake * 100.0
    } else {
        0.0
    };
    let win_rate = won.len() as f64 / total_bets as f64 * 100.0;
    let average_stake = total_stake / total_bets as f64;
    let average_odds = bets.iter().map(|b| b.odds).sum::<f64>() / total_bets as f64;

    let streaks = calculate_streaks(bets);

    BettingStatistics {
        total_bets,
        total_stake: round_to(total_stake, 2),
        total_returns: round_to(total_returns, 2),
        profit: round_to(profit, 2),
        roi: round_to(roi, 2),
        win_rate: round_to(win_rate, 2),
        average_stake: round_to(average_stake, 2),
        average_odds: round_to(average_odds, 2),
        longest_win_streak: streaks.longest_win,
        longest_lose_streak: streaks.longest_lose,
        current_streak: streaks.current,
    }
}

struct StreakSummary {
    longest_win: usize,
    longest_lose: usize,
    current: Streak,
}

/// Single left-to-right pass. PUSH and PENDING neither extend nor break a streak.
fn calculate_streaks(bets: &[BetRecord]) -> StreakSummary {
    let mut longest_win = 0;
    let mut longest_lose = 0;
    let mut win_run = 0;
    let mut lose_run = 0;

    for bet in bets {
        match bet.result {
            BetOutcome::Win => {
                win_run += 1;
                lose_run = 0;
                longest_win = longest_win.max(win_run);
            }
            BetOutcome::Loss => {
                lose_run += 1;
                win_run = 0;
                longest_lose = longest_lose.max(lose_run);
            }
            BetOutcome::Push | BetOutcome::Pending => {}
        }
    }

    let current = if win_run > 0 {
        Streak {
            kind: StreakKind::Win,
            count: win_run,
        }
    } else if lose_run > 0 {
        Streak {
            kind: StreakKind::Lose,
            count: lose_run,
        }
    } else {
        Streak::default()
    };

    StreakSummary {
        longest_win,
        longest_lose,
        current,
    }
}

/// Statistics over bets dated within `[start, end]`. Undated bets are excluded.
pub fn calculate_statistics_by_period(
    bets: &[BetRecord],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> BettingStatistics {
    let in_period: Vec<BetRecord> = bets
        .iter()
        .filter(|b| b.date.is_some_and(|d| d >= start && d <= end))
        .cloned()
        .collect();
    calculate_statistics(&in_period)
}

/// Win rate over settled (WIN or LOSS) bets only, percent, two decimals
pub fn settled_win_rate(bets: &[BetRecord]) -> f64 {
    let settled = bets.iter().filter(|b| b.result.is_settled()).count();
    if settled == 0 {
        return 0.0;
    }
    let wins = bets.iter().filter(|b| b.won()).count();
    round_to(wins as f64 / settled as f64 * 100.0, 2)
}

/// Grouping granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl FromStr for Period {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Ok(Period::Day),
            "week" | "weekly" => Ok(Period::Week),
            "month" | "monthly" => Ok(Period::Month),
            other => Err(EngineError::UnknownFormat(other.to_string())),
        }
    }
}

/// Group bets by day (`YYYY-MM-DD`), week (`YYYY-MM-DD` of the Sunday
/// starting it) or month (`YYYY-MM`). Undated bets are skipped.
pub fn group_bets_by_period(
    bets: &[BetRecord],
    period: Period,
) -> BTreeMap<String, Vec<BetRecord>> {
    let mut grouped: BTreeMap<String, Vec<BetRecord>> = BTreeMap::new();
    let mut skipped = 0usize;

    for bet in bets {
        let Some(date) = bet.date else {
            skipped += 1;
            continue;
        };
        let key = match period {
            Period::Day => date.format("%Y-%m-%d").to_string(),
            Period::Week => {
                let offset = date.weekday().num_days_from_sunday() as i64;
                (date - Duration::days(offset)).format("%Y-%m-%d").to_string()
            }
            Period::Month => date.format("%Y-%m").to_string(),
        };
        grouped.entry(key).or_default().push(bet.clone());
    }

    if skipped > 0 {
        warn!(skipped, "undated bets left out of period grouping");
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(stake: f64, odds: f64, result: BetOutcome) -> BetRecord {
        BetRecord {
            stake,
            odds,
            result,
            date: None,
        }
    }

    fn dated(stake: f64, odds: f64, result: BetOutcome, y: i32, m: u32, d: u32) -> BetRecord {
        record(stake, odds, result).with_date(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }

    fn create_test_bets() -> Vec<BetRecord> {
        vec![
            record(10.0, 2.0, BetOutcome::Win),
            record(10.0, 2.5, BetOutcome::Loss),
            record(10.0, 1.5, BetOutcome::Win),
            record(10.0, 3.0, BetOutcome::Win),
        ]
    }

    #[test]
    fn test_calculate_statistics() {
        let stats = calculate_statistics(&create_test_bets());

        assert_eq!(stats.total_bets, 4);
        assert!((stats.total_stake - 40.0).abs() < 1e-9);
        assert!((stats.total_returns - 65.0).abs() < 1e-9);
        assert!((stats.profit - 25.0).abs() < 1e-9);
        assert!((stats.win_rate - 75.0).abs() < 1e-9);
        assert!((stats.roi - 62.5).abs() < 1e-9);
        assert!((stats.average_stake - 10.0).abs() < 1e-9);
        assert!((stats.average_odds - 2.25).abs() < 1e-9);
        assert_eq!(stats.longest_win_streak, 2);
        assert_eq!(stats.longest_lose_streak, 1);
        assert_eq!(
            stats.current_streak,
            Streak {
                kind: StreakKind::Win,
                count: 2
            }
        );
    }

    #[test]
    fn test_calculate_statistics_empty() {
        let stats = calculate_statistics(&[]);

        assert_eq!(stats.total_bets, 0);
        assert_eq!(stats.total_stake, 0.0);
        assert_eq!(stats.roi, 0.0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.current_streak.kind, StreakKind::None);
        assert_eq!(stats.current_streak.count, 0);
    }

    #[test]
    fn test_win_rate_counts_unsettled_bets() {
        let bets = vec![
            record(10.0, 2.0, BetOutcome::Win),
            record(10.0, 2.0, BetOutcome::Loss),
            record(10.0, 2.0, BetOutcome::Pending),
            record(10.0, 2.0, BetOutcome::Push),
        ];
        let stats = calculate_statistics(&bets);
        // 1 win over 4 bets, not over 2 settled bets
        assert!((stats.win_rate - 25.0).abs() < 1e-9);
        assert!((settled_win_rate(&bets) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_settled_win_rate_empty() {
        assert_eq!(settled_win_rate(&[]), 0.0);
        assert_eq!(settled_win_rate(&[record(5.0, 2.0, BetOutcome::Pending)]), 0.0);
    }

    #[test]
    fn test_streaks_skip_unsettled() {
        let bets = vec![
            record(10.0, 2.0, BetOutcome::Loss),
            record(10.0, 2.0, BetOutcome::Loss),
            record(10.0, 2.0, BetOutcome::Push),
            record(10.0, 2.0, BetOutcome::Loss),
            record(10.0, 2.0, BetOutcome::Win),
            record(10.0, 2.0, BetOutcome::Pending),
        ];
        let stats = calculate_statistics(&bets);
        assert_eq!(stats.longest_lose_streak, 3);
        assert_eq!(stats.longest_win_streak, 1);
        assert_eq!(stats.current_streak.kind, StreakKind::Win);
        assert_eq!(stats.current_streak.count, 1);
    }

    #[test]
    fn test_streak_invariants() {
        let patterns: [&[BetOutcome]; 3] = [
            &[BetOutcome::Win, BetOutcome::Win, BetOutcome::Loss, BetOutcome::Win],
            &[BetOutcome::Loss, BetOutcome::Loss, BetOutcome::Loss],
            &[BetOutcome::Push, BetOutcome::Pending],
        ];
        for pattern in patterns {
            let bets: Vec<BetRecord> = pattern.iter().map(|r| record(5.0, 1.8, *r)).collect();
            let stats = calculate_statistics(&bets);
            assert!(stats.win_rate >= 0.0 && stats.win_rate <= 100.0);
            assert!(
                stats.current_streak.count
                    <= stats.longest_win_streak.max(stats.longest_lose_streak)
            );
        }
    }

    #[test]
    fn test_statistics_by_period() {
        let bets = vec![
            dated(10.0, 2.0, BetOutcome::Win, 2024, 1, 10),
            dated(20.0, 2.0, BetOutcome::Loss, 2024, 2, 10),
            dated(30.0, 2.0, BetOutcome::Win, 2024, 3, 10),
            record(40.0, 2.0, BetOutcome::Win),
        ];
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();

        let stats = calculate_statistics_by_period(&bets, start, end);
        assert_eq!(stats.total_bets, 2);
        assert!((stats.total_stake - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_bets_by_period() {
        let bets = vec![
            // 2024-01-10 is a Wednesday, week starts Sunday 2024-01-07
            dated(10.0, 2.0, BetOutcome::Win, 2024, 1, 10),
            dated(10.0, 2.0, BetOutcome::Loss, 2024, 1, 13),
            dated(10.0, 2.0, BetOutcome::Win, 2024, 2, 1),
            record(10.0, 2.0, BetOutcome::Win),
        ];

        let by_day = group_bets_by_period(&bets, Period::Day);
        assert_eq!(by_day.len(), 3);
        assert!(by_day.contains_key("2024-01-10"));

        let by_week = group_bets_by_period(&bets, Period::Week);
        assert_eq!(by_week["2024-01-07"].len(), 2);

        let by_month = group_bets_by_period(&bets, Period::Month);
        assert_eq!(by_month["2024-01"].len(), 2);
        assert_eq!(by_month["2024-02"].len(), 1);
    }

    #[test]
    fn test_period_parse() {
        assert_eq!("weekly".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("Month".parse::<Period>().unwrap(), Period::Month);
        assert!("year".parse::<Period>().is_err());
    }
}
