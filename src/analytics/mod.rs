//! Performance analytics over collections of settled bets

pub mod breakdown;
pub mod statistics;

pub use breakdown::{
    analyze_by_odds_range, calculate_performance, OddsRangeAnalysis, PerformanceMetrics,
};
pub use statistics::{
    calculate_statistics, calculate_statistics_by_period, group_bets_by_period, settled_win_rate,
    BettingStatistics, Period, Streak, StreakKind,
};
