//! BetBuddy - Betting analytics and staking engine
//!
//! This library provides:
//! - Odds conversion between decimal, American and fractional formats
//! - Input validation for stakes, odds, dates and bet results
//! - Performance statistics (win rate, ROI, streaks, drawdown)
//! - Kelly criterion stake sizing with bankroll limits and stop levels
//! - Display formatting and CSV/JSON/TSV/HTML/Markdown export
//!
//! # Example
//!
//! ```
//! use betbuddy::core::{calculate_suggested_stake, convert_odds};
//! use betbuddy::models::{OddsFormat, RiskTolerance};
//!
//! let conversion = convert_odds("+150", OddsFormat::American).unwrap();
//! assert_eq!(conversion.decimal, 2.5);
//! assert_eq!(conversion.fractional, "3/2");
//!
//! let stake = calculate_suggested_stake(1000.0, 2.0, 0.55, RiskTolerance::Moderate).unwrap();
//! assert_eq!(stake.suggested_stake, 40.0);
//! ```

pub mod analytics;
pub mod core;
pub mod error;
pub mod export;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use analytics::{calculate_statistics, BettingStatistics, Streak, StreakKind};
pub use error::EngineError;
pub use export::{export_data, ExportFormat, Locale};
pub use models::{
    BankrollConfig, BetInput, BetOutcome, BetRecord, OddsFormat, OddsValue, RiskTolerance,
    ValidationResult,
};
pub use validation::{normalize_bet, validate_bet};
