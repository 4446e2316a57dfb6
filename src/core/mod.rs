//! Core calculation modules

pub mod bankroll;
pub mod kelly;
pub mod odds;
pub mod precision;
pub mod session;

// Re-export commonly used types
pub use bankroll::{
    calculate_flat_stake, calculate_stop_levels, calculate_suggested_stake, calculate_unit_size,
    check_betting_limits, remaining_limits, LimitCheck, RemainingLimits, StakeSuggestion,
    StopLevels, WageredAmounts,
};
pub use kelly::{calculate_expected_value, calculate_kelly_criterion, KellyAssessment};
pub use odds::{
    calculate_profit, calculate_return, convert_from_american, convert_from_decimal,
    convert_from_fractional, convert_odds, OddsConversion,
};
pub use session::{evaluate_betting_session, responsible_gambling_tips, SessionAssessment};
