use thiserror::Error;

/// Engine error types
#[derive(Debug, Error)]
pub enum EngineError {
    /// Odds value that cannot be represented in decimal form
    #[error("Invalid odds: {0}")]
    InvalidOdds(String),

    /// Malformed or out-of-range input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mathematically undefined request (bad probability, odds <= 1, empty bankroll)
    #[error("Domain error: {0}")]
    Domain(String),

    /// Raw bet that failed one or more validation checks
    #[error("Invalid bet: {}", .0.join("; "))]
    InvalidBet(Vec<String>),

    /// Unrecognised format identifier
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidOdds(_) => "invalid_odds",
            EngineError::Validation(_) => "validation_error",
            EngineError::Domain(_) => "domain_error",
            EngineError::InvalidBet(_) => "invalid_bet",
            EngineError::UnknownFormat(_) => "unknown_format",
            EngineError::Serialization(_) => "serialization_error",
        }
    }
}

/// Guard functions shared by the calculators
pub fn ensure_probability_open(prob: f64) -> Result<(), EngineError> {
    if !prob.is_finite() || prob <= 0.0 || prob >= 1.0 {
        return Err(EngineError::Domain(format!(
            "Win probability must be between 0 and 1 (exclusive), got {}",
            prob
        )));
    }
    Ok(())
}

pub fn ensure_probability_closed(prob: f64) -> Result<(), EngineError> {
    if !(0.0..=1.0).contains(&prob) {
        return Err(EngineError::Domain(format!(
            "Win probability must be between 0 and 1, got {}",
            prob
        )));
    }
    Ok(())
}

pub fn ensure_odds_above_one(odds: f64) -> Result<(), EngineError> {
    if !odds.is_finite() || odds <= 1.0 {
        return Err(EngineError::Domain(format!(
            "Odds must be greater than 1, got {}",
            odds
        )));
    }
    Ok(())
}

pub fn ensure_bankroll(bankroll: f64) -> Result<(), EngineError> {
    if !bankroll.is_finite() || bankroll <= 0.0 {
        return Err(EngineError::Domain(format!(
            "Bankroll must be greater than 0, got {}",
            bankroll
        )));
    }
    Ok(())
}

pub fn ensure_positive_stake(stake: f64) -> Result<(), EngineError> {
    if !stake.is_finite() || stake <= 0.0 {
        return Err(EngineError::Validation(format!(
            "Stake must be greater than 0, got {}",
            stake
        )));
    }
    Ok(())
}
