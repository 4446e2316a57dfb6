use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_positive_stake, EngineError};

/// Odds representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    #[default]
    Decimal,
    American,
    Fractional,
}

impl FromStr for OddsFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" => Ok(OddsFormat::Decimal),
            "american" | "moneyline" => Ok(OddsFormat::American),
            "fractional" => Ok(OddsFormat::Fractional),
            other => Err(EngineError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OddsFormat::Decimal => "decimal",
            OddsFormat::American => "american",
            OddsFormat::Fractional => "fractional",
        };
        f.write_str(name)
    }
}

/// Odds in one of the three supported formats.
///
/// Decimal is the canonical form; see `OddsValue::to_decimal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "raw", rename_all = "lowercase")]
pub enum OddsValue {
    Decimal(f64),
    American(i32),
    Fractional { numerator: f64, denominator: f64 },
}

impl OddsValue {
    pub fn format(&self) -> OddsFormat {
        match self {
            OddsValue::Decimal(_) => OddsFormat::Decimal,
            OddsValue::American(_) => OddsFormat::American,
            OddsValue::Fractional { .. } => OddsFormat::Fractional,
        }
    }
}

/// Settlement state of a bet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetOutcome {
    Win,
    Loss,
    Push,
    Pending,
}

impl BetOutcome {
    /// WIN or LOSS
    pub fn is_settled(&self) -> bool {
        matches!(self, BetOutcome::Win | BetOutcome::Loss)
    }
}

impl From<bool> for BetOutcome {
    fn from(won: bool) -> Self {
        if won {
            BetOutcome::Win
        } else {
            BetOutcome::Loss
        }
    }
}

impl FromStr for BetOutcome {
    type Err = EngineError;

    /// Accepts the canonical names and the won/lost, win/lose, yes/no,
    /// true/false synonyms, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" | "won" | "yes" | "true" => Ok(BetOutcome::Win),
            "loss" | "lose" | "lost" | "no" | "false" => Ok(BetOutcome::Loss),
            "push" => Ok(BetOutcome::Push),
            "pending" => Ok(BetOutcome::Pending),
            other => Err(EngineError::Validation(format!(
                "Unrecognised bet result '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BetOutcome::Win => "WIN",
            BetOutcome::Loss => "LOSS",
            BetOutcome::Push => "PUSH",
            BetOutcome::Pending => "PENDING",
        };
        f.write_str(name)
    }
}

/// Normalized bet, odds held in decimal form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub stake: f64,
    pub odds: f64,
    pub result: BetOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl BetRecord {
    /// Build a record from any odds representation
    pub fn new(stake: f64, odds: OddsValue, result: BetOutcome) -> Result<Self, EngineError> {
        ensure_positive_stake(stake)?;
        Ok(Self {
            stake,
            odds: odds.to_decimal()?,
            result,
            date: None,
        })
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn won(&self) -> bool {
        self.result == BetOutcome::Win
    }

    /// Derived profit: 0 for PUSH and PENDING
    pub fn profit(&self) -> f64 {
        crate::core::odds::bet_profit(self.stake, self.odds, self.result)
    }
}

/// Odds as supplied by a caller: JSON number or string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOdds {
    Number(f64),
    Text(String),
}

impl RawOdds {
    pub fn as_text(&self) -> String {
        match self {
            RawOdds::Number(n) => n.to_string(),
            RawOdds::Text(s) => s.clone(),
        }
    }
}

/// Result as supplied by a caller: boolean or string synonym
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResult {
    Flag(bool),
    Text(String),
}

/// Unvalidated bet as received from the outside world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetInput {
    pub stake: f64,
    pub odds: RawOdds,
    #[serde(default)]
    pub odds_format: Option<OddsFormat>,
    pub result: RawResult,
    #[serde(default)]
    pub date: Option<String>,
}

/// Risk profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    /// Base stake as a fraction of bankroll (1%, 2%, 5%)
    pub fn stake_multiplier(&self) -> f64 {
        match self {
            RiskTolerance::Conservative => 0.01,
            RiskTolerance::Moderate => 0.02,
            RiskTolerance::Aggressive => 0.05,
        }
    }

    /// Fraction of full Kelly to apply (quarter, half, three-quarter)
    pub fn kelly_fraction(&self) -> f64 {
        match self {
            RiskTolerance::Conservative => 0.25,
            RiskTolerance::Moderate => 0.5,
            RiskTolerance::Aggressive => 0.75,
        }
    }

    pub fn stop_loss_fraction(&self) -> f64 {
        match self {
            RiskTolerance::Conservative => 0.1,
            RiskTolerance::Moderate => 0.2,
            RiskTolerance::Aggressive => 0.3,
        }
    }

    pub fn take_profit_fraction(&self) -> f64 {
        match self {
            RiskTolerance::Conservative => 0.15,
            RiskTolerance::Moderate => 0.3,
            RiskTolerance::Aggressive => 0.5,
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(RiskTolerance::Conservative),
            "moderate" => Ok(RiskTolerance::Moderate),
            "aggressive" => Ok(RiskTolerance::Aggressive),
            other => Err(EngineError::Validation(format!(
                "Risk tolerance must be conservative, moderate or aggressive, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
        };
        f.write_str(name)
    }
}

/// Bankroll settings and responsible-gambling limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankrollConfig {
    pub total_bankroll: f64,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
    #[serde(default)]
    pub daily_limit: Option<f64>,
    #[serde(default)]
    pub weekly_limit: Option<f64>,
    #[serde(default)]
    pub monthly_limit: Option<f64>,
    /// Largest single stake as a percentage of bankroll (default 10)
    #[serde(default)]
    pub max_stake_percentage: Option<f64>,
}

impl BankrollConfig {
    pub const DEFAULT_MAX_STAKE_PERCENTAGE: f64 = 10.0;

    pub fn new(total_bankroll: f64, risk_tolerance: RiskTolerance) -> Self {
        Self {
            total_bankroll,
            risk_tolerance,
            ..Default::default()
        }
    }

    pub fn max_stake_percentage(&self) -> f64 {
        self.max_stake_percentage
            .unwrap_or(Self::DEFAULT_MAX_STAKE_PERCENTAGE)
    }
}

impl Default for BankrollConfig {
    fn default() -> Self {
        Self {
            total_bankroll: 1000.0,
            risk_tolerance: RiskTolerance::Moderate,
            daily_limit: None,
            weekly_limit: None,
            monthly_limit: None,
            max_stake_percentage: None,
        }
    }
}

/// Outcome of a validator: every violation, not just the first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
    }
}
