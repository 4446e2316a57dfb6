//! Odds Conversion
//!
//! Converts between decimal, American (moneyline) and fractional odds and
//! derives implied probability. Decimal odds are the canonical form:
//!
//! ```text
//! American +150  -> 1 + 150/100  = 2.50
//! American -200  -> 1 + 100/200  = 1.50
//! Fractional 5/2 -> 5/2 + 1      = 3.50
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::precision::{gcd, round_half_up, round_to};
use crate::error::{ensure_positive_stake, EngineError};
use crate::models::{BetOutcome, OddsFormat, OddsValue};

/// The same price expressed in every format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsConversion {
    pub decimal: f64,
    pub fractional: String,
    pub american: i64,
    /// Percentage, two decimals
    pub implied_probability: f64,
}

impl OddsValue {
    /// Parse raw caller input in the given format
    ///
    /// # Examples
    /// ```
    /// use betbuddy::models::{OddsFormat, OddsValue};
    /// let odds = OddsValue::parse("5/2", OddsFormat::Fractional).unwrap();
    /// assert_eq!(odds.to_decimal().unwrap(), 3.5);
    /// ```
    pub fn parse(raw: &str, format: OddsFormat) -> Result<Self, EngineError> {
        let raw = raw.trim();
        match format {
            OddsFormat::Decimal => {
                let value: f64 = raw.parse().map_err(|_| {
                    EngineError::InvalidOdds(format!("'{}' is not a valid decimal number", raw))
                })?;
                Ok(OddsValue::Decimal(value))
            }
            OddsFormat::American => {
                let value: f64 = raw.parse().map_err(|_| {
                    EngineError::InvalidOdds(format!("'{}' is not a valid American price", raw))
                })?;
                if value.fract() != 0.0 || value.abs() > i32::MAX as f64 {
                    return Err(EngineError::InvalidOdds(format!(
                        "American odds must be a whole number, got {}",
                        raw
                    )));
                }
                Ok(OddsValue::American(value as i32))
            }
            OddsFormat::Fractional => {
                let (numerator, denominator) = parse_fraction(raw)?;
                Ok(OddsValue::Fractional {
                    numerator,
                    denominator,
                })
            }
        }
    }

    /// Canonical decimal form
    pub fn to_decimal(&self) -> Result<f64, EngineError> {
        let decimal = match *self {
            OddsValue::Decimal(d) => d,
            OddsValue::American(a) => american_to_decimal(a as f64)?,
            OddsValue::Fractional {
                numerator,
                denominator,
            } => fractional_to_decimal(numerator, denominator)?,
        };
        if !decimal.is_finite() || decimal < 1.0 {
            return Err(EngineError::InvalidOdds(
                "Decimal odds must be 1 or greater".to_string(),
            ));
        }
        Ok(decimal)
    }
}

/// Split "numerator/denominator" into its parts
fn parse_fraction(raw: &str) -> Result<(f64, f64), EngineError> {
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 2 {
        return Err(EngineError::InvalidOdds(
            "Fractional odds must be in format \"numerator/denominator\"".to_string(),
        ));
    }
    let numerator: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidOdds("Invalid fractional odds".to_string()))?;
    let denominator: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidOdds("Invalid fractional odds".to_string()))?;
    Ok((numerator, denominator))
}

/// Implied probability in percent, rounded to two decimals
pub fn implied_probability(decimal: f64) -> f64 {
    round_to(100.0 / decimal, 2)
}

pub fn american_to_decimal(american: f64) -> Result<f64, EngineError> {
    if !american.is_finite() || american == 0.0 || (american > -100.0 && american < 100.0) {
        return Err(EngineError::InvalidOdds(
            "American odds must be <= -100 or >= 100".to_string(),
        ));
    }
    if american > 0.0 {
        Ok(1.0 + american / 100.0)
    } else {
        Ok(1.0 + 100.0 / american.abs())
    }
}

pub fn fractional_to_decimal(numerator: f64, denominator: f64) -> Result<f64, EngineError> {
    if numerator.is_nan() || denominator.is_nan() || denominator == 0.0 {
        return Err(EngineError::InvalidOdds(
            "Invalid fractional odds".to_string(),
        ));
    }
    if numerator < 0.0 || denominator < 0.0 {
        return Err(EngineError::InvalidOdds(
            "Fractional odds cannot be negative".to_string(),
        ));
    }
    Ok(numerator / denominator + 1.0)
}

/// Decimal to American. Undefined at exactly 1.0 (no profit on a win).
pub fn decimal_to_american(decimal: f64) -> Result<i64, EngineError> {
    check_convertible_decimal(decimal)?;
    let american = if decimal >= 2.0 {
        round_half_up((decimal - 1.0) * 100.0)
    } else {
        round_half_up(-100.0 / (decimal - 1.0))
    };
    to_i64(american)
}

/// Decimal to a reduced fraction of hundredths, e.g. 2.5 -> "3/2"
pub fn decimal_to_fractional(decimal: f64) -> Result<String, EngineError> {
    check_convertible_decimal(decimal)?;
    let hundredths = to_i64(((decimal - 1.0) * 100.0).round())?;
    let divisor = gcd(hundredths, 100);
    Ok(format!("{}/{}", hundredths / divisor, 100 / divisor))
}

/// `as i64` saturates, so anything outside the i64 range is rejected
fn to_i64(value: f64) -> Result<i64, EngineError> {
    if value.abs() < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(EngineError::InvalidOdds(
            "Decimal odds too large to convert".to_string(),
        ))
    }
}

fn check_convertible_decimal(decimal: f64) -> Result<(), EngineError> {
    if !decimal.is_finite() || decimal < 1.0 {
        return Err(EngineError::InvalidOdds(
            "Decimal odds must be 1 or greater".to_string(),
        ));
    }
    if decimal == 1.0 {
        return Err(EngineError::InvalidOdds(
            "Decimal odds of 1.00 have no American equivalent".to_string(),
        ));
    }
    Ok(())
}

/// Convert decimal odds to every format
pub fn convert_from_decimal(decimal: f64) -> Result<OddsConversion, EngineError> {
    let american = decimal_to_american(decimal)?;
    let fractional = decimal_to_fractional(decimal)?;

    Ok(OddsConversion {
        decimal,
        fractional,
        american,
        implied_probability: implied_probability(decimal),
    })
}

/// Convert American odds to every format
pub fn convert_from_american(american: f64) -> Result<OddsConversion, EngineError> {
    convert_from_decimal(american_to_decimal(american)?)
}

/// Convert fractional odds ("5/2") to every format
pub fn convert_from_fractional(fractional: &str) -> Result<OddsConversion, EngineError> {
    let (numerator, denominator) = parse_fraction(fractional.trim())?;
    convert_from_decimal(fractional_to_decimal(numerator, denominator)?)
}

/// Convert raw input in `format` to every format
pub fn convert_odds(raw: &str, format: OddsFormat) -> Result<OddsConversion, EngineError> {
    let odds = OddsValue::parse(raw, format)?;
    debug!(%raw, %format, "converting odds");
    convert_from_decimal(odds.to_decimal()?)
}

/// Total return (stake included), two decimals
pub fn calculate_return(stake: f64, odds: OddsValue) -> Result<f64, EngineError> {
    ensure_positive_stake(stake)?;
    let decimal = odds.to_decimal()?;
    Ok(round_to(stake * decimal, 2))
}

/// Net profit on a winning bet, two decimals
pub fn calculate_profit(stake: f64, odds: OddsValue) -> Result<f64, EngineError> {
    let total_return = calculate_return(stake, odds)?;
    Ok(round_to(total_return - stake, 2))
}

/// Profit of a bet given its outcome and decimal odds
pub fn bet_profit(stake: f64, decimal_odds: f64, outcome: BetOutcome) -> f64 {
    match outcome {
        BetOutcome::Win => round_to(stake * (decimal_odds - 1.0), 2),
        BetOutcome::Loss => -stake,
        BetOutcome::Push | BetOutcome::Pending => 0.0,
    }
}
