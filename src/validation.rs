//! Input validation for raw betting data
//!
//! Every validator collects all violations into a `ValidationResult`
//! instead of stopping at the first. `normalize_bet` is the single place
//! where raw result strings become a `BetOutcome`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;
use crate::models::{
    BetInput, BetOutcome, BetRecord, OddsFormat, OddsValue, RawResult, ValidationResult,
};

/// Decimal odds above this are rejected as implausible
const MAX_DECIMAL_ODDS: f64 = 1000.0;

/// Accepted stake range (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StakeBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for StakeBounds {
    fn default() -> Self {
        Self {
            min: 0.01,
            max: 1_000_000.0,
        }
    }
}

/// Validate a stake against the default bounds (0.01 to 1,000,000)
pub fn validate_stake(stake: f64) -> ValidationResult {
    validate_stake_within(stake, StakeBounds::default())
}

pub fn validate_stake_within(stake: f64, bounds: StakeBounds) -> ValidationResult {
    let mut errors = Vec::new();

    if !stake.is_finite() {
        errors.push("Stake must be a valid number".to_string());
    } else if stake < bounds.min {
        errors.push(format!("Stake must be at least {}", bounds.min));
    } else if stake > bounds.max {
        errors.push(format!("Stake must not exceed {}", bounds.max));
    }

    ValidationResult::from_errors(errors)
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate raw odds text in the given format
pub fn validate_odds(raw: &str, format: OddsFormat) -> ValidationResult {
    let mut errors = Vec::new();

    match format {
        OddsFormat::Decimal => match parse_finite(raw) {
            None => errors.push("Decimal odds must be a valid number".to_string()),
            Some(odds) if odds < 1.0 => {
                errors.push("Decimal odds must be 1.00 or greater".to_string())
            }
            Some(odds) if odds > MAX_DECIMAL_ODDS => {
                errors.push("Decimal odds seem unreasonably high (>1000)".to_string())
            }
            Some(_) => {}
        },
        OddsFormat::American => match parse_finite(raw) {
            None => errors.push("American odds must be a valid number".to_string()),
            Some(odds) if odds > -100.0 && odds < 100.0 => {
                errors.push("American odds must be <= -100 or >= 100".to_string())
            }
            Some(odds) if odds.fract() != 0.0 => {
                errors.push("American odds must be a whole number".to_string())
            }
            Some(odds) if odds.abs() > i32::MAX as f64 => {
                errors.push("American odds are out of range".to_string())
            }
            Some(_) => {}
        },
        OddsFormat::Fractional => {
            let parts: Vec<&str> = raw.split('/').collect();
            if parts.len() != 2 {
                errors.push(
                    "Fractional odds must be in format \"numerator/denominator\"".to_string(),
                );
            } else {
                match (parse_finite(parts[0]), parse_finite(parts[1])) {
                    (Some(numerator), Some(denominator)) => {
                        if denominator == 0.0 {
                            errors.push("Denominator cannot be zero".to_string());
                        } else if numerator <= 0.0 || denominator < 0.0 {
                            errors.push("Fractional odds must be positive".to_string());
                        }
                    }
                    _ => errors.push("Fractional odds must contain valid numbers".to_string()),
                }
            }
        }
    }

    ValidationResult::from_errors(errors)
}

/// Parse RFC 3339 timestamps, `YYYY-MM-DD` dates (midnight UTC) and naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` times (UTC)
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Validate a date against the current time
pub fn validate_date(raw: &str) -> ValidationResult {
    validate_date_at(raw, Utc::now())
}

/// Validate a date: it must parse and must not be after `now`
pub fn validate_date_at(raw: &str, now: DateTime<Utc>) -> ValidationResult {
    let mut errors = Vec::new();

    match parse_date(raw) {
        None => errors.push("Invalid date format".to_string()),
        Some(date) if date > now => errors.push("Date cannot be in the future".to_string()),
        Some(_) => {}
    }

    ValidationResult::from_errors(errors)
}

/// Map a raw result to its outcome, if recognised
pub fn normalize_bet_result(result: &RawResult) -> Option<BetOutcome> {
    match result {
        RawResult::Flag(won) => Some(BetOutcome::from(*won)),
        RawResult::Text(text) => text.parse().ok(),
    }
}

pub fn validate_bet_result(result: &RawResult) -> ValidationResult {
    let mut errors = Vec::new();
    if normalize_bet_result(result).is_none() {
        errors.push(
            "Bet result must be won/lost, win/lose, yes/no, true/false, push or pending".to_string(),
        );
    }
    ValidationResult::from_errors(errors)
}

/// Validate a complete raw bet against the current time
pub fn validate_bet(bet: &BetInput) -> ValidationResult {
    validate_bet_at(bet, Utc::now())
}

/// Validate stake, odds, result and (when present) date, collecting every error
pub fn validate_bet_at(bet: &BetInput, now: DateTime<Utc>) -> ValidationResult {
    let mut result = validate_stake(bet.stake);
    result.merge(validate_odds(
        &bet.odds.as_text(),
        bet.odds_format.unwrap_or_default(),
    ));
    result.merge(validate_bet_result(&bet.result));
    if let Some(ref date) = bet.date {
        result.merge(validate_date_at(date, now));
    }
    result
}

/// Validate and convert a raw bet into a normalized `BetRecord`
pub fn normalize_bet(bet: &BetInput) -> Result<BetRecord, EngineError> {
    normalize_bet_at(bet, Utc::now())
}

pub fn normalize_bet_at(bet: &BetInput, now: DateTime<Utc>) -> Result<BetRecord, EngineError> {
    let validation = validate_bet_at(bet, now);
    if !validation.is_valid {
        debug!(errors = ?validation.errors, "rejected bet");
        return Err(EngineError::InvalidBet(validation.errors));
    }

    let format = bet.odds_format.unwrap_or_default();
    let odds = OddsValue::parse(&bet.odds.as_text(), format)
        .map_err(|e| EngineError::InvalidBet(vec![e.to_string()]))?;
    let outcome = normalize_bet_result(&bet.result)
        .ok_or_else(|| EngineError::InvalidBet(vec!["Unrecognised bet result".to_string()]))?;

    let record = BetRecord::new(bet.stake, odds, outcome)
        .map_err(|e| EngineError::InvalidBet(vec![e.to_string()]))?;

    Ok(match bet.date.as_deref().and_then(parse_date) {
        Some(date) => record.with_date(date),
        None => record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawOdds;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn bet(stake: f64, odds: RawOdds, format: Option<OddsFormat>, result: RawResult) -> BetInput {
        BetInput {
            stake,
            odds,
            odds_format: format,
            result,
            date: None,
        }
    }

    #[test]
    fn test_validate_stake() {
        assert!(validate_stake(10.0).is_valid);
        assert!(validate_stake(0.01).is_valid);
        assert!(validate_stake(1_000_000.0).is_valid);

        let r = validate_stake(0.0);
        assert_eq!(r.errors, vec!["Stake must be at least 0.01".to_string()]);

        let r = validate_stake(2_000_000.0);
        assert_eq!(r.errors, vec!["Stake must not exceed 1000000".to_string()]);

        assert!(!validate_stake(f64::NAN).is_valid);
        assert!(!validate_stake(f64::INFINITY).is_valid);
    }

    #[test]
    fn test_validate_stake_custom_bounds() {
        let bounds = StakeBounds { min: 5.0, max: 50.0 };
        assert!(validate_stake_within(5.0, bounds).is_valid);
        assert!(!validate_stake_within(4.99, bounds).is_valid);
        assert!(!validate_stake_within(50.01, bounds).is_valid);
    }

    #[test]
    fn test_validate_decimal_odds() {
        assert!(validate_odds("2.5", OddsFormat::Decimal).is_valid);
        assert!(validate_odds("1.0", OddsFormat::Decimal).is_valid);
        assert!(!validate_odds("0.99", OddsFormat::Decimal).is_valid);
        assert!(!validate_odds("1500", OddsFormat::Decimal).is_valid);
        assert!(!validate_odds("abc", OddsFormat::Decimal).is_valid);
        assert!(!validate_odds("NaN", OddsFormat::Decimal).is_valid);
    }

    #[test]
    fn test_validate_american_odds_boundary() {
        assert!(!validate_odds("99", OddsFormat::American).is_valid);
        assert!(validate_odds("100", OddsFormat::American).is_valid);
        assert!(validate_odds("-100", OddsFormat::American).is_valid);
        assert!(validate_odds("+250", OddsFormat::American).is_valid);
        assert!(!validate_odds("-99", OddsFormat::American).is_valid);
        assert!(!validate_odds("0", OddsFormat::American).is_valid);
        assert!(!validate_odds("x", OddsFormat::American).is_valid);
    }

    #[test]
    fn test_validate_american_odds_whole_number() {
        let r = validate_odds("150.5", OddsFormat::American);
        assert!(!r.is_valid);
        assert_eq!(r.errors, vec!["American odds must be a whole number"]);
        assert!(!validate_odds("-110.25", OddsFormat::American).is_valid);
        assert!(validate_odds("150.0", OddsFormat::American).is_valid);
        assert!(!validate_odds("3000000000", OddsFormat::American).is_valid);
    }

    #[test]
    fn test_validate_fractional_odds() {
        assert!(validate_odds("5/2", OddsFormat::Fractional).is_valid);
        assert_eq!(
            validate_odds("5/0", OddsFormat::Fractional).errors,
            vec!["Denominator cannot be zero".to_string()]
        );
        assert!(!validate_odds("-5/2", OddsFormat::Fractional).is_valid);
        assert!(!validate_odds("0/2", OddsFormat::Fractional).is_valid);
        assert!(!validate_odds("5", OddsFormat::Fractional).is_valid);
        assert!(!validate_odds("a/b", OddsFormat::Fractional).is_valid);
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_date("2024-01-15").is_some());
        assert!(parse_date("2024-01-15T10:30:00Z").is_some());
        assert!(parse_date("2024-01-15T10:30:00+02:00").is_some());
        assert!(parse_date("2024-01-15 10:30:00").is_some());
        assert!(parse_date("15/01/2024").is_none());
        assert!(parse_date("2024-02-30").is_none());
    }

    #[test]
    fn test_validate_date() {
        let now = fixed_now();
        assert!(validate_date_at("2024-05-31", now).is_valid);
        assert!(validate_date_at("2024-06-01T12:00:00Z", now).is_valid);
        assert_eq!(
            validate_date_at("2024-06-01T12:00:01Z", now).errors,
            vec!["Date cannot be in the future".to_string()]
        );
        assert_eq!(
            validate_date_at("not a date", now).errors,
            vec!["Invalid date format".to_string()]
        );
        assert!(validate_date("2000-01-01").is_valid);
    }

    #[test]
    fn test_validate_bet_result() {
        for text in ["won", "LOST", "Win", "lose", "yes", "no", "TRUE", "false", "push", "Pending"] {
            assert!(
                validate_bet_result(&RawResult::Text(text.to_string())).is_valid,
                "{}",
                text
            );
        }
        assert!(validate_bet_result(&RawResult::Flag(false)).is_valid);
        assert!(!validate_bet_result(&RawResult::Text("maybe".to_string())).is_valid);
    }

    #[test]
    fn test_validate_bet_collects_all_errors() {
        let mut input = bet(
            0.0,
            RawOdds::Number(50.0),
            Some(OddsFormat::American),
            RawResult::Text("maybe".to_string()),
        );
        input.date = Some("2099-01-01".to_string());

        let r = validate_bet_at(&input, fixed_now());
        assert!(!r.is_valid);
        assert_eq!(r.errors.len(), 4);
        assert!(r.errors[0].starts_with("Stake"));
        assert!(r.errors[1].starts_with("American odds"));
        assert!(r.errors[2].starts_with("Bet result"));
        assert_eq!(r.errors[3], "Date cannot be in the future");
    }

    #[test]
    fn test_validate_bet_defaults_to_decimal() {
        let input = bet(10.0, RawOdds::Number(2.5), None, RawResult::Flag(true));
        assert!(validate_bet_at(&input, fixed_now()).is_valid);
    }

    #[test]
    fn test_normalize_bet() {
        let mut input = bet(
            20.0,
            RawOdds::Text("5/2".to_string()),
            Some(OddsFormat::Fractional),
            RawResult::Text("Won".to_string()),
        );
        input.date = Some("2024-03-10".to_string());

        let record = normalize_bet_at(&input, fixed_now()).unwrap();
        assert_eq!(record.result, BetOutcome::Win);
        assert!((record.odds - 3.5).abs() < 1e-9);
        assert!((record.profit() - 50.0).abs() < 1e-9);
        assert_eq!(record.date, parse_date("2024-03-10"));
    }

    #[test]
    fn test_normalize_bet_rejects_invalid() {
        let input = bet(
            10.0,
            RawOdds::Number(0.5),
            None,
            RawResult::Flag(true),
        );
        match normalize_bet_at(&input, fixed_now()) {
            Err(EngineError::InvalidBet(errors)) => {
                assert_eq!(errors, vec!["Decimal odds must be 1.00 or greater".to_string()]);
            }
            other => panic!("expected InvalidBet, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_bet_rejects_fractional_american() {
        let input = bet(
            10.0,
            RawOdds::Number(150.5),
            Some(OddsFormat::American),
            RawResult::Flag(true),
        );
        let validation = validate_bet_at(&input, fixed_now());
        assert!(!validation.is_valid);
        match normalize_bet_at(&input, fixed_now()) {
            Err(EngineError::InvalidBet(errors)) => assert_eq!(errors, validation.errors),
            other => panic!("expected InvalidBet, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_and_normalize_agree_on_american_odds() {
        for odds in [150.0, 150.5, -110.0, -99.0, 2_147_483_648.0] {
            let input = bet(
                10.0,
                RawOdds::Number(odds),
                Some(OddsFormat::American),
                RawResult::Flag(true),
            );
            assert_eq!(
                validate_bet_at(&input, fixed_now()).is_valid,
                normalize_bet_at(&input, fixed_now()).is_ok(),
                "odds {}",
                odds
            );
        }
    }
}
