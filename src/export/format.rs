//! Display Formatting
//!
//! Locale-aware rendering of currency, percentages, odds, dates and the
//! derived statistics. Every function is pure; locale and currency are
//! passed explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analytics::{Streak, StreakKind};
use crate::error::EngineError;
use crate::models::OddsValue;

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
}

impl Locale {
    fn group_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb => ',',
            Locale::DeDe => '.',
            Locale::FrFr => '\u{202f}',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs | Locale::EnGb => '.',
            Locale::DeDe | Locale::FrFr => ',',
        }
    }

    /// Currency symbol goes after the amount
    fn symbol_after(&self) -> bool {
        matches!(self, Locale::DeDe | Locale::FrFr)
    }

    fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Locale::EnUs => chrono::Locale::en_US,
            Locale::EnGb => chrono::Locale::en_GB,
            Locale::DeDe => chrono::Locale::de_DE,
            Locale::FrFr => chrono::Locale::fr_FR,
        }
    }

    fn date_pattern(&self, style: DateStyle) -> &'static str {
        match (self, style) {
            (Locale::EnUs, DateStyle::Short) => "%-m/%-d/%Y",
            (Locale::EnUs, DateStyle::Medium) => "%b %-d, %Y",
            (Locale::EnUs, DateStyle::Long) => "%B %-d, %Y",
            (Locale::EnUs, DateStyle::Full) => "%A, %B %-d, %Y",
            (Locale::EnGb, DateStyle::Short) => "%d/%m/%Y",
            (Locale::EnGb, DateStyle::Medium) => "%-d %b %Y",
            (Locale::EnGb, DateStyle::Long) => "%-d %B %Y",
            (Locale::EnGb, DateStyle::Full) => "%A %-d %B %Y",
            (Locale::DeDe, DateStyle::Short) => "%-d.%-m.%Y",
            (Locale::DeDe, DateStyle::Medium) => "%-d. %b %Y",
            (Locale::DeDe, DateStyle::Long) => "%-d. %B %Y",
            (Locale::DeDe, DateStyle::Full) => "%A, %-d. %B %Y",
            (Locale::FrFr, DateStyle::Short) => "%d/%m/%Y",
            (Locale::FrFr, DateStyle::Medium) => "%-d %b %Y",
            (Locale::FrFr, DateStyle::Long) => "%-d %B %Y",
            (Locale::FrFr, DateStyle::Full) => "%A %-d %B %Y",
        }
    }

    fn time_pattern(&self, include_seconds: bool) -> &'static str {
        match (self, include_seconds) {
            (Locale::EnUs, false) => "%-I:%M %p",
            (Locale::EnUs, true) => "%-I:%M:%S %p",
            (_, false) => "%H:%M",
            (_, true) => "%H:%M:%S",
        }
    }
}

impl FromStr for Locale {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" | "de" => Ok(Locale::DeDe),
            "fr-fr" | "fr" => Ok(Locale::FrFr),
            _ => Err(EngineError::Validation(format!("Unsupported locale: {}", s))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        };
        f.write_str(tag)
    }
}

/// Date rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    Short,
    #[default]
    Medium,
    Long,
    Full,
}

impl FromStr for DateStyle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(DateStyle::Short),
            "medium" => Ok(DateStyle::Medium),
            "long" => Ok(DateStyle::Long),
            "full" => Ok(DateStyle::Full),
            other => Err(EngineError::UnknownFormat(other.to_string())),
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// True when formatted digits are not all zero
fn has_nonzero_digit(formatted: &str) -> bool {
    formatted.chars().any(|c| c.is_ascii_digit() && c != '0')
}

/// Fixed-point number with locale separators. Negative zero prints unsigned.
fn format_fixed(value: f64, places: usize, locale: Locale) -> String {
    let fixed = format!("{:.*}", places, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && has_nonzero_digit(&fixed) {
        out.push('-');
    }
    out.push_str(&group_digits(integer, locale.group_separator()));
    if let Some(fraction) = fraction {
        out.push(locale.decimal_separator());
        out.push_str(fraction);
    }
    out
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn currency_places(code: &str) -> usize {
    match code {
        "JPY" => 0,
        _ => 2,
    }
}

/// Format an amount as currency, e.g. `$1,234.50` or `1.234,50 €`.
///
/// Unknown currency codes are rendered with the code in place of a symbol.
pub fn format_currency(amount: f64, currency: &str, locale: Locale) -> String {
    let code = currency.trim().to_uppercase();
    let number = format_fixed(amount.abs(), currency_places(&code), locale);
    let sign = if amount < 0.0 && has_nonzero_digit(&number) {
        "-"
    } else {
        ""
    };

    match (currency_symbol(&code), locale.symbol_after()) {
        (Some(symbol), false) => format!("{sign}{symbol}{number}"),
        (None, false) => format!("{sign}{code}\u{a0}{number}"),
        (Some(symbol), true) => format!("{sign}{number}\u{a0}{symbol}"),
        (None, true) => format!("{sign}{number}\u{a0}{code}"),
    }
}

/// Percentage with fixed places; `include_sign` adds `+` for positive values.
/// Values that round to zero print unsigned.
pub fn format_percentage(value: f64, places: usize, include_sign: bool) -> String {
    let fixed = format!("{:.*}", places, value.abs());
    let sign = match (value < 0.0, has_nonzero_digit(&fixed)) {
        (_, false) => "",
        (true, true) => "-",
        (false, true) if include_sign => "+",
        (false, true) => "",
    };
    format!("{}{}%", sign, fixed)
}

/// Odds in their own notation: `2.50`, `+150`, `5/2`
pub fn format_odds(odds: &OddsValue) -> String {
    match *odds {
        OddsValue::Decimal(d) => format!("{:.2}", d),
        OddsValue::American(a) if a > 0 => format!("+{}", a),
        OddsValue::American(a) => a.to_string(),
        OddsValue::Fractional {
            numerator,
            denominator,
        } => format!("{}/{}", numerator, denominator),
    }
}

pub fn format_date(date: DateTime<Utc>, style: DateStyle, locale: Locale) -> String {
    date.format_localized(locale.date_pattern(style), locale.chrono_locale())
        .to_string()
}

/// Medium date followed by the time of day
pub fn format_date_time(date: DateTime<Utc>, locale: Locale, include_seconds: bool) -> String {
    let pattern = format!(
        "{}, {}",
        locale.date_pattern(DateStyle::Medium),
        locale.time_pattern(include_seconds)
    );
    date.format_localized(&pattern, locale.chrono_locale())
        .to_string()
}

fn relative_phrase(value: i64, unit: &str) -> String {
    match (value, unit) {
        (0, "second") => "now".to_string(),
        (-1, "day") => "yesterday".to_string(),
        (1, "day") => "tomorrow".to_string(),
        (-1, "week" | "month" | "year") => format!("last {}", unit),
        (1, "week" | "month" | "year") => format!("next {}", unit),
        (v, _) => {
            let n = v.abs();
            let plural = if n == 1 { "" } else { "s" };
            if v < 0 {
                format!("{} {}{} ago", n, unit, plural)
            } else {
                format!("in {} {}{}", n, unit, plural)
            }
        }
    }
}

/// English relative time such as `2 days ago`, `yesterday` or `in 3 hours`.
///
/// Picks the largest unit with a magnitude of at least one; months are 30
/// days and years 365.
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (date - now).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let (value, unit) = [
        (days / 365, "year"),
        (days / 30, "month"),
        (days / 7, "week"),
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
    ]
    .into_iter()
    .find(|(v, _)| v.abs() >= 1)
    .unwrap_or((seconds, "second"));

    relative_phrase(value, unit)
}

/// Abbreviate large values: `1.5K`, `2.5M`, `-3.2B`
pub fn format_number(value: f64, decimals: usize, abbreviate: bool) -> String {
    if !abbreviate {
        return format_fixed(value, decimals, Locale::EnUs);
    }

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs >= 1e9 {
        format!("{}{:.*}B", sign, decimals, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}{:.*}M", sign, decimals, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}{:.*}K", sign, decimals, abs / 1e3)
    } else {
        format!("{:.*}", decimals, value)
    }
}

pub fn format_streak(streak: &Streak) -> String {
    let (icon, one, many) = match streak.kind {
        StreakKind::Win => ("🔥", "win", "wins"),
        StreakKind::Lose => ("❄️", "loss", "losses"),
        StreakKind::None => return "No streak".to_string(),
    };
    match streak.count {
        0 => "No streak".to_string(),
        1 => format!("{} 1 {}", icon, one),
        n => format!("{} {} {}", icon, n, many),
    }
}

/// Colour hint for a signed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Red,
    Gray,
}

impl Tone {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Tone::Green
        } else if value < 0.0 {
            Tone::Red
        } else {
            Tone::Gray
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossDisplay {
    pub value: String,
    pub tone: Tone,
}

/// Signed currency amount: gains carry a leading `+`, losses `-`
pub fn format_profit_loss(amount: f64, currency: &str, locale: Locale) -> ProfitLossDisplay {
    let formatted = format_currency(amount, currency, locale);
    let value = if amount > 0.0 {
        format!("+{}", formatted)
    } else {
        formatted
    };
    ProfitLossDisplay {
        value,
        tone: Tone::of(amount),
    }
}

/// ROI direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Flat => "➡️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiDisplay {
    pub value: String,
    pub indicator: Trend,
}

pub fn format_roi(roi: f64) -> RoiDisplay {
    let value = format_percentage(roi, 2, true);
    // Indicator follows the displayed value
    let indicator = match value.chars().next() {
        Some('+') => Trend::Up,
        Some('-') => Trend::Down,
        _ => Trend::Flat,
    };
    RoiDisplay { value, indicator }
}

/// Cut `text` to at most `max_len` characters, ending with `ellipsis`
pub fn truncate_text(text: &str, max_len: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(ellipsis.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ellipsis);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn jan_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 45).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, "USD", Locale::EnUs), "$1,234.50");
        assert_eq!(format_currency(-1234.5, "USD", Locale::EnUs), "-$1,234.50");
        assert_eq!(format_currency(1234.5, "GBP", Locale::EnGb), "£1,234.50");
        assert_eq!(format_currency(1000.0, "JPY", Locale::EnUs), "¥1,000");
        assert_eq!(format_currency(0.0, "usd", Locale::EnUs), "$0.00");
    }

    #[test]
    fn test_format_currency_suffix_locales() {
        assert_eq!(
            format_currency(-1234.5, "EUR", Locale::DeDe),
            "-1.234,50\u{a0}€"
        );
        assert_eq!(format_currency(12.0, "CHF", Locale::EnUs), "CHF\u{a0}12.00");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(format_currency(-0.001, "USD", Locale::EnUs), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.5, 1, true), "+12.5%");
        assert_eq!(format_percentage(12.5, 1, false), "12.5%");
        assert_eq!(format_percentage(-3.0, 2, true), "-3.00%");
        assert_eq!(format_percentage(0.0, 2, true), "0.00%");
    }

    #[test]
    fn test_format_percentage_rounds_to_unsigned_zero() {
        assert_eq!(format_percentage(-0.001, 2, true), "0.00%");
        assert_eq!(format_percentage(-0.001, 2, false), "0.00%");
        assert_eq!(format_percentage(0.001, 2, true), "0.00%");
        assert_eq!(format_percentage(-0.0, 1, true), "0.0%");
        assert_eq!(format_percentage(-0.006, 2, true), "-0.01%");
    }

    #[test]
    fn test_format_odds() {
        assert_eq!(format_odds(&OddsValue::Decimal(2.5)), "2.50");
        assert_eq!(format_odds(&OddsValue::American(150)), "+150");
        assert_eq!(format_odds(&OddsValue::American(-110)), "-110");
        assert_eq!(
            format_odds(&OddsValue::Fractional {
                numerator: 5.0,
                denominator: 2.0
            }),
            "5/2"
        );
    }

    #[test]
    fn test_format_date_styles() {
        let d = jan_15();
        assert_eq!(format_date(d, DateStyle::Short, Locale::EnUs), "1/15/2024");
        assert_eq!(format_date(d, DateStyle::Medium, Locale::EnUs), "Jan 15, 2024");
        assert_eq!(format_date(d, DateStyle::Long, Locale::EnUs), "January 15, 2024");
        assert_eq!(
            format_date(d, DateStyle::Full, Locale::EnUs),
            "Monday, January 15, 2024"
        );
        assert_eq!(format_date(d, DateStyle::Short, Locale::EnGb), "15/01/2024");
        assert_eq!(format_date(d, DateStyle::Short, Locale::DeDe), "15.1.2024");
    }

    #[test]
    fn test_format_date_time() {
        let d = jan_15();
        assert_eq!(format_date_time(d, Locale::EnUs, false), "Jan 15, 2024, 3:30 PM");
        assert_eq!(
            format_date_time(d, Locale::EnUs, true),
            "Jan 15, 2024, 3:30:45 PM"
        );
        assert!(format_date_time(d, Locale::EnGb, false).ends_with("15:30"));
    }

    #[test]
    fn test_format_relative_time() {
        let now = jan_15();
        assert_eq!(format_relative_time(now, now), "now");
        assert_eq!(format_relative_time(now - Duration::seconds(30), now), "30 seconds ago");
        assert_eq!(format_relative_time(now - Duration::days(1), now), "yesterday");
        assert_eq!(format_relative_time(now - Duration::days(2), now), "2 days ago");
        assert_eq!(format_relative_time(now + Duration::hours(3), now), "in 3 hours");
        assert_eq!(format_relative_time(now - Duration::days(10), now), "last week");
        assert_eq!(format_relative_time(now - Duration::days(45), now), "last month");
        assert_eq!(format_relative_time(now - Duration::days(800), now), "2 years ago");
        assert_eq!(format_relative_time(now + Duration::minutes(1), now), "in 1 minute");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1500.0, 1, true), "1.5K");
        assert_eq!(format_number(2_500_000.0, 1, true), "2.5M");
        assert_eq!(format_number(-3_200_000_000.0, 1, true), "-3.2B");
        assert_eq!(format_number(999.0, 1, true), "999.0");
        assert_eq!(format_number(1_234_567.0, 1, false), "1,234,567.0");
    }

    #[test]
    fn test_format_streak() {
        let s = |kind, count| Streak { kind, count };
        assert_eq!(format_streak(&s(StreakKind::Win, 3)), "🔥 3 wins");
        assert_eq!(format_streak(&s(StreakKind::Lose, 1)), "❄️ 1 loss");
        assert_eq!(format_streak(&s(StreakKind::Win, 0)), "No streak");
        assert_eq!(format_streak(&Streak::default()), "No streak");
    }

    #[test]
    fn test_format_profit_loss() {
        let gain = format_profit_loss(50.0, "USD", Locale::EnUs);
        assert_eq!(gain.value, "+$50.00");
        assert_eq!(gain.tone, Tone::Green);

        let loss = format_profit_loss(-20.0, "USD", Locale::EnUs);
        assert_eq!(loss.value, "-$20.00");
        assert_eq!(loss.tone, Tone::Red);

        assert_eq!(format_profit_loss(0.0, "USD", Locale::EnUs).tone, Tone::Gray);
    }

    #[test]
    fn test_format_roi() {
        let up = format_roi(62.5);
        assert_eq!(up.value, "+62.50%");
        assert_eq!(up.indicator, Trend::Up);
        assert_eq!(format_roi(-10.0).indicator.symbol(), "📉");
        assert_eq!(format_roi(0.0).indicator, Trend::Flat);

        let tiny_loss = format_roi(-0.001);
        assert_eq!(tiny_loss.value, "0.00%");
        assert_eq!(tiny_loss.indicator, Trend::Flat);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10, "..."), "short");
        assert_eq!(truncate_text("Manchester United", 10, "..."), "Manches...");
        assert_eq!(truncate_text("abcdef", 2, "..."), "...");
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("en_GB".parse::<Locale>().unwrap(), Locale::EnGb);
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::DeDe);
        assert_eq!(Locale::FrFr.to_string(), "fr-FR");
        assert!("xx-YY".parse::<Locale>().is_err());
    }
}
