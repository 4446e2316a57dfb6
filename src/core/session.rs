//! Session Evaluation
//!
//! Looks at recent outcomes and bankroll movement and recommends whether to
//! keep betting. Exactly one branch fires, checked in this order:
//!
//! 1. 4+ losses in the last 5 results -> pause
//! 2. bankroll down 20% or more       -> pause
//! 3. bankroll up 30% or more         -> lock in profits
//! 4. 3 losses in the last 5 results  -> caution
//! 5. otherwise                       -> continue

use serde::{Deserialize, Serialize};

use crate::error::{ensure_bankroll, EngineError};
use crate::models::BetOutcome;

/// Window of most recent results considered
const RECENT_WINDOW: usize = 5;

/// Session recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAssessment {
    pub should_pause: bool,
    pub reason: Option<String>,
    pub recommendation: String,
}

impl SessionAssessment {
    fn pause(reason: &str, recommendation: &str) -> Self {
        Self {
            should_pause: true,
            reason: Some(reason.to_string()),
            recommendation: recommendation.to_string(),
        }
    }

    fn proceed(recommendation: &str) -> Self {
        Self {
            should_pause: false,
            reason: None,
            recommendation: recommendation.to_string(),
        }
    }
}

/// Evaluate a betting session.
///
/// `recent_results` is oldest first; only LOSS counts as a loss.
pub fn evaluate_betting_session(
    recent_results: &[BetOutcome],
    bankroll: f64,
    original_bankroll: f64,
) -> Result<SessionAssessment, EngineError> {
    ensure_bankroll(original_bankroll)?;

    if recent_results.is_empty() {
        return Ok(SessionAssessment::proceed(
            "Good luck! Remember to bet responsibly.",
        ));
    }

    let window_start = recent_results.len().saturating_sub(RECENT_WINDOW);
    let recent_losses = recent_results[window_start..]
        .iter()
        .filter(|r| **r == BetOutcome::Loss)
        .count();

    let bankroll_change = (bankroll - original_bankroll) / original_bankroll * 100.0;

    let assessment = if recent_losses >= 4 {
        SessionAssessment::pause(
            "Lost 4 or more of last 5 bets",
            "Consider taking a break. Chasing losses often leads to more losses.",
        )
    } else if bankroll_change <= -20.0 {
        SessionAssessment::pause(
            "Bankroll down 20% or more",
            "Stop-loss threshold reached. Take a break and reassess your strategy.",
        )
    } else if bankroll_change >= 30.0 {
        SessionAssessment::proceed(
            "Great session! Consider locking in some profits by reducing stake or withdrawing.",
        )
    } else if recent_losses == 3 {
        SessionAssessment::proceed(
            "Lost 3 of last 5 bets. Consider reducing stake or taking a short break.",
        )
    } else {
        SessionAssessment::proceed("Session going well. Continue following your staking plan.")
    };

    Ok(assessment)
}

/// External help resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibleGamblingTips {
    pub tips: Vec<String>,
    pub resources: Vec<Resource>,
}

pub fn responsible_gambling_tips() -> ResponsibleGamblingTips {
    let tips = [
        "Set a budget before you start and stick to it",
        "Never bet more than you can afford to lose",
        "Take regular breaks from betting",
        "Do not chase your losses",
        "Balance betting with other activities",
        "Do not bet when under the influence of alcohol or drugs",
        "If gambling stops being fun, stop gambling",
        "Keep track of time and money spent betting",
        "Treat betting as entertainment, not as income",
        "Seek help if you feel gambling is becoming a problem",
    ];

    let resources = [
        (
            "National Council on Problem Gambling",
            "US national helpline and resources for problem gambling",
            "https://www.ncpgambling.org/",
        ),
        (
            "Gamblers Anonymous",
            "Fellowship of people who share experience to help recover from gambling addiction",
            "https://www.gamblersanonymous.org/",
        ),
        (
            "GamCare",
            "UK support for anyone affected by problem gambling",
            "https://www.gamcare.org.uk/",
        ),
        (
            "BeGambleAware",
            "UK charity providing information and support",
            "https://www.begambleaware.org/",
        ),
    ];

    ResponsibleGamblingTips {
        tips: tips.iter().map(|t| t.to_string()).collect(),
        resources: resources
            .iter()
            .map(|(name, description, url)| Resource {
                name: name.to_string(),
                description: description.to_string(),
                url: url.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BetOutcome::{Loss, Push, Win};

    #[test]
    fn test_empty_session() {
        let a = evaluate_betting_session(&[], 500.0, 1000.0).unwrap();
        assert!(!a.should_pause);
        assert!(a.recommendation.starts_with("Good luck"));
    }

    #[test]
    fn test_losing_streak_pauses() {
        // Earlier losses fall outside the window
        let results = [Loss, Loss, Loss, Win, Win, Loss, Win];
        let a = evaluate_betting_session(&results, 1000.0, 1000.0).unwrap();
        assert!(!a.should_pause);
        assert!(a.recommendation.starts_with("Session going well"));

        let results = [Win, Loss, Loss, Loss, Loss];
        let a = evaluate_betting_session(&results, 2000.0, 1000.0).unwrap();
        assert!(a.should_pause);
        assert_eq!(a.reason.as_deref(), Some("Lost 4 or more of last 5 bets"));
    }

    #[test]
    fn test_drawdown_pauses() {
        let a = evaluate_betting_session(&[Win, Loss], 800.0, 1000.0).unwrap();
        assert!(a.should_pause);
        assert_eq!(a.reason.as_deref(), Some("Bankroll down 20% or more"));
    }

    #[test]
    fn test_big_profit_celebrates() {
        let a = evaluate_betting_session(&[Win, Loss, Loss, Loss], 1350.0, 1000.0).unwrap();
        assert!(!a.should_pause);
        assert!(a.recommendation.starts_with("Great session"));
    }

    #[test]
    fn test_three_losses_cautions() {
        let a = evaluate_betting_session(&[Loss, Win, Loss, Push, Loss], 1000.0, 1000.0).unwrap();
        assert!(!a.should_pause);
        assert!(a.recommendation.starts_with("Lost 3 of last 5"));
    }

    #[test]
    fn test_neutral_continue() {
        let a = evaluate_betting_session(&[Win, Win, Loss], 1050.0, 1000.0).unwrap();
        assert!(!a.should_pause);
        assert!(a.reason.is_none());
        assert!(a.recommendation.starts_with("Session going well"));
    }

    #[test]
    fn test_invalid_original_bankroll() {
        assert!(evaluate_betting_session(&[Win], 100.0, 0.0).is_err());
    }

    #[test]
    fn test_responsible_gambling_tips() {
        let tips = responsible_gambling_tips();
        assert_eq!(tips.tips.len(), 10);
        assert_eq!(tips.resources.len(), 4);
        assert!(tips.resources.iter().all(|r| r.url.starts_with("https://")));
    }
}
