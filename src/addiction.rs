//! Addiction risk scoring
//!
//! Computes a 0-100 addiction risk score as a weighted combination of six
//! usage factors, classifies it into a discrete tier, and generates a
//! deterministic human-readable explanation.

use crate::types::{AddictionAssessment, RiskTier, UsageFactors};

/// Factor weights in canonical order. Applied as a literal dot product;
/// an all-100 input yields exactly 100 by construction, but the sum is
/// never used to renormalize.
pub const WEIGHTS: [(&str, f64); 6] = [
    ("screen_time", 0.25),
    ("night_usage", 0.15),
    ("social_media_ratio", 0.20),
    ("app_switching", 0.10),
    ("sentiment_volatility", 0.15),
    ("reward_dependency", 0.15),
];

/// Inclusive score bands for tier classification
const TIER_BANDS: [(f64, f64, RiskTier); 4] = [
    (0.0, 25.0, RiskTier::Low),
    (26.0, 50.0, RiskTier::Moderate),
    (51.0, 75.0, RiskTier::High),
    (76.0, 100.0, RiskTier::Critical),
];

/// Multi-factor addiction risk scorer with explainable output
pub struct AddictionScorer;

impl AddictionScorer {
    /// Calculate the addiction risk score from the six usage factors.
    ///
    /// Each factor is clamped to [0,100] before weighting; the weighted sum
    /// is clamped again defensively. The explanation inspects the raw
    /// (unclamped) inputs against per-factor thresholds.
    pub fn calculate_score(factors: &UsageFactors) -> AddictionAssessment {
        let score: f64 = factors
            .named()
            .iter()
            .zip(WEIGHTS.iter())
            .map(|((_, value), (_, weight))| value.clamp(0.0, 100.0) * weight)
            .sum();
        let score = score.clamp(0.0, 100.0);

        let risk_level = classify_risk(score);
        let explanation = generate_explanation(factors, score, risk_level);

        AddictionAssessment {
            score,
            risk_level,
            explanation,
        }
    }
}

/// Return the tier whose inclusive band contains the score.
///
/// Scores falling outside every band map to CRITICAL.
pub fn classify_risk(score: f64) -> RiskTier {
    for (low, high, tier) in TIER_BANDS {
        if score >= low && score <= high {
            return tier;
        }
    }
    RiskTier::Critical
}

/// Compose the rule-ordered explanation for a calculated score.
///
/// One concern sentence is collected per factor threshold exceeded, in
/// canonical factor order. Zero concerns yields a short positive message.
pub fn generate_explanation(factors: &UsageFactors, score: f64, tier: RiskTier) -> String {
    let mut concerns: Vec<String> = Vec::new();

    if factors.screen_time > 60.0 {
        concerns.push(format!(
            "High daily screen time ({:.0}% above healthy threshold)",
            factors.screen_time
        ));
    }
    if factors.night_usage > 40.0 {
        concerns.push("Significant late-night device usage detected".to_string());
    }
    if factors.social_media_ratio > 50.0 {
        concerns.push(format!(
            "Social media dominates {:.0}% of usage",
            factors.social_media_ratio
        ));
    }
    if factors.app_switching > 40.0 {
        concerns.push("Frequent app switching suggests digital restlessness".to_string());
    }
    if factors.sentiment_volatility > 50.0 {
        concerns.push("Emotional volatility detected in usage patterns".to_string());
    }
    if factors.reward_dependency > 50.0 {
        concerns.push("Reward-driven usage behavior identified".to_string());
    }

    if concerns.is_empty() {
        return format!(
            "Overall digital wellbeing is healthy with a {} risk score of {:.0}/100. \
             Keep up the good habits!",
            tier.as_str().to_lowercase(),
            score
        );
    }

    format!(
        "Risk level: {} ({:.0}/100). Key concerns: {}. Recommendation: {}",
        tier.as_str(),
        score,
        concerns.join(". "),
        recommendation(tier)
    )
}

/// Tier-specific recommendation text
fn recommendation(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Critical => "Immediate intervention recommended. Consider professional guidance.",
        RiskTier::High => "Active monitoring needed. Discuss digital habits with your child.",
        RiskTier::Moderate => "Monitor trends over the coming week. Set clearer boundaries.",
        RiskTier::Low => "Continue current approach. Usage patterns are healthy.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_factors(value: f64) -> UsageFactors {
        UsageFactors {
            screen_time: value,
            night_usage: value,
            social_media_ratio: value,
            app_switching: value,
            sentiment_volatility: value,
            reward_dependency: value,
        }
    }

    #[test]
    fn test_weights_align_with_factor_order() {
        let factors = UsageFactors::default();
        for ((name, _), (weight_name, _)) in factors.named().iter().zip(WEIGHTS.iter()) {
            assert_eq!(name, weight_name);
        }
    }

    #[test]
    fn test_all_zero_factors() {
        let assessment = AddictionScorer::calculate_score(&UsageFactors::default());

        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.risk_level, RiskTier::Low);
        assert!(assessment.explanation.contains("low risk score of 0/100"));
    }

    #[test]
    fn test_all_max_factors() {
        let assessment = AddictionScorer::calculate_score(&all_factors(100.0));

        assert_eq!(assessment.score, 100.0);
        assert_eq!(assessment.risk_level, RiskTier::Critical);
        assert!(assessment
            .explanation
            .starts_with("Risk level: CRITICAL (100/100)"));
        assert!(assessment
            .explanation
            .ends_with("Immediate intervention recommended. Consider professional guidance."));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let oversized = UsageFactors {
            screen_time: 150.0,
            ..Default::default()
        };
        let capped = UsageFactors {
            screen_time: 100.0,
            ..Default::default()
        };

        let a = AddictionScorer::calculate_score(&oversized);
        let b = AddictionScorer::calculate_score(&capped);

        assert_eq!(a.score, 25.0);
        assert_eq!(a.score, b.score);

        let negative = UsageFactors {
            night_usage: -30.0,
            ..Default::default()
        };
        assert_eq!(AddictionScorer::calculate_score(&negative).score, 0.0);
    }

    #[test]
    fn test_score_always_bounded() {
        for value in [-500.0, -1.0, 0.0, 37.5, 100.0, 1e6] {
            let assessment = AddictionScorer::calculate_score(&all_factors(value));
            assert!(assessment.score >= 0.0 && assessment.score <= 100.0);
            assert!(!assessment.explanation.is_empty());
        }
    }

    #[test]
    fn test_tier_band_boundaries() {
        assert_eq!(classify_risk(0.0), RiskTier::Low);
        assert_eq!(classify_risk(25.0), RiskTier::Low);
        assert_eq!(classify_risk(26.0), RiskTier::Moderate);
        assert_eq!(classify_risk(50.0), RiskTier::Moderate);
        assert_eq!(classify_risk(51.0), RiskTier::High);
        assert_eq!(classify_risk(75.0), RiskTier::High);
        assert_eq!(classify_risk(76.0), RiskTier::Critical);
        assert_eq!(classify_risk(100.0), RiskTier::Critical);
    }

    #[test]
    fn test_scores_between_bands_map_to_critical() {
        // Band boundaries are integer-ish; fractional scores in the gaps
        // fall through to CRITICAL, matching the band table literally.
        assert_eq!(classify_risk(25.5), RiskTier::Critical);
        assert_eq!(classify_risk(50.5), RiskTier::Critical);
        assert_eq!(classify_risk(120.0), RiskTier::Critical);
    }

    #[test]
    fn test_concern_sentences_follow_factor_order() {
        let factors = UsageFactors {
            screen_time: 72.0,
            night_usage: 55.0,
            social_media_ratio: 80.0,
            ..Default::default()
        };
        let assessment = AddictionScorer::calculate_score(&factors);

        let screen = assessment
            .explanation
            .find("High daily screen time (72% above healthy threshold)")
            .unwrap();
        let night = assessment
            .explanation
            .find("Significant late-night device usage detected")
            .unwrap();
        let social = assessment
            .explanation
            .find("Social media dominates 80% of usage")
            .unwrap();

        assert!(screen < night);
        assert!(night < social);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Values exactly at a threshold do not trigger a concern
        let factors = UsageFactors {
            screen_time: 60.0,
            night_usage: 40.0,
            social_media_ratio: 50.0,
            app_switching: 40.0,
            sentiment_volatility: 50.0,
            reward_dependency: 50.0,
        };
        let assessment = AddictionScorer::calculate_score(&factors);

        assert!(assessment.explanation.contains("Keep up the good habits!"));
    }

    #[test]
    fn test_raw_values_drive_explanation() {
        // 150 clamps to 100 for scoring but the concern interpolates the raw value
        let factors = UsageFactors {
            screen_time: 150.0,
            ..Default::default()
        };
        let assessment = AddictionScorer::calculate_score(&factors);

        assert_eq!(assessment.score, 25.0);
        assert!(assessment
            .explanation
            .contains("High daily screen time (150% above healthy threshold)"));
    }

    #[test]
    fn test_idempotence() {
        let factors = all_factors(64.2);
        let first = AddictionScorer::calculate_score(&factors);
        let second = AddictionScorer::calculate_score(&factors);

        assert_eq!(first.score, second.score);
        assert_eq!(first.risk_level, second.risk_level);
        assert_eq!(first.explanation, second.explanation);
    }
}
