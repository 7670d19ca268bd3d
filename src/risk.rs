//! Risk tier classification.

use serde::Serialize;

/// Scores at or above this value are at least `MEDIUM` risk.
pub const MEDIUM_SCORE: f64 = 25.0;

/// Default score threshold for `HIGH` risk.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Risk tier derived from a confidence score and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Classify a score against the caller's threshold.
    ///
    /// The threshold check runs first, so with a threshold below 25 a score
    /// in `[threshold, 25)` is still `High`.
    pub fn classify(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            RiskLevel::High
        } else if score >= MEDIUM_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Upper-case label as it appears in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(RiskLevel::classify(87.0, 50.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(40.0, 50.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(12.0, 50.0), RiskLevel::Low);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(RiskLevel::classify(70.0, DEFAULT_THRESHOLD), RiskLevel::High);
        assert_eq!(RiskLevel::classify(69.9, DEFAULT_THRESHOLD), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(25.0, DEFAULT_THRESHOLD), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(24.9, DEFAULT_THRESHOLD), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(0.0, DEFAULT_THRESHOLD), RiskLevel::Low);
    }

    #[test]
    fn test_low_threshold_wins_over_medium_floor() {
        assert_eq!(RiskLevel::classify(10.0, 10.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(24.0, 10.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(9.0, 10.0), RiskLevel::Low);
    }

    #[test]
    fn test_unclamped_thresholds() {
        assert_eq!(RiskLevel::classify(0.0, -5.0), RiskLevel::High);
        assert_eq!(RiskLevel::classify(100.0, 150.0), RiskLevel::Medium);
    }

    #[test]
    fn test_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"HIGH\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(RiskLevel::Low.to_string(), "LOW");
    }
}
