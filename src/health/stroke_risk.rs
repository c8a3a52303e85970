//! Rule-based stroke-risk score.

/// Highest score the rules can produce (age 3 + hypertension 3 + diabetes 2
/// + smoking 2).
pub const MAX_SCORE: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeRiskLevel {
    Low,
    Moderate,
    High,
}

impl StrokeRiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrokeRiskLevel::Low => "Low Risk",
            StrokeRiskLevel::Moderate => "Moderate Risk",
            StrokeRiskLevel::High => "High Risk",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeRiskResult {
    pub score: u8,
    pub level: StrokeRiskLevel,
}

/// Point total from age band and boolean risk factors.
///
/// Age bands: >55 adds 3, >45 adds 2, >35 adds 1. Hypertension adds 3,
/// diabetes 2, smoking 2. Classification: ≤2 low, ≤5 moderate, else high.
pub fn stroke_risk(age: u32, hypertension: bool, diabetes: bool, smoking: bool) -> StrokeRiskResult {
    let mut score: u8 = if age > 55 {
        3
    } else if age > 45 {
        2
    } else if age > 35 {
        1
    } else {
        0
    };

    if hypertension {
        score += 3;
    }
    if diabetes {
        score += 2;
    }
    if smoking {
        score += 2;
    }

    let level = if score <= 2 {
        StrokeRiskLevel::Low
    } else if score <= 5 {
        StrokeRiskLevel::Moderate
    } else {
        StrokeRiskLevel::High
    };

    StrokeRiskResult { score, level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_factors_hit_the_maximum() {
        let result = stroke_risk(60, true, true, true);
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.level, StrokeRiskLevel::High);
    }

    #[test]
    fn young_and_healthy_scores_zero() {
        let result = stroke_risk(30, false, false, false);
        assert_eq!(result.score, 0);
        assert_eq!(result.level, StrokeRiskLevel::Low);
    }

    #[test]
    fn age_bands() {
        assert_eq!(stroke_risk(35, false, false, false).score, 0);
        assert_eq!(stroke_risk(36, false, false, false).score, 1);
        assert_eq!(stroke_risk(46, false, false, false).score, 2);
        assert_eq!(stroke_risk(56, false, false, false).score, 3);
    }

    #[test]
    fn classification_boundaries() {
        // Score 2 is still low, 5 is still moderate, 6 is high.
        assert_eq!(stroke_risk(46, false, false, false).level, StrokeRiskLevel::Low);
        assert_eq!(stroke_risk(46, true, false, false).level, StrokeRiskLevel::Moderate);
        assert_eq!(stroke_risk(36, true, true, false).level, StrokeRiskLevel::High);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        assert_eq!(
            stroke_risk(48, true, false, true),
            stroke_risk(48, true, false, true)
        );
    }
}
