//! Blood-pressure banding.

/// Blood-pressure classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BpCategory {
    Normal,
    Elevated,
    Stage1,
    Stage2,
    HypertensiveCrisis,
}

impl BpCategory {
    pub fn label(self) -> &'static str {
        match self {
            BpCategory::Normal => "✅ Normal",
            BpCategory::Elevated => "⚠️ Elevated",
            BpCategory::Stage1 => "🟡 High BP Stage 1",
            BpCategory::Stage2 => "🔴 High BP Stage 2",
            BpCategory::HypertensiveCrisis => "🚨 Hypertensive Crisis",
        }
    }
}

/// Band a reading, clause-for-clause identical to the published checker.
///
/// Evaluation is first-match-wins and clause order decides overlapping
/// ranges: the Stage 2 clause precedes the crisis clause, so readings at or
/// above 180/120 still classify as Stage 2 and the final arm cannot be
/// reached. Keep the order in sync with the reference behavior; re-ordering
/// is a stakeholder decision, not a cleanup.
pub fn blood_pressure(systolic: i32, diastolic: i32) -> BpCategory {
    if systolic < 120 && diastolic < 80 {
        BpCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        BpCategory::Elevated
    } else if systolic < 140 || diastolic < 90 {
        BpCategory::Stage1
    } else if systolic >= 140 || diastolic >= 90 {
        BpCategory::Stage2
    } else {
        BpCategory::HypertensiveCrisis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_bands() {
        assert_eq!(blood_pressure(119, 79), BpCategory::Normal);
        assert_eq!(blood_pressure(125, 79), BpCategory::Elevated);
        assert_eq!(blood_pressure(135, 85), BpCategory::Stage1);
        assert_eq!(blood_pressure(150, 95), BpCategory::Stage2);
    }

    #[test]
    fn crisis_readings_classify_stage_2_by_clause_order() {
        // 185/125 satisfies the crisis thresholds, but the Stage 2 clause is
        // evaluated first. This literal behavior is load-bearing.
        assert_eq!(blood_pressure(185, 125), BpCategory::Stage2);
        assert_eq!(blood_pressure(200, 130), BpCategory::Stage2);
    }

    #[test]
    fn elevated_requires_low_diastolic() {
        // 125/85: diastolic blocks Normal and Elevated, systolic grants Stage 1.
        assert_eq!(blood_pressure(125, 85), BpCategory::Stage1);
    }

    #[test]
    fn boundaries() {
        assert_eq!(blood_pressure(120, 79), BpCategory::Elevated);
        assert_eq!(blood_pressure(130, 79), BpCategory::Stage1);
        assert_eq!(blood_pressure(140, 90), BpCategory::Stage2);
        assert_eq!(blood_pressure(139, 89), BpCategory::Stage1);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        assert_eq!(blood_pressure(128, 82), blood_pressure(128, 82));
    }
}
