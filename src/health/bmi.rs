//! Body-mass index.

/// BMI classification bands, exclusive upper bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// Value rounded to one decimal for display.
    pub fn display_value(&self) -> f64 {
        (self.value * 10.0).round() / 10.0
    }
}

/// BMI from height in centimetres and weight in kilograms:
/// `weight / (height/100)^2`.
///
/// Non-positive or non-finite input yields no result; the UI shows nothing
/// for invalid input rather than an error.
pub fn bmi(height_cm: f64, weight_kg: f64) -> Option<BmiResult> {
    if !height_cm.is_finite() || !weight_kg.is_finite() || height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }

    let meters = height_cm / 100.0;
    let value = weight_kg / (meters * meters);
    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::Normal
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    Some(BmiResult { value, category })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_case_is_normal() {
        let result = bmi(170.0, 70.0).unwrap();
        assert_eq!(result.display_value(), 24.2);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn low_weight_is_underweight() {
        assert_eq!(bmi(160.0, 45.0).unwrap().category, BmiCategory::Underweight);
    }

    #[test]
    fn band_boundaries_are_exclusive_above() {
        // 180cm/95kg computes 29.3, inside the overweight band.
        assert_eq!(bmi(180.0, 95.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi(170.0, 95.0).unwrap().category, BmiCategory::Obese);
        // Exactly 25.0 is overweight, exactly 18.5 is normal.
        assert_eq!(bmi(200.0, 100.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi(200.0, 74.0).unwrap().category, BmiCategory::Normal);
    }

    #[test]
    fn invalid_input_yields_no_result() {
        assert!(bmi(0.0, 70.0).is_none());
        assert!(bmi(170.0, 0.0).is_none());
        assert!(bmi(-170.0, 70.0).is_none());
        assert!(bmi(f64::NAN, 70.0).is_none());
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        assert_eq!(bmi(172.5, 68.3), bmi(172.5, 68.3));
    }
}
