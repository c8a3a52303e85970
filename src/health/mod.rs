//! Numeric Health Calculators
//!
//! Pure, synchronous, side-effect-free. The tools page invokes these
//! directly; nothing here touches the network or the DOM.

pub mod blood_pressure;
pub mod bmi;
pub mod stroke_risk;

pub use blood_pressure::{blood_pressure, BpCategory};
pub use bmi::{bmi, BmiCategory, BmiResult};
pub use stroke_risk::{stroke_risk, StrokeRiskLevel, StrokeRiskResult, MAX_SCORE};
