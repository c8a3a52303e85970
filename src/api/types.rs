//! API Payload Types
//!
//! One explicit serde type per endpoint payload. Everything crossing the
//! HTTP boundary is validated into these shapes before a page sees it.

use serde::{Deserialize, Serialize};

/// Coarse ordinal risk classification derived from a confidence score.
///
/// The backend spells the middle band "Moderate"; it is accepted as an alias
/// and displayed as "Medium".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    #[serde(alias = "Moderate")]
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Result of a brain-scan analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub prediction: String,
    /// Percent scale, 0-100.
    pub confidence: f64,
    pub stroke_detected: bool,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub stroke_type: Option<String>,
    /// Base64-encoded Grad-CAM overlay, passed through opaquely.
    #[serde(default)]
    pub gradcam_image: Option<String>,
}

/// Bot reply from the chat endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: String,
}

/// Scan count for a single day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyScans {
    pub date: String,
    pub count: u32,
}

/// One bucket of the risk distribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBucket {
    pub category: String,
    pub count: u32,
}

/// Detected cases for one region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCases {
    pub region: String,
    pub cases: u32,
}

/// Full analytics payload. Replaced wholesale on every refetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_scans: u32,
    pub stroke_detected: u32,
    pub normal_scans: u32,
    /// Percent of scans with stroke indicators.
    pub detection_rate: f64,
    /// Percent scale, 0-100.
    pub avg_confidence: f64,
    pub daily_scans: Vec<DailyScans>,
    pub risk_distribution: Vec<RiskBucket>,
    pub geographic_data: Vec<RegionCases>,
}

/// Time range accepted by the analytics endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyticsRange {
    Week,
    Month,
    Quarter,
}

impl AnalyticsRange {
    pub const ALL: [AnalyticsRange; 3] = [
        AnalyticsRange::Week,
        AnalyticsRange::Month,
        AnalyticsRange::Quarter,
    ];

    /// Query-string value the backend expects.
    pub fn as_query(self) -> &'static str {
        match self {
            AnalyticsRange::Week => "7d",
            AnalyticsRange::Month => "30d",
            AnalyticsRange::Quarter => "90d",
        }
    }

    pub fn days(self) -> u32 {
        match self {
            AnalyticsRange::Week => 7,
            AnalyticsRange::Month => 30,
            AnalyticsRange::Quarter => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AnalyticsRange::Week => "Last 7 Days",
            AnalyticsRange::Month => "Last 30 Days",
            AnalyticsRange::Quarter => "Last 90 Days",
        }
    }
}

/// A nearby neurology hospital.
#[derive(Clone, Debug, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub address: String,
    pub distance: String,
    pub phone: String,
    pub url: String,
    pub lat: f64,
    pub lon: f64,
}

/// Server-issued, time- and access-limited share link. The client renders
/// this metadata but never enforces it; enforcement is server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub id: String,
    pub url: String,
    pub expires_at: String,
    pub access_count: u32,
    pub max_access: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct ShareRequest {
    pub scan_id: String,
    pub expiry_days: u32,
    pub max_access: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct EmailShareRequest {
    pub share_id: String,
    pub emails: Vec<String>,
}

/// Everything the report generator needs to lay out the PDF.
#[derive(Clone, Debug, Serialize)]
pub struct ReportRequest {
    pub patient_name: String,
    pub image_name: String,
    pub prediction: String,
    pub confidence: f64,
    pub stroke_detected: bool,
    pub risk_level: RiskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_type: Option<String>,
    pub recommendations: Vec<String>,
    pub chatbot_advice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradcam_base64: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WellnessTip {
    pub tip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_result_decodes_backend_payload() {
        let json = r#"{
            "prediction": "Stroke Risk Detected",
            "confidence": 87.42,
            "stroke_detected": true,
            "risk_level": "Moderate",
            "timestamp": "2025-11-05T10:30:00",
            "recommendations": ["Consult a neurologist immediately"],
            "stroke_type": "Ischemic Stroke",
            "gradcam_image": null
        }"#;

        let result: DetectionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(result.stroke_detected);
        assert_eq!(result.confidence, 87.42);
        assert!(result.gradcam_image.is_none());
    }

    #[test]
    fn detection_result_tolerates_missing_optionals() {
        let json = r#"{
            "prediction": "No Stroke Detected",
            "confidence": 72.0,
            "stroke_detected": false,
            "risk_level": "Low",
            "recommendations": []
        }"#;

        let result: DetectionResult = serde_json::from_str(json).unwrap();
        assert!(result.timestamp.is_none());
        assert!(result.stroke_type.is_none());
    }

    #[test]
    fn analytics_snapshot_decodes() {
        let json = r#"{
            "total_scans": 1247,
            "stroke_detected": 423,
            "normal_scans": 824,
            "detection_rate": 33.9,
            "avg_confidence": 87.5,
            "daily_scans": [{"date": "2025-11-01", "count": 38}],
            "risk_distribution": [{"category": "High Risk", "count": 156}],
            "geographic_data": [{"region": "Delhi NCR", "cases": 189}]
        }"#;

        let snapshot: AnalyticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(
            snapshot.stroke_detected + snapshot.normal_scans,
            snapshot.total_scans
        );
        assert_eq!(snapshot.daily_scans[0].count, 38);
    }

    #[test]
    fn risk_level_orders_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn analytics_range_round_trip() {
        for range in AnalyticsRange::ALL {
            assert_eq!(range.as_query().trim_end_matches('d').parse::<u32>().unwrap(), range.days());
        }
    }

    #[test]
    fn report_request_skips_absent_heatmap() {
        let request = ReportRequest {
            patient_name: "Asha".to_string(),
            image_name: "brain_scan.jpg".to_string(),
            prediction: "No Stroke Detected".to_string(),
            confidence: 72.0,
            stroke_detected: false,
            risk_level: RiskLevel::Low,
            stroke_type: None,
            recommendations: vec![],
            chatbot_advice: String::new(),
            gradcam_base64: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("gradcam_base64").is_none());
        assert!(json.get("stroke_type").is_none());
    }
}
