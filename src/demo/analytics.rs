//! Simulated analytics snapshot.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::api::types::{AnalyticsRange, AnalyticsSnapshot, DailyScans, RegionCases, RiskBucket};

/// The backend never returns more than 30 daily entries regardless of range.
const MAX_DAILY_ENTRIES: u32 = 30;

const REGIONS: [&str; 5] = [
    "Andhra Pradesh",
    "Delhi NCR",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
];

/// Generate a substitute analytics snapshot.
///
/// Internally consistent by construction: stroke and normal counts sum to
/// the total, and the detection rate is derived from them.
pub fn simulate_analytics(rng: &mut impl Rng, range: AnalyticsRange) -> AnalyticsSnapshot {
    let stroke_detected: u32 = rng.gen_range(350..=500);
    let normal_scans: u32 = rng.gen_range(700..=900);
    let total_scans = stroke_detected + normal_scans;
    let detection_rate =
        ((stroke_detected as f64 / total_scans as f64) * 1000.0).round() / 10.0;

    let days = range.days().min(MAX_DAILY_ENTRIES);
    let today = Utc::now().date_naive();
    let daily_scans = (0..days)
        .rev()
        .map(|back| DailyScans {
            date: (today - Duration::days(back as i64))
                .format("%Y-%m-%d")
                .to_string(),
            count: rng.gen_range(35..=65),
        })
        .collect();

    // Split positive findings across the risk bands; remainder lands in the
    // high bucket so the three always sum to the stroke count.
    let medium = stroke_detected * 2 / 5;
    let low = stroke_detected / 3;
    let high = stroke_detected - medium - low;
    let risk_distribution = vec![
        RiskBucket { category: "High Risk".to_string(), count: high },
        RiskBucket { category: "Medium Risk".to_string(), count: medium },
        RiskBucket { category: "Low Risk".to_string(), count: low },
        RiskBucket { category: "Normal".to_string(), count: normal_scans },
    ];

    let geographic_data = REGIONS
        .iter()
        .map(|region| RegionCases {
            region: region.to_string(),
            cases: rng.gen_range(100..=250),
        })
        .collect();

    AnalyticsSnapshot {
        total_scans,
        stroke_detected,
        normal_scans,
        detection_rate,
        avg_confidence: (rng.gen_range(82.0..=93.0_f64) * 10.0).round() / 10.0,
        daily_scans,
        risk_distribution,
        geographic_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn counts_are_internally_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let snapshot = simulate_analytics(&mut rng, AnalyticsRange::Month);
            assert_eq!(
                snapshot.stroke_detected + snapshot.normal_scans,
                snapshot.total_scans
            );

            let positives: u32 = snapshot
                .risk_distribution
                .iter()
                .filter(|b| b.category != "Normal")
                .map(|b| b.count)
                .sum();
            assert_eq!(positives, snapshot.stroke_detected);

            let expected_rate = (snapshot.stroke_detected as f64
                / snapshot.total_scans as f64)
                * 100.0;
            assert!((snapshot.detection_rate - expected_rate).abs() < 0.1);
        }
    }

    #[test]
    fn daily_series_covers_the_range_capped_at_thirty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            simulate_analytics(&mut rng, AnalyticsRange::Week).daily_scans.len(),
            7
        );
        assert_eq!(
            simulate_analytics(&mut rng, AnalyticsRange::Month).daily_scans.len(),
            30
        );
        assert_eq!(
            simulate_analytics(&mut rng, AnalyticsRange::Quarter).daily_scans.len(),
            30
        );
    }

    #[test]
    fn daily_series_is_chronological() {
        let mut rng = StdRng::seed_from_u64(5);
        let snapshot = simulate_analytics(&mut rng, AnalyticsRange::Week);
        let dates: Vec<_> = snapshot.daily_scans.iter().map(|d| d.date.clone()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}
