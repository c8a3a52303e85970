//! Local wellness-tip pool.
//!
//! Shown when the tip endpoint is unreachable so the home page never renders
//! an empty card.

use rand::Rng;

use crate::api::ApiError;
use crate::demo::Fetched;

pub const FALLBACK_TIPS: [&str; 10] = [
    "🧠 Your brain uses 20% of your body's oxygen and energy!",
    "💧 Stay hydrated - dehydration affects brain function",
    "🎵 Listening to music boosts brain connectivity",
    "😴 Get 7-9 hours of sleep for optimal brain health",
    "🥗 Eat omega-3 rich foods for better cognition",
    "🏃 Exercise increases brain-derived neurotrophic factor",
    "📚 Learning new skills creates new neural pathways",
    "🧘 Meditation reduces stress and improves focus",
    "🤝 Social connections protect brain health",
    "☀️ Sunlight exposure boosts mood and vitamin D",
];

pub fn random_tip(rng: &mut impl Rng) -> &'static str {
    FALLBACK_TIPS[rng.gen_range(0..FALLBACK_TIPS.len())]
}

/// Apply the fallback policy to a tip fetch: a local tip substitutes only
/// when the backend was unreachable. Server-reported errors propagate like
/// everywhere else.
pub fn tip_or_local(
    outcome: Result<String, ApiError>,
    rng: &mut impl Rng,
) -> Result<Fetched<String>, ApiError> {
    match outcome {
        Ok(tip) => Ok(Fetched::Live(tip)),
        Err(err) if err.is_unreachable() => Ok(Fetched::Simulated(random_tip(rng).to_string())),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_tip_comes_from_the_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let tip = random_tip(&mut rng);
            assert!(FALLBACK_TIPS.contains(&tip));
            assert!(!tip.is_empty());
        }
    }

    #[test]
    fn local_tip_substitutes_only_when_unreachable() {
        let mut rng = StdRng::seed_from_u64(2);

        let live = tip_or_local(Ok("drink water".to_string()), &mut rng).unwrap();
        assert_eq!(live, Fetched::Live("drink water".to_string()));

        let offline = tip_or_local(
            Err(ApiError::Unreachable("connection refused".to_string())),
            &mut rng,
        )
        .unwrap();
        assert!(offline.is_simulated());
        assert!(FALLBACK_TIPS.contains(&offline.value().as_str()));

        // Server-reported errors surface instead of being masked.
        let status = tip_or_local(
            Err(ApiError::Status {
                status: 500,
                message: "tip service down".to_string(),
            }),
            &mut rng,
        );
        assert!(status.is_err());
    }
}
