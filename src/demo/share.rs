//! Simulated share links.

use chrono::{Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::api::types::ShareLink;

/// Generate a substitute share link with the real endpoint's shape:
/// `SHR`-prefixed id, a token URL, an expiry derived from the requested
/// number of days, and a zero access count.
pub fn simulate_share_link(rng: &mut impl Rng, expiry_days: u32, max_access: u32) -> ShareLink {
    let id_suffix: String = (&mut *rng)
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    let token: String = (&mut *rng)
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();

    ShareLink {
        id: format!("SHR{}", id_suffix),
        url: format!("https://brainhealth-ai.com/view/{}", token),
        expires_at: (Utc::now() + Duration::days(expiry_days as i64)).to_rfc3339(),
        access_count: 0,
        max_access,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn simulated_link_has_expected_shape() {
        let mut rng = StdRng::seed_from_u64(9);
        let link = simulate_share_link(&mut rng, 7, 5);

        assert!(link.id.starts_with("SHR"));
        assert_eq!(link.id.len(), 12);
        assert!(link.url.starts_with("https://brainhealth-ai.com/view/"));
        assert_eq!(link.access_count, 0);
        assert_eq!(link.max_access, 5);

        let expires = DateTime::parse_from_rfc3339(&link.expires_at).unwrap();
        assert!(expires > Utc::now());
    }

    #[test]
    fn each_generation_yields_a_fresh_link() {
        let mut rng = StdRng::seed_from_u64(9);
        let first = simulate_share_link(&mut rng, 7, 5);
        let second = simulate_share_link(&mut rng, 7, 5);
        assert_ne!(first.id, second.id);
        assert_ne!(first.url, second.url);
    }
}
