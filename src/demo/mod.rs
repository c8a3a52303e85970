//! Demo-Fallback Strategy
//!
//! The UI must stay usable without a backend. Every fallback-capable page
//! routes its fetch through [`fetch_or_simulate`], which substitutes a
//! locally generated payload when the configured endpoint is a local
//! placeholder or the call fails at the network level. Simulated values are
//! tagged so the pages can render the demo banner; the label is never
//! omitted.

pub mod analytics;
pub mod detection;
pub mod share;
pub mod tips;

use std::future::Future;

use crate::api::ApiError;
use crate::config;

/// How long the simulated analysis pretends to work, in milliseconds.
const DEMO_DELAY_MS: u32 = 2_500;

/// A payload together with its provenance.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched<T> {
    /// Produced by the real backend.
    Live(T),
    /// Locally synthesized substitute, shape-identical to a real response.
    Simulated(T),
}

impl<T> Fetched<T> {
    pub fn value(&self) -> &T {
        match self {
            Fetched::Live(value) | Fetched::Simulated(value) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Live(value) | Fetched::Simulated(value) => value,
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, Fetched::Simulated(_))
    }
}

/// Run a live call, or substitute simulated data.
///
/// The demo path is taken when the configured endpoint is a local
/// placeholder, or when the live call fails without a response. Server-
/// reported errors and decode failures propagate; masking those would hide
/// a real backend misbehaving.
pub async fn fetch_or_simulate<T, Fut>(
    fetch: impl FnOnce() -> Fut,
    simulate: impl FnOnce() -> T,
) -> Result<Fetched<T>, ApiError>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    if config::is_demo_endpoint(&config::api_base()) {
        demo_delay().await;
        return Ok(Fetched::Simulated(simulate()));
    }

    match fetch().await {
        Ok(value) => Ok(Fetched::Live(value)),
        Err(err) if err.is_unreachable() => {
            web_sys::console::warn_1(
                &format!("backend unreachable, using simulated data: {}", err).into(),
            );
            Ok(Fetched::Simulated(simulate()))
        }
        Err(err) => Err(err),
    }
}

async fn demo_delay() {
    gloo_timers::future::TimeoutFuture::new(DEMO_DELAY_MS).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_exposes_value_and_provenance() {
        let live = Fetched::Live(3);
        let simulated = Fetched::Simulated(3);
        assert_eq!(live.value(), simulated.value());
        assert!(!live.is_simulated());
        assert!(simulated.is_simulated());
        assert_eq!(simulated.into_value(), 3);
    }
}
