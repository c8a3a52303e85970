//! Home Page
//!
//! Landing page: hero, platform stats, feature grid, and the daily tip.

use leptos::*;

use crate::components::{Features, Hero, Stats, WellnessTip};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero />
        <Stats />
        <Features />
        <WellnessTip />
    }
}
