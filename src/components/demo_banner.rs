//! Demo Banner Component
//!
//! Labels simulated results so they can never pass for real analysis.

use leptos::*;

#[component]
pub fn DemoBanner() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 bg-yellow-50 border border-yellow-300 text-yellow-800 px-4 py-2 rounded-lg text-sm">
            <span>"⚠️"</span>
            <span>
                <strong>"Demo Mode: "</strong>
                "showing simulated results because the analysis backend is not connected."
            </span>
        </div>
    }
}
