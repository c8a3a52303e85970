//! Stats Component
//!
//! Headline platform figures shown on the home page.

use leptos::*;

const STATS: [(&str, &str, &str); 4] = [
    ("👥", "50K+", "Users Worldwide"),
    ("🧠", "100K+", "Scans Analyzed"),
    ("📈", "99.2%", "Accuracy Rate"),
    ("🏆", "24/7", "Availability"),
];

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-r from-blue-600 to-purple-600 py-12">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-8">
                    {STATS.iter().map(|(icon, value, label)| view! {
                        <div class="text-center">
                            <div class="text-3xl mb-2">{*icon}</div>
                            <div class="text-4xl font-bold text-white mb-1">{*value}</div>
                            <div class="text-blue-100">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
