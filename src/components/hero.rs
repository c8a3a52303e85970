//! Hero Component
//!
//! Landing banner with the primary call to action.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-br from-blue-50 via-white to-purple-50 py-16">
            <div class="container mx-auto px-4 text-center">
                <div class="inline-flex items-center space-x-2 bg-blue-100 text-blue-700 px-5 py-2 rounded-full mb-6 shadow-sm">
                    <span>"✨"</span>
                    <span class="text-sm font-semibold">"AI-Powered Healthcare Platform"</span>
                </div>

                <h1 class="text-5xl font-bold leading-tight mb-6">
                    "Early " <span class="text-blue-600">"Stroke Detection"</span> " Saves Lives"
                </h1>

                <p class="text-xl text-gray-600 leading-relaxed max-w-2xl mx-auto mb-8">
                    "Upload your brain scan and get instant AI-powered analysis using advanced CNN deep learning. \
                     Detect strokes early, find nearby hospitals, and get expert guidance, all in one place."
                </p>

                <div class="flex justify-center gap-4">
                    <A href="/detection" class="px-6 py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700 transition-colors">
                        "🧠 Start Detection"
                    </A>
                    <A href="/learn" class="px-6 py-3 bg-white border border-gray-300 rounded-lg font-semibold hover:bg-gray-50 transition-colors">
                        "Learn About Strokes"
                    </A>
                </div>
            </div>
        </section>
    }
}
