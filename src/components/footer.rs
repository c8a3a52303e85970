//! Footer Component
//!
//! Site footer with emergency contacts and the medical disclaimer.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 mt-12">
            <div class="container mx-auto px-4 py-10">
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-8 mb-8">
                    <div>
                        <div class="flex items-center space-x-2 mb-3">
                            <span class="text-2xl">"🧠"</span>
                            <h3 class="text-lg font-bold text-white">"BrainHealth AI"</h3>
                        </div>
                        <p class="text-sm leading-relaxed">
                            "AI-powered platform for early brain stroke detection and healthcare guidance using advanced deep learning."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-3">"Quick Links"</h4>
                        <ul class="space-y-2 text-sm">
                            <li><A href="/detection" class="hover:text-white">"Stroke Detection"</A></li>
                            <li><A href="/chatbot" class="hover:text-white">"AI Chatbot"</A></li>
                            <li><A href="/tools" class="hover:text-white">"Health Tools"</A></li>
                            <li><A href="/learn" class="hover:text-white">"Learn"</A></li>
                            <li><A href="/helpdesk" class="hover:text-white">"Helpdesk"</A></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-white font-semibold mb-3">"Emergency"</h4>
                        <ul class="space-y-2 text-sm">
                            <li>"Ambulance: " <strong class="text-white">"108"</strong></li>
                            <li>"Emergency: " <strong class="text-white">"112"</strong></li>
                        </ul>
                        <div class="mt-4 p-3 bg-red-900/20 border border-red-500/30 rounded-lg">
                            <p class="text-xs text-red-300">
                                <strong>"Warning: "</strong>
                                "If experiencing stroke symptoms (F.A.S.T.), call emergency immediately!"
                            </p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-6">
                    <p class="text-xs text-gray-500">
                        <strong>"Medical Disclaimer: "</strong>
                        "BrainHealth AI is an educational and assistive tool only. It is NOT a substitute for \
                         professional medical advice, diagnosis, or treatment. Always consult qualified healthcare \
                         providers for medical decisions."
                    </p>
                </div>
            </div>
        </footer>
    }
}
