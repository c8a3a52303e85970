//! About Page
//!
//! Platform description plus the backend-endpoint setting.

use leptos::*;

use crate::config;
use crate::state::global::GlobalState;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-12 max-w-3xl">
            <h1 class="text-4xl font-bold mb-6 text-center">
                "About " <span class="text-blue-600">"BrainHealth AI"</span>
            </h1>

            <div class="space-y-6 text-gray-700 leading-relaxed">
                <p>
                    "BrainHealth AI is an educational healthcare platform for early brain stroke \
                     awareness. Brain scans are analyzed with a convolutional neural network, \
                     backed by an AI chatbot for neurology questions, population analytics, \
                     interactive health calculators, and secure result sharing."
                </p>
                <p>
                    "Your medical data is never stored. Uploaded scans are processed transiently \
                     and chatbot conversations are not retained."
                </p>

                <EndpointSettings />

                <div class="bg-yellow-50 border-2 border-yellow-200 rounded-xl p-6">
                    <h2 class="font-bold text-yellow-900 mb-2">"⚠️ Medical Disclaimer"</h2>
                    <p class="text-sm text-yellow-800">
                        "This platform is an educational and assistive tool only. It is NOT a \
                         substitute for professional medical advice, diagnosis, or treatment. \
                         Always consult qualified healthcare providers for medical decisions. \
                         In case of emergency, call your local emergency services immediately."
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Backend endpoint override. A localhost value keeps the app in demo mode.
#[component]
fn EndpointSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(config::api_base());

    let save_url = move |_| {
        let url = api_url.get_untracked().trim().to_string();
        if url.is_empty() {
            state.show_error("Endpoint URL cannot be empty");
            return;
        }
        config::set_api_base(&url);
        state.show_success("Endpoint saved");
    };

    view! {
        <div class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
            <h2 class="font-bold text-gray-900 mb-2">"Backend Endpoint"</h2>
            <p class="text-sm text-gray-600 mb-4">
                "Detection, chat, and analytics talk to this URL. Leave it pointing at \
                 localhost to stay in demo mode with simulated results."
            </p>
            <div class="flex space-x-2">
                <input
                    type="text"
                    class="flex-1 border border-gray-300 rounded-lg px-4 py-2 focus:border-blue-500 focus:outline-none"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
                <button
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 transition-colors"
                    on:click=save_url
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}
