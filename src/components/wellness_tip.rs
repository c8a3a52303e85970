//! Wellness Tip Component
//!
//! "Brain Booster of the Day" card. Tips come from the backend when it is
//! reachable; otherwise one is drawn from the local pool so the card always
//! shows something.

use leptos::*;
use rand::thread_rng;

use crate::api;
use crate::demo::tips;
use crate::state::global::GlobalState;

#[component]
pub fn WellnessTip() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (tip, set_tip) = create_signal(tips::FALLBACK_TIPS[0].to_string());
    let (offline, set_offline) = create_signal(false);
    let (loading, set_loading) = create_signal(false);

    let fetch_tip = move || {
        let state = state.clone();
        set_loading.set(true);
        spawn_local(async move {
            let outcome = api::client::fetch_wellness_tip().await;
            // Local tips substitute only for unreachable failures; a server
            // error surfaces like everywhere else.
            match tips::tip_or_local(outcome, &mut thread_rng()) {
                Ok(fetched) => {
                    set_offline.set(fetched.is_simulated());
                    set_tip.set(fetched.into_value());
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    };

    // First tip on mount
    let fetch_on_mount = fetch_tip.clone();
    create_effect(move |_| {
        fetch_on_mount();
    });

    view! {
        <section class="py-12 bg-white">
            <div class="container mx-auto px-4 max-w-3xl">
                <div class="bg-gradient-to-br from-yellow-50 to-orange-50 border-2 border-yellow-200 rounded-xl p-6">
                    <div class="flex items-start space-x-4">
                        <div class="text-4xl">"💡"</div>
                        <div class="flex-1">
                            <div class="flex items-center justify-between mb-3">
                                <h3 class="text-2xl font-bold text-gray-900">"Brain Booster of the Day"</h3>
                                <button
                                    class="p-2 bg-white rounded-lg hover:bg-yellow-100 transition-colors shadow-md disabled:opacity-50"
                                    disabled=move || loading.get()
                                    on:click=move |_| fetch_tip()
                                >
                                    "🔄"
                                </button>
                            </div>
                            <p class="text-lg text-gray-700 leading-relaxed">
                                {move || tip.get()}
                            </p>
                            {move || {
                                offline.get().then(|| view! {
                                    <p class="text-xs text-gray-500 mt-2">"Offline tip"</p>
                                })
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
