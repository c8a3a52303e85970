//! Hospital List Component
//!
//! Nearby neurology hospitals, shown on the detection page once a stroke is
//! flagged. Location defaults to central Delhi until geolocation is wired in.

use leptos::*;

use crate::api;
use crate::api::types::Hospital;
use crate::components::loading::Loading;

// Connaught Place, New Delhi
const DEFAULT_LAT: f64 = 28.6139;
const DEFAULT_LON: f64 = 77.2090;

#[component]
pub fn HospitalList() -> impl IntoView {
    let (hospitals, set_hospitals) = create_signal(Vec::<Hospital>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(Option::<String>::None);

    let fetch = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::client::fetch_hospitals(DEFAULT_LAT, DEFAULT_LON).await {
                Ok(list) => set_hospitals.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("hospital lookup failed: {}", e).into());
                    set_error.set(Some(
                        "Could not load nearby hospitals. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| {
        fetch();
    });

    view! {
        <div class="bg-white rounded-xl shadow p-6">
            <h3 class="text-xl font-bold mb-4">"🏥 Nearby Neurology Hospitals"</h3>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(message) = error.get() {
                    view! {
                        <div class="text-center py-6">
                            <p class="text-red-600 mb-3">{message}</p>
                            <button
                                class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                                on:click=move |_| fetch()
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    hospitals.get().into_iter().map(|hospital| {
                        let tel = format!("tel:{}", hospital.phone);
                        view! {
                            <div class="flex items-center justify-between py-3 border-b border-gray-100 last:border-0">
                                <div>
                                    <p class="font-semibold">{hospital.name}</p>
                                    <p class="text-sm text-gray-600">{hospital.address}</p>
                                    <p class="text-xs text-gray-500">{hospital.distance}</p>
                                </div>
                                <div class="flex space-x-2">
                                    <a href=tel class="px-3 py-1 bg-green-600 text-white text-sm rounded-lg hover:bg-green-700">
                                        "Call"
                                    </a>
                                    <a href=hospital.url target="_blank" class="px-3 py-1 bg-blue-600 text-white text-sm rounded-lg hover:bg-blue-700">
                                        "Visit"
                                    </a>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
