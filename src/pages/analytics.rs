//! Analytics Page
//!
//! Population-level dashboard over a selectable time range. Responses are
//! guarded by a request ticket so a slow reply for an old range can never
//! overwrite a newer one.

use leptos::*;
use rand::thread_rng;

use crate::api;
use crate::api::types::{AnalyticsRange, AnalyticsSnapshot};
use crate::components::loading::CardSkeleton;
use crate::components::DemoBanner;
use crate::demo::{self, analytics as demo_analytics, Fetched};
use crate::state::global::GlobalState;
use crate::state::RequestSequence;

#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (range, set_range) = create_signal(AnalyticsRange::Week);
    let (snapshot, set_snapshot) = create_signal(Option::<Fetched<AnalyticsSnapshot>>::None);
    let (loading, set_loading) = create_signal(true);
    let sequence = create_rw_signal(RequestSequence::new());

    // Refetch whenever the range changes. The previous snapshot stays on
    // screen while the new one loads.
    create_effect(move |_| {
        let selected = range.get();
        let ticket = sequence.try_update(|s| s.begin()).unwrap_or_default();
        let state = state.clone();
        set_loading.set(true);

        spawn_local(async move {
            let outcome = demo::fetch_or_simulate(
                || api::client::fetch_analytics(selected),
                || demo_analytics::simulate_analytics(&mut thread_rng(), selected),
            )
            .await;

            if !sequence.get_untracked().is_current(ticket) {
                return;
            }

            match outcome {
                Ok(fetched) => set_snapshot.set(Some(fetched)),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="container mx-auto px-4 py-12 max-w-5xl">
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h1 class="text-4xl font-bold">
                        "Analytics " <span class="text-blue-600">"Dashboard"</span>
                    </h1>
                    <p class="text-gray-600 mt-1">"Population stroke-detection trends"</p>
                </div>

                <select
                    class="border border-gray-300 rounded-lg px-4 py-2 focus:border-blue-500 focus:outline-none"
                    on:change=move |ev| {
                        let picked = match event_target_value(&ev).as_str() {
                            "30d" => AnalyticsRange::Month,
                            "90d" => AnalyticsRange::Quarter,
                            _ => AnalyticsRange::Week,
                        };
                        set_range.set(picked);
                    }
                >
                    {AnalyticsRange::ALL.iter().copied().map(|r| view! {
                        <option value=r.as_query() selected=move || range.get() == r>
                            {r.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                snapshot.get().filter(|s| s.is_simulated()).map(|_| view! {
                    <div class="mb-6"><DemoBanner /></div>
                })
            }}

            {move || {
                match snapshot.get() {
                    None => view! {
                        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                            <CardSkeleton /> <CardSkeleton /> <CardSkeleton /> <CardSkeleton />
                        </div>
                    }.into_view(),
                    Some(fetched) => {
                        let data = fetched.into_value();
                        view! { <Dashboard data=data dimmed=loading /> }.into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn Dashboard(data: AnalyticsSnapshot, dimmed: ReadSignal<bool>) -> impl IntoView {
    let max_daily = data.daily_scans.iter().map(|d| d.count).max().unwrap_or(1).max(1);
    let max_region = data
        .geographic_data
        .iter()
        .map(|r| r.cases)
        .max()
        .unwrap_or(1)
        .max(1);
    let risk_total: u32 = data.risk_distribution.iter().map(|b| b.count).sum::<u32>().max(1);

    view! {
        <div class=move || {
            if dimmed.get() { "space-y-8 opacity-50 transition-opacity" } else { "space-y-8 transition-opacity" }
        }>
            // Summary cards
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                <SummaryCard label="Total Scans" value=data.total_scans.to_string() />
                <SummaryCard label="Stroke Detected" value=data.stroke_detected.to_string() />
                <SummaryCard label="Detection Rate" value=format!("{:.1}%", data.detection_rate) />
                <SummaryCard label="Avg Confidence" value=format!("{:.1}%", data.avg_confidence) />
            </div>

            // Daily scans bar chart
            <section class="bg-white rounded-xl shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Daily Scans"</h2>
                <div class="flex items-end space-x-1 h-40">
                    {data.daily_scans.iter().map(|day| {
                        let height = (day.count as f64 / max_daily as f64 * 100.0).max(2.0);
                        view! {
                            <div
                                class="flex-1 bg-blue-500 rounded-t hover:bg-blue-600 transition-colors"
                                style=format!("height: {:.0}%", height)
                                title=format!("{}: {}", day.date, day.count)
                            />
                        }
                    }).collect_view()}
                </div>
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                // Risk distribution
                <section class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Risk Distribution"</h2>
                    <div class="space-y-3">
                        {data.risk_distribution.iter().map(|bucket| {
                            let pct = bucket.count as f64 / risk_total as f64 * 100.0;
                            view! {
                                <div>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span>{bucket.category.clone()}</span>
                                        <span class="text-gray-500">{bucket.count}</span>
                                    </div>
                                    <div class="bg-gray-200 rounded-full h-2">
                                        <div
                                            class="bg-purple-500 rounded-full h-2"
                                            style=format!("width: {:.0}%", pct)
                                        />
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </section>

                // Regional cases
                <section class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Cases by Region"</h2>
                    <div class="space-y-3">
                        {data.geographic_data.iter().map(|region| {
                            let pct = region.cases as f64 / max_region as f64 * 100.0;
                            view! {
                                <div>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span>{region.region.clone()}</span>
                                        <span class="text-gray-500">{region.cases}</span>
                                    </div>
                                    <div class="bg-gray-200 rounded-full h-2">
                                        <div
                                            class="bg-red-500 rounded-full h-2"
                                            style=format!("width: {:.0}%", pct)
                                        />
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn SummaryCard(
    label: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-4">
            <div class="text-sm text-gray-500 mb-1">{label}</div>
            <div class="text-3xl font-bold">{value}</div>
        </div>
    }
}
