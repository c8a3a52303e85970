//! Share Page
//!
//! Generates expiring, access-limited share links for a scan and sends
//! email invitations. Link generation falls back to a simulated link when
//! the backend is absent; email sending never pretends to succeed.

use leptos::*;
use rand::thread_rng;

use crate::api;
use crate::api::types::{EmailShareRequest, ShareLink, ShareRequest};
use crate::components::DemoBanner;
use crate::demo::{self, share as demo_share, Fetched};
use crate::state::global::GlobalState;

const EXPIRY_CHOICES: [u32; 5] = [1, 3, 7, 14, 30];
const ACCESS_CHOICES: [u32; 5] = [1, 3, 5, 10, 999];

#[component]
pub fn Share() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (scan_id, set_scan_id) = create_signal(String::new());
    let (expiry_days, set_expiry_days) = create_signal(7u32);
    let (max_access, set_max_access) = create_signal(5u32);
    let (link, set_link) = create_signal(Option::<Fetched<ShareLink>>::None);
    let (emails, set_emails) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);
    let (sending, set_sending) = create_signal(false);

    let state_for_generate = state.clone();
    let generate = move |_| {
        let id = scan_id.get_untracked().trim().to_string();
        if id.is_empty() || generating.get_untracked() {
            return;
        }
        let request = ShareRequest {
            scan_id: id,
            expiry_days: expiry_days.get_untracked(),
            max_access: max_access.get_untracked(),
        };
        let state = state_for_generate.clone();
        set_generating.set(true);

        spawn_local(async move {
            let days = request.expiry_days;
            let cap = request.max_access;
            let outcome = demo::fetch_or_simulate(
                || api::client::generate_share_link(&request),
                || demo_share::simulate_share_link(&mut thread_rng(), days, cap),
            )
            .await;

            match outcome {
                Ok(fetched) => set_link.set(Some(fetched)),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_generating.set(false);
        });
    };

    let state_for_send = state.clone();
    let send_invites = move |_| {
        let Some(fetched) = link.get_untracked() else {
            return;
        };
        let recipients: Vec<String> = emails
            .get_untracked()
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if recipients.is_empty() || sending.get_untracked() {
            return;
        }
        let request = EmailShareRequest {
            share_id: fetched.value().id.clone(),
            emails: recipients,
        };
        let state = state_for_send.clone();
        set_sending.set(true);

        spawn_local(async move {
            let count = request.emails.len();
            match api::client::send_share_emails(&request).await {
                Ok(()) => {
                    state.show_success(&format!("Share link sent to {} recipient(s)", count));
                    set_emails.set(String::new());
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_sending.set(false);
        });
    };

    let state_for_copy = state.clone();
    let copy_link = move |_| {
        if let Some(fetched) = link.get_untracked() {
            if let Some(window) = web_sys::window() {
                let _ = window.navigator().clipboard().write_text(&fetched.value().url);
                state_for_copy.show_success("Link copied to clipboard");
            }
        }
    };

    view! {
        <div class="container mx-auto px-4 py-12 max-w-3xl">
            <div class="text-center mb-8">
                <h1 class="text-4xl font-bold mb-2">
                    "🔗 Family " <span class="text-cyan-600">"Sharing"</span>
                </h1>
                <p class="text-lg text-gray-600">"Securely share scan results with family members and doctors"</p>
            </div>

            // Generate form
            <div class="bg-white rounded-xl shadow p-6 mb-8">
                <h2 class="text-2xl font-bold mb-6">"Generate Share Link"</h2>

                <div class="space-y-4 mb-6">
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">
                            "Scan ID or Report Number"
                        </label>
                        <input
                            type="text"
                            placeholder="e.g., SCAN-2024-001"
                            class="w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-cyan-500 focus:outline-none"
                            prop:value=move || scan_id.get()
                            on:input=move |ev| set_scan_id.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-semibold text-gray-700 mb-2">"Link Expiry (Days)"</label>
                            <select
                                class="w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-cyan-500 focus:outline-none"
                                on:change=move |ev| {
                                    if let Ok(days) = event_target_value(&ev).parse() {
                                        set_expiry_days.set(days);
                                    }
                                }
                            >
                                {EXPIRY_CHOICES.iter().copied().map(|days| view! {
                                    <option value=days.to_string() selected=move || expiry_days.get() == days>
                                        {format!("{} Day{}", days, if days == 1 { "" } else { "s" })}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div>
                            <label class="block text-sm font-semibold text-gray-700 mb-2">"Max Access Count"</label>
                            <select
                                class="w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-cyan-500 focus:outline-none"
                                on:change=move |ev| {
                                    if let Ok(cap) = event_target_value(&ev).parse() {
                                        set_max_access.set(cap);
                                    }
                                }
                            >
                                {ACCESS_CHOICES.iter().copied().map(|cap| view! {
                                    <option value=cap.to_string() selected=move || max_access.get() == cap>
                                        {if cap == 999 {
                                            "Unlimited".to_string()
                                        } else {
                                            format!("{} {}", cap, if cap == 1 { "Person" } else { "People" })
                                        }}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
                </div>

                <button
                    class="w-full px-6 py-3 bg-cyan-600 text-white rounded-lg font-semibold hover:bg-cyan-700 disabled:opacity-50 transition-colors"
                    disabled=move || generating.get() || scan_id.get().trim().is_empty()
                    on:click=generate
                >
                    {move || if generating.get() { "Generating..." } else { "Generate Secure Link" }}
                </button>
            </div>

            // Result
            {move || {
                link.get().map(|fetched| {
                    let simulated = fetched.is_simulated();
                    let result = fetched.into_value();
                    view! {
                        <div class="bg-cyan-50 border-2 border-cyan-200 rounded-xl p-6 mb-8">
                            {simulated.then(|| view! { <div class="mb-4"><DemoBanner /></div> })}

                            <h3 class="text-xl font-bold mb-4 text-cyan-900">"✅ Share Link Generated!"</h3>

                            <div class="bg-white rounded-lg p-4 mb-4">
                                <div class="flex items-center justify-between mb-2">
                                    <span class="text-sm font-semibold text-gray-700">"Secure Link:"</span>
                                    <span class="text-xs text-gray-500">{format!("ID: {}", result.id)}</span>
                                </div>
                                <div class="flex items-center space-x-2">
                                    <input
                                        type="text"
                                        readonly
                                        class="flex-1 border border-gray-300 rounded-lg px-3 py-2 text-sm bg-gray-50"
                                        prop:value=result.url.clone()
                                    />
                                    <button
                                        class="px-4 py-2 bg-cyan-600 text-white rounded-lg text-sm hover:bg-cyan-700"
                                        on:click=copy_link.clone()
                                    >
                                        "Copy"
                                    </button>
                                </div>
                            </div>

                            <div class="grid md:grid-cols-3 gap-4 text-sm">
                                <div class="bg-white rounded-lg p-3">
                                    <div class="text-gray-600">"Expires"</div>
                                    <div class="font-bold text-cyan-700">{result.expires_at.clone()}</div>
                                </div>
                                <div class="bg-white rounded-lg p-3">
                                    <div class="text-gray-600">"Access Count"</div>
                                    <div class="font-bold text-cyan-700">
                                        {format!(
                                            "{} / {}",
                                            result.access_count,
                                            if result.max_access == 999 { "∞".to_string() } else { result.max_access.to_string() }
                                        )}
                                    </div>
                                </div>
                                <div class="bg-white rounded-lg p-3">
                                    <div class="text-gray-600">"Status"</div>
                                    <div class="font-bold text-green-600">"Active ✓"</div>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}

            // Email invites, only once a link exists
            {move || {
                link.get().map(|_| view! {
                    <div class="bg-white rounded-xl shadow p-6">
                        <h2 class="text-2xl font-bold mb-6">"✉️ Send Email Invites"</h2>

                        <div class="mb-4">
                            <label class="block text-sm font-semibold text-gray-700 mb-2">
                                "Email Addresses (comma-separated)"
                            </label>
                            <textarea
                                rows=3
                                placeholder="doctor@hospital.com, family@email.com"
                                class="w-full border border-gray-300 rounded-lg px-4 py-3 focus:border-cyan-500 focus:outline-none"
                                prop:value=move || emails.get()
                                on:input=move |ev| set_emails.set(event_target_value(&ev))
                            />
                        </div>

                        <button
                            class="w-full px-6 py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700 disabled:opacity-50 transition-colors"
                            disabled=move || sending.get() || emails.get().trim().is_empty()
                            on:click=send_invites.clone()
                        >
                            {move || if sending.get() { "Sending..." } else { "Send Email Invitations" }}
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
