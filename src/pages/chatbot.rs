//! Chatbot Page
//!
//! Conversational interface to the health assistant. The user message is
//! appended optimistically; the reply (or a canned apology when the backend
//! is down) follows. There is no demo fallback here: a fabricated medical
//! answer is worse than an honest apology.

use leptos::*;

use crate::api;
use crate::state::chat::{Sender, Transcript};

const QUICK_QUESTIONS: [&str; 8] = [
    "What are stroke symptoms?",
    "How to prevent strokes?",
    "Types of strokes",
    "What is F.A.S.T. test?",
    "Risk factors for stroke",
    "Brain healthy diet",
    "Warning signs of stroke",
    "Stroke recovery tips",
];

#[component]
pub fn Chatbot() -> impl IntoView {
    let transcript = create_rw_signal(Transcript::with_greeting());
    let (input, set_input) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || sending.get_untracked() {
            return;
        }

        transcript.update(|t| {
            t.push_user(text.clone());
        });
        set_input.set(String::new());
        set_sending.set(true);

        spawn_local(async move {
            match api::client::send_chat_message(&text).await {
                Ok(reply) => transcript.update(|t| {
                    t.push_bot(reply.response, reply.timestamp);
                }),
                Err(e) => {
                    web_sys::console::error_1(&format!("chat request failed: {}", e).into());
                    transcript.update(|t| {
                        t.push_apology();
                    });
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="container mx-auto px-4 py-12 max-w-3xl">
            <div class="text-center mb-8">
                <h1 class="text-4xl font-bold mb-2">
                    "🤖 BrainCare " <span class="text-purple-600">"AI Bot"</span>
                </h1>
                <p class="text-lg text-gray-600">"Your 24/7 neurology health assistant powered by AI"</p>
            </div>

            <div class="bg-white rounded-xl shadow-xl overflow-hidden flex flex-col" style="height: 70vh;">
                // Messages
                <div class="flex-1 overflow-y-auto p-6 space-y-4">
                    {move || {
                        transcript.get().messages().iter().map(|message| {
                            let from_user = message.sender == Sender::User;
                            let (row, bubble, time) = if from_user {
                                ("flex justify-end",
                                 "bg-blue-600 text-white rounded-2xl p-4 max-w-[80%]",
                                 "text-xs mt-2 text-blue-100")
                            } else {
                                ("flex justify-start",
                                 "bg-gray-100 text-gray-800 rounded-2xl p-4 max-w-[80%]",
                                 "text-xs mt-2 text-gray-500")
                            };
                            view! {
                                <div class=row>
                                    <div class=bubble>
                                        <p class="whitespace-pre-wrap leading-relaxed">{message.text.clone()}</p>
                                        <p class=time>{message.timestamp.clone()}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}

                    // Typing indicator
                    {move || {
                        sending.get().then(|| view! {
                            <div class="flex justify-start">
                                <div class="bg-gray-100 rounded-2xl p-4 text-gray-500">"…"</div>
                            </div>
                        })
                    }}
                </div>

                // Quick questions, shown until the user engages
                {move || {
                    transcript.get().only_greeting().then(|| view! {
                        <div class="px-6 py-3 bg-gray-50 border-t border-gray-200">
                            <p class="text-sm text-gray-600 mb-2">"✨ Quick questions:"</p>
                            <div class="flex flex-wrap gap-2">
                                {QUICK_QUESTIONS.iter().map(|&question| view! {
                                    <button
                                        class="px-3 py-1 bg-white border border-gray-300 rounded-full text-sm hover:border-purple-500 hover:text-purple-600 transition-colors"
                                        on:click=move |_| set_input.set(question.to_string())
                                    >
                                        {question}
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                    })
                }}

                // Input
                <div class="p-4 bg-white border-t border-gray-200">
                    <div class="flex space-x-3">
                        <input
                            type="text"
                            placeholder="Ask me about stroke symptoms, prevention, or brain health..."
                            class="flex-1 border border-gray-300 rounded-lg px-4 py-3 focus:border-purple-500 focus:outline-none"
                            prop:value=move || input.get()
                            prop:disabled=move || sending.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button
                            class="px-6 py-3 bg-purple-600 text-white rounded-lg font-semibold hover:bg-purple-700 disabled:opacity-50 transition-colors"
                            disabled=move || sending.get() || input.get().trim().is_empty()
                            on:click=move |_| send()
                        >
                            "Send"
                        </button>
                    </div>
                    <p class="text-xs text-gray-500 mt-2">"Press Enter to send"</p>
                </div>
            </div>
        </div>
    }
}
