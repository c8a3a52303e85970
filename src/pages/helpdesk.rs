//! Helpdesk Page
//!
//! Static educational library on mental health and stroke. Content is
//! compiled in; no backend involved.

use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Topic {
    MentalHealth,
    Recovery,
    Prevention,
    WarningSigns,
}

struct Section {
    subtitle: &'static str,
    text: &'static str,
}

struct TopicContent {
    icon: &'static str,
    label: &'static str,
    title: &'static str,
    sections: [Section; 3],
}

const TOPICS: [Topic; 4] = [
    Topic::MentalHealth,
    Topic::Recovery,
    Topic::Prevention,
    Topic::WarningSigns,
];

fn content(topic: Topic) -> TopicContent {
    match topic {
        Topic::MentalHealth => TopicContent {
            icon: "🧠",
            label: "Mental Health & Stroke",
            title: "Mental Health & Stroke Risk",
            sections: [
                Section {
                    subtitle: "How Stress Affects Your Brain",
                    text: "Chronic stress increases cortisol levels, which can lead to high blood pressure, inflammation, and increased stroke risk. Managing stress through meditation, exercise, and proper sleep is crucial.",
                },
                Section {
                    subtitle: "Depression and Stroke Connection",
                    text: "Studies show that people with depression have a 45% higher risk of stroke. Depression can lead to unhealthy behaviors like smoking, poor diet, and physical inactivity, all stroke risk factors.",
                },
                Section {
                    subtitle: "Anxiety and Cardiovascular Health",
                    text: "Chronic anxiety can cause persistent elevation in heart rate and blood pressure, putting extra strain on blood vessels and increasing stroke risk over time.",
                },
            ],
        },
        Topic::Recovery => TopicContent {
            icon: "❤️",
            label: "Recovery & Well-being",
            title: "Psychological Well-being in Recovery",
            sections: [
                Section {
                    subtitle: "Positive Mindset Accelerates Healing",
                    text: "Research shows that stroke survivors with positive attitudes and strong social support recover faster and regain more function than those experiencing depression or isolation.",
                },
                Section {
                    subtitle: "Mental Health Support is Essential",
                    text: "Post-stroke depression affects 30-50% of survivors. Professional counseling, support groups, and family involvement significantly improve recovery outcomes and quality of life.",
                },
                Section {
                    subtitle: "Neuroplasticity and Hope",
                    text: "Your brain can reorganize itself after stroke through neuroplasticity. Combining physical rehabilitation with mental exercises and emotional support enhances brain recovery.",
                },
            ],
        },
        Topic::Prevention => TopicContent {
            icon: "🏃",
            label: "Holistic Prevention",
            title: "Holistic Stroke Prevention",
            sections: [
                Section {
                    subtitle: "Mind-Body Connection",
                    text: "Regular meditation and mindfulness practices can lower blood pressure by 10-15%, reducing stroke risk. Just 10 minutes daily can make a significant difference.",
                },
                Section {
                    subtitle: "Exercise for Brain Health",
                    text: "Physical activity releases endorphins, reduces stress, and improves blood flow to the brain. Aim for 30 minutes of moderate exercise 5 days a week.",
                },
                Section {
                    subtitle: "Social Connections Matter",
                    text: "Strong social relationships reduce stress hormones and inflammation. Stay connected with friends and family - loneliness is a hidden stroke risk factor.",
                },
            ],
        },
        Topic::WarningSigns => TopicContent {
            icon: "🚨",
            label: "Warning Signs",
            title: "Recognize Warning Signs",
            sections: [
                Section {
                    subtitle: "Act F.A.S.T.",
                    text: "Face drooping, Arm weakness, Speech difficulty, Time to call emergency services. Every minute counts - brain cells die quickly during a stroke.",
                },
                Section {
                    subtitle: "Don't Ignore Mini-Strokes (TIA)",
                    text: "Transient Ischemic Attacks are warning signs. Even if symptoms resolve quickly, seek immediate medical attention - they predict a major stroke within days.",
                },
                Section {
                    subtitle: "Know Your Risk Factors",
                    text: "High blood pressure, diabetes, smoking, obesity, and atrial fibrillation significantly increase stroke risk. Regular checkups and management are vital.",
                },
            ],
        },
    }
}

const TAKEAWAYS: [&str; 4] = [
    "Mental health and physical health are deeply connected - take care of both",
    "Stress management and positive mindset can significantly reduce stroke risk",
    "Psychological support improves recovery outcomes after stroke",
    "Early detection and immediate action save lives - know the warning signs",
];

#[component]
pub fn Helpdesk() -> impl IntoView {
    let (selected, set_selected) = create_signal(Option::<Topic>::None);

    view! {
        <div class="container mx-auto px-4 py-12 max-w-4xl">
            <div class="text-center mb-12">
                <h1 class="text-4xl font-bold mb-4">
                    "AI " <span class="text-blue-600">"Helpdesk"</span>
                </h1>
                <p class="text-lg text-gray-600">
                    "Learn how mental health, stress, and psychological well-being influence stroke risk and recovery"
                </p>
            </div>

            // Topic selection
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-12">
                {TOPICS.iter().map(|&topic| {
                    let card = content(topic);
                    view! {
                        <button
                            class=move || {
                                let base = "bg-white rounded-xl p-4 text-left shadow hover:shadow-lg transition-shadow";
                                if selected.get() == Some(topic) {
                                    format!("{} ring-2 ring-blue-500", base)
                                } else {
                                    base.to_string()
                                }
                            }
                            on:click=move |_| set_selected.set(Some(topic))
                        >
                            <div class="text-3xl mb-2">{card.icon}</div>
                            <h3 class="font-bold text-gray-900">{card.label}</h3>
                        </button>
                    }
                }).collect_view()}
            </div>

            // Selected topic content
            {move || match selected.get() {
                Some(topic) => {
                    let card = content(topic);
                    view! {
                        <div class="bg-white rounded-xl shadow p-6">
                            <h2 class="text-3xl font-bold mb-6">{card.title}</h2>
                            <div class="space-y-6">
                                {card.sections.iter().map(|section| view! {
                                    <div class="bg-gradient-to-r from-blue-50 to-cyan-50 rounded-xl p-6 border border-blue-100">
                                        <h3 class="text-xl font-bold text-gray-900 mb-2">{section.subtitle}</h3>
                                        <p class="text-gray-700 leading-relaxed">{section.text}</p>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    }.into_view()
                }
                None => view! {
                    <div class="bg-white rounded-xl shadow text-center py-12">
                        <div class="text-5xl mb-4">"💡"</div>
                        <p class="text-xl text-gray-500">"Select a topic above to learn more"</p>
                    </div>
                }.into_view(),
            }}

            // Key takeaways
            <div class="mt-12 bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl p-8 text-white">
                <h3 class="text-2xl font-bold mb-4">"📈 Key Takeaways"</h3>
                <ul class="space-y-3">
                    {TAKEAWAYS.iter().map(|takeaway| view! {
                        <li class="flex items-start space-x-3">
                            <span>"✓"</span>
                            <span>{*takeaway}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>

            // Emergency notice
            <div class="mt-8 bg-red-50 border-2 border-red-200 rounded-xl p-6">
                <h4 class="font-bold text-red-900 mb-2">"🚨 Medical Emergency"</h4>
                <p class="text-red-700 text-sm">
                    "If you or someone you know is experiencing stroke symptoms, call emergency services \
                     immediately. This platform is for educational purposes only and is not a substitute \
                     for professional medical advice."
                </p>
            </div>
        </div>
    }
}
