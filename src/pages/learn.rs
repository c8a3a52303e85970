//! Learn Page
//!
//! Static stroke-education library: topic cards, headline figures, and the
//! emergency call-to-action. Content is compiled in; no backend involved.

use leptos::*;
use leptos_router::*;

struct LearnTopic {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    points: [&'static str; 4],
}

const TOPICS: [LearnTopic; 6] = [
    LearnTopic {
        icon: "🧠",
        title: "Understanding Stroke",
        description: "Learn what a stroke is, how it happens, and its impact on the brain",
        points: [
            "A stroke occurs when blood supply to part of the brain is interrupted",
            "Brain cells begin to die within minutes without oxygen",
            "1 in 4 people worldwide will have a stroke in their lifetime",
            "Stroke is the 2nd leading cause of death globally",
        ],
    },
    LearnTopic {
        icon: "🚨",
        title: "Warning Signs (F.A.S.T.)",
        description: "Recognize stroke symptoms early to save lives",
        points: [
            "F - Face drooping: One side of face feels numb or droops",
            "A - Arm weakness: One arm feels weak or numb",
            "S - Speech difficulty: Speech is slurred or hard to understand",
            "T - Time to call emergency: Every second counts!",
        ],
    },
    LearnTopic {
        icon: "❤️",
        title: "Types of Stroke",
        description: "Different types require different treatments",
        points: [
            "Ischemic (87%): Blood clot blocks artery in brain",
            "Hemorrhagic (13%): Blood vessel bursts in brain",
            "TIA (Mini-stroke): Temporary blockage, warning sign",
            "Each type has specific treatment protocols",
        ],
    },
    LearnTopic {
        icon: "🛡️",
        title: "Prevention Strategies",
        description: "Reduce your stroke risk by up to 80%",
        points: [
            "Control blood pressure (most important!)",
            "Exercise 30 minutes daily, 5 days a week",
            "Eat Mediterranean diet rich in vegetables",
            "Quit smoking and limit alcohol consumption",
        ],
    },
    LearnTopic {
        icon: "🩺",
        title: "Risk Factors",
        description: "Know your risk factors and take action",
        points: [
            "Controllable: High blood pressure, diabetes, smoking",
            "Age: Risk doubles every decade after 55",
            "Family history and genetics play a role",
            "Lifestyle: Diet, exercise, stress management matter",
        ],
    },
    LearnTopic {
        icon: "📈",
        title: "Recovery & Rehabilitation",
        description: "Most recovery happens in first 3-6 months",
        points: [
            "Physical therapy restores movement and balance",
            "Speech therapy improves communication skills",
            "Occupational therapy helps with daily activities",
            "Many survivors regain independence with proper care",
        ],
    },
];

const FIGURES: [(&str, &str); 4] = [
    ("12.2M", "Strokes annually worldwide"),
    ("5.5M", "Deaths from stroke each year"),
    ("3-4.5hrs", "Critical treatment window"),
    ("80%", "Of strokes are preventable"),
];

#[component]
pub fn Learn() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-r from-blue-600 to-purple-600 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <div class="text-5xl mb-6">"📖"</div>
                    <h1 class="text-5xl font-bold mb-4">"Learn About Stroke"</h1>
                    <p class="text-xl max-w-2xl mx-auto opacity-90">
                        "Knowledge is power. Learn how to prevent, recognize, and respond to stroke emergencies."
                    </p>
                </div>
            </section>

            // Headline figures
            <section class="py-12 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                        {FIGURES.iter().map(|(number, label)| view! {
                            <div class="text-center">
                                <div class="text-4xl font-bold text-blue-600 mb-2">{*number}</div>
                                <div class="text-gray-600">{*label}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Topic cards
            <section class="py-12 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {TOPICS.iter().map(|topic| view! {
                            <div class="bg-white rounded-xl shadow p-6 hover:shadow-lg transition-shadow">
                                <div class="text-4xl mb-4">{topic.icon}</div>
                                <h3 class="text-2xl font-bold mb-2">{topic.title}</h3>
                                <p class="text-gray-600 mb-4">{topic.description}</p>
                                <ul class="space-y-2">
                                    {topic.points.iter().map(|point| view! {
                                        <li class="flex items-start space-x-2">
                                            <span class="text-blue-600 font-bold">"•"</span>
                                            <span class="text-gray-700">{*point}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Emergency call-to-action
            <section class="py-16 bg-gradient-to-r from-red-500 to-pink-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-4xl font-bold mb-4">"🚨 In Case of Emergency"</h2>
                    <p class="text-xl mb-8 max-w-2xl mx-auto">
                        "If you or someone you know is experiencing stroke symptoms, call emergency services immediately!"
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <a href="tel:108" class="px-8 py-4 bg-white text-red-600 rounded-lg font-semibold text-lg hover:bg-gray-100">
                            "📞 Call 108 (India)"
                        </a>
                        <a href="tel:112" class="px-8 py-4 bg-white text-red-600 rounded-lg font-semibold text-lg hover:bg-gray-100">
                            "📞 Call 112 (Emergency)"
                        </a>
                    </div>
                </div>
            </section>

            // Pointers into the rest of the platform
            <section class="py-12 bg-white">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-10">"Additional Resources"</h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        <ResourceCard
                            icon="💡"
                            title="Prevention Tips"
                            description="Daily habits that reduce stroke risk"
                            href="/chatbot"
                            link_label="Ask our AI Bot →"
                        />
                        <ResourceCard
                            icon="🧠"
                            title="AI Detection"
                            description="Upload brain scans for instant analysis"
                            href="/detection"
                            link_label="Try Detection →"
                        />
                        <ResourceCard
                            icon="🩺"
                            title="Health Tools"
                            description="Track your brain health metrics"
                            href="/tools"
                            link_label="Explore Tools →"
                        />
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_card_is_fully_populated() {
        assert_eq!(TOPICS.len(), 6);
        for topic in &TOPICS {
            assert!(!topic.icon.is_empty());
            assert!(!topic.title.is_empty());
            assert!(!topic.description.is_empty());
            for point in &topic.points {
                assert!(!point.is_empty());
            }
        }
        for (number, label) in &FIGURES {
            assert!(!number.is_empty());
            assert!(!label.is_empty());
        }
    }
}

#[component]
fn ResourceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
    link_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-50 rounded-xl p-6">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-bold mb-2">{title}</h3>
            <p class="text-gray-600 mb-4">{description}</p>
            <A href=href class="text-blue-600 hover:underline font-medium">
                {link_label}
            </A>
        </div>
    }
}
