//! Features Component
//!
//! Home-page grid linking to each area of the platform.

use leptos::*;
use leptos_router::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🧠",
        title: "AI Stroke Detection",
        description: "Upload MRI/CT scans for instant analysis using advanced CNN models trained on thousands of medical images.",
        href: "/detection",
    },
    Feature {
        icon: "📊",
        title: "Analytics Dashboard",
        description: "Track population health trends, stroke hotspots, and detection patterns with real-time data visualization.",
        href: "/analytics",
    },
    Feature {
        icon: "🤖",
        title: "AI Health Chatbot",
        description: "Get instant answers about stroke symptoms, prevention, and neurology from our AI-powered chatbot.",
        href: "/chatbot",
    },
    Feature {
        icon: "📚",
        title: "Neurology Helpdesk",
        description: "Learn about different types of strokes, risk factors, prevention strategies, and recovery processes.",
        href: "/helpdesk",
    },
    Feature {
        icon: "🩺",
        title: "Health Tools",
        description: "Calculate BMI, analyze blood pressure, and assess stroke risk with our interactive health calculators.",
        href: "/tools",
    },
    Feature {
        icon: "🔗",
        title: "Secure Sharing",
        description: "Share scan results with your doctor through expiring links and email invitations.",
        href: "/share",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-4xl font-bold mb-4">
                        "Comprehensive " <span class="text-blue-600">"Healthcare Platform"</span>
                    </h2>
                    <p class="text-lg text-gray-600">
                        "Everything you need for brain health monitoring and stroke prevention in one powerful platform"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {FEATURES.iter().map(|feature| view! {
                        <A href=feature.href class="block bg-white rounded-xl p-6 shadow hover:shadow-lg transition-shadow">
                            <div class="text-4xl mb-4">{feature.icon}</div>
                            <h3 class="text-xl font-bold mb-2">{feature.title}</h3>
                            <p class="text-gray-600 text-sm leading-relaxed">{feature.description}</p>
                        </A>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
