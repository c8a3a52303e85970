//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🧠"</span>
                        <span class="text-xl font-bold text-gray-900">"BrainHealth AI"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/detection" label="Detection" />
                        <NavLink href="/chatbot" label="Chatbot" />
                        <NavLink href="/analytics" label="Analytics" />
                        <NavLink href="/learn" label="Learn" />
                        <NavLink href="/tools" label="Tools" />
                        <NavLink href="/share" label="Share" />
                        <NavLink href="/helpdesk" label="Helpdesk" />
                        <NavLink href="/about" label="About" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-blue-700 hover:bg-blue-50 transition-colors"
            active_class="bg-blue-50 text-blue-700"
        >
            {label}
        </A>
    }
}
