//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Footer, Nav, Toast};
use crate::pages::{About, Analytics, Chatbot, Detection, Helpdesk, Home, Learn, Share, Tools};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/detection" view=Detection />
                        <Route path="/chatbot" view=Chatbot />
                        <Route path="/analytics" view=Analytics />
                        <Route path="/learn" view=Learn />
                        <Route path="/share" view=Share />
                        <Route path="/tools" view=Tools />
                        <Route path="/helpdesk" view=Helpdesk />
                        <Route path="/about" view=About />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
