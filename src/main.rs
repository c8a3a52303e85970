//! BrainHealth AI
//!
//! Consumer health-education front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - AI brain-scan analysis with an explicit demo fallback
//! - Neurology chatbot with quick-question prompts
//! - Population analytics dashboard
//! - Client-side health calculators (BMI, blood pressure, stroke risk)
//! - Expiring share links and PDF report downloads
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the BrainHealth backend over HTTP; when no
//! backend is configured it substitutes clearly-labelled simulated data so
//! the full experience remains demonstrable.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod demo;
mod health;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
