//! Bittree
//!
//! Link-in-bio profile creator built with Leptos (WASM).
//!
//! # Features
//!
//! - Claim a handle for your public profile page
//! - Draft an ordered list of labeled links
//! - Attach a picture URL and description
//! - Publish the draft through the backend API
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All profile state lives in the browser until it is POSTed to
//! the backend; the generated public page is served elsewhere.

use leptos::*;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Route tracing output to the browser console
    fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .without_time()
        .with_ansi(false)
        .init();

    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
