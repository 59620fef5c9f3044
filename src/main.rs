//! WaBulk Dashboard
//!
//! Browser dashboard for bulk WhatsApp outreach built with Leptos (WASM).
//!
//! # Features
//!
//! - Upload JSON lists of places and track their connectivity status
//! - Per-list message templates with placeholder substitution
//! - One-click wa.me deep links with the rendered message
//! - Infinite scroll with status filtering and search
//! - Light/dark theming, RTL and accessibility preferences
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the WaBulk API over HTTP and keeps
//! user preferences in browser local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod storage;
mod upload;
mod whatsapp;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
