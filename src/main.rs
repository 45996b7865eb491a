//! 287(g) Agency Locator - Dioxus Web Application
//!
//! A client-side page for looking up law-enforcement agencies participating
//! in the federal 287(g) immigration-enforcement partnership program, by ZIP
//! code or by city/state. Data comes from the `/agencies/nearby` endpoint.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod share;
mod state;
mod types;

fn main() {
    // Initialize logging (WASM-safe)
    dioxus::logger::initialize_default();

    dioxus::launch(app::App);
}
