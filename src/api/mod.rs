//! HTTP client for the agencies backend

mod client;

pub use client::*;
