//! HTTP adapters for the recipe backend.

pub mod client;

pub use client::RestClient;
