//! HTTP access to the remote employee service.

pub mod client;

pub use client::ApiClient;
