//! Payment relay service library
//!
//! Accepts payment-intent documents over HTTP, overlays them onto
//! merchant defaults held in configuration, and forwards them to the
//! TapPay pay-by-prime API.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::payments;
