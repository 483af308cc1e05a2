//! Application layer containing the checkout orchestration.
//!
//! This module defines the `CheckoutEngine`, which plays the part of the web
//! framework around the provider: it loads payments, feeds them checkout steps
//! and turns provider outcomes into reports.

pub mod engine;
