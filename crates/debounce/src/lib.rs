//! Debounced invocation for Quip
//!
//! This crate provides a single timing primitive:
//! - [`Debouncer`] wraps an action and a quiet period
//! - Every `invoke` cancels the pending call and reschedules with the new arguments
//! - The action fires once, after the quiet period, with the latest arguments

pub mod debouncer;

// Re-exports
pub use debouncer::Debouncer;
