//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue lives here, gated on the `csr` feature, so state and
//! component modules stay testable on the host.

pub mod browser_theme;
pub mod debounce;
pub mod motion;
