//! Page sections and site chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections are presentational; the ones with interaction read and write
//! small state models from `crate::state` through Leptos context or local
//! signals.

pub mod about;
pub mod contact;
pub mod faq;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod reveal;
pub mod services;
pub mod theme_toggle;
pub mod toasts;
