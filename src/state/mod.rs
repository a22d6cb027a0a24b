//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`appearance`, `contact`, `toast`, etc.) so each
//! section depends only on the small model it renders.

pub mod appearance;
pub mod contact;
pub mod faq;
pub mod projects;
pub mod toast;
pub mod viewport;
