//! # studio-site
//!
//! Leptos + WASM client-rendered marketing site for the studio.
//!
//! The site is a single page of presentational sections (hero, services,
//! projects, about, FAQ, contact). The only stateful subsystem, the light/dark
//! appearance controller, lives in the `appearance` crate; this crate wires
//! it to `localStorage`, `matchMedia` and the `<html>` element, and provides
//! it to components through Leptos context.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod seo;
pub mod state;
pub mod util;
