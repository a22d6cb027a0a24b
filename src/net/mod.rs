//! Outbound network calls. The site talks to exactly one external service,
//! the contact form relay.

pub mod form_relay;
