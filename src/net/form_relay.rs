//! Contact form relay client.
//!
//! Client-side (csr): a JSON `POST` to the configured third-party endpoint via
//! `gloo-net`. Host builds return [`RelayError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`RelayError`] the contact section shows as a
//! toast; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "form_relay_test.rs"]
mod form_relay_test;

use serde::Serialize;

/// Body posted to the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// Subject line understood by common form relays.
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl ContactPayload {
    pub fn subject_for(name: &str) -> String {
        format!("New enquiry from {name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("could not encode the message: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("the form service answered {status}")]
    Rejected { status: u16 },
    #[error("sending is only available in the browser")]
    Unavailable,
}

/// Map a relay HTTP status to success or [`RelayError::Rejected`].
pub fn check_status(status: u16) -> Result<(), RelayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RelayError::Rejected { status })
    }
}

/// Post `payload` to `endpoint`.
///
/// # Errors
///
/// Returns [`RelayError`] when encoding, transport or the relay fails.
pub async fn submit_contact(endpoint: &str, payload: &ContactPayload) -> Result<(), RelayError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| RelayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        let result = check_status(resp.status());
        if let Err(e) = &result {
            log::warn!("contact relay rejected submission: {e}");
        } else {
            log::info!("contact form delivered");
        }
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, payload);
        Err(RelayError::Unavailable)
    }
}
