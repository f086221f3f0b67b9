//! SDP relay for the live mock interview.
//!
//! The browser creates a WebRTC offer; we forward it to the realtime endpoint
//! with our credentials and hand the answer back. Audio and data then flow
//! peer-to-peer between the browser and the provider.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

pub const REALTIME_MODEL: &str = "gpt-4o-mini-realtime-preview-2024-12-17";
pub const INTERVIEWER_VOICE: &str = "ash";

pub const INTERVIEWER_INSTRUCTIONS: &str = "You are an AI interviewer. Your role is to conduct \
    professional job interviews, ask relevant questions, and provide constructive feedback. \
    Be polite, professional, and encouraging while maintaining a natural conversation flow.";

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid SDP offer")]
    InvalidOffer,

    #[error("Invalid SDP answer from realtime endpoint")]
    InvalidAnswer,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Realtime API error (status {status})")]
    Api { status: u16 },
}

/// Minimal sanity check: every SDP session description starts with `v=0`.
pub fn is_valid_sdp(sdp: &str) -> bool {
    sdp.contains("v=0")
}

#[derive(Clone)]
pub struct RealtimeRelay {
    client: Client,
    api_key: String,
    base_url: String,
}

impl RealtimeRelay {
    pub fn new(api_key: String, base_url: String) -> Result<Self, RelayError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn realtime_url(&self) -> String {
        format!("{}/realtime", self.base_url)
    }

    /// Exchanges a browser SDP offer for the provider's SDP answer.
    pub async fn connect(&self, offer: String) -> Result<String, RelayError> {
        if !is_valid_sdp(&offer) {
            return Err(RelayError::InvalidOffer);
        }

        let response = self
            .client
            .post(self.realtime_url())
            .query(&[
                ("model", REALTIME_MODEL),
                ("instructions", INTERVIEWER_INSTRUCTIONS),
                ("voice", INTERVIEWER_VOICE),
            ])
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/sdp")
            .body(offer)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Api {
                status: status.as_u16(),
            });
        }

        let answer = response.text().await?;
        if !is_valid_sdp(&answer) {
            return Err(RelayError::InvalidAnswer);
        }

        debug!("Realtime SDP answer received ({} bytes)", answer.len());
        Ok(answer)
    }
}
