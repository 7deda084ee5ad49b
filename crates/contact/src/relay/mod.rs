//! Third-party email relays a contact submission can be forwarded to.
//!
//! Exactly one relay is active at a time, chosen by [`RelayConfig::kind`].

mod form;
mod form_submit;
mod json_api;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::ContactSubmission;

pub use form::FormRelay;
pub use form_submit::FormSubmitRelay;
pub use json_api::JsonApiRelay;

pub const FORMSUBMIT_BASE_URL: &str = "https://formsubmit.co";
pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(
    Deserialize, EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RelayKind {
    #[default]
    Form,
    FormSubmit,
    JsonApi,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    #[serde(default)]
    pub kind: RelayKind,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default)]
    pub access_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            kind: RelayKind::default(),
            endpoint: None,
            recipient: default_recipient(),
            access_key: None,
        }
    }
}

fn default_recipient() -> String {
    "contact@folio.localhost".to_string()
}

impl RelayConfig {
    /// Configured endpoint, or the provider default for the selected kind.
    pub fn endpoint(&self) -> String {
        match self.endpoint.as_deref().map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => endpoint.to_owned(),
            _ => match self.kind {
                RelayKind::Form | RelayKind::FormSubmit => {
                    format!("{FORMSUBMIT_BASE_URL}/{}", self.recipient)
                }
                RelayKind::JsonApi => WEB3FORMS_ENDPOINT.to_owned(),
            },
        }
    }

    /// Access key with blank values treated as unset.
    pub fn access_key(&self) -> Option<&str> {
        self.access_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Raw relay answer, before it is classified.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RelayResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, RelayError> {
        let status = response.status();
        let body = response.text().await?;

        Ok(Self { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait Relay: Send + Sync {
    fn name(&self) -> &'static str;

    /// Issue exactly one request carrying the submission.
    async fn dispatch(&self, submission: &ContactSubmission) -> Result<RelayResponse, RelayError>;

    /// Whether the relay took the message.
    fn accepts(&self, response: &RelayResponse) -> bool {
        response.status.is_success()
    }
}

pub fn build_relay(config: &RelayConfig) -> folio_shared::Result<Arc<dyn Relay>> {
    let endpoint = config.endpoint();
    if config.recipient.trim().is_empty() {
        folio_shared::bail!("relay recipient must not be empty");
    }

    let relay: Arc<dyn Relay> = match config.kind {
        RelayKind::Form => Arc::new(FormRelay::new(endpoint)?),
        RelayKind::FormSubmit => Arc::new(FormSubmitRelay::new(endpoint)?),
        RelayKind::JsonApi => {
            let Some(access_key) = config.access_key() else {
                folio_shared::bail!("relay `json-api` requires an access key");
            };

            Arc::new(JsonApiRelay::new(
                endpoint,
                access_key,
                config.recipient.to_owned(),
            )?)
        }
    };

    tracing::info!(
        relay = relay.name(),
        endpoint = %config.endpoint(),
        "Contact relay initialized"
    );

    Ok(relay)
}
