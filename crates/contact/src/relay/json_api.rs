use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderValue},
};
use serde::{Deserialize, Serialize};

use super::{Relay, RelayError, RelayResponse};
use crate::ContactSubmission;

/// JSON relay API authenticated with an access key (Web3Forms shape).
pub struct JsonApiRelay {
    client: Client,
    endpoint: String,
    access_key: String,
    to: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    access_key: &'a str,
    from_name: &'a str,
    subject: &'a str,
    reply_to: &'a str,
    message: &'a str,
    to: &'a str,
}

#[derive(Deserialize)]
struct Reply {
    success: bool,
}

impl JsonApiRelay {
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        to: impl Into<String>,
    ) -> folio_shared::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
            access_key: access_key.into(),
            to: to.into(),
        })
    }
}

#[async_trait]
impl Relay for JsonApiRelay {
    fn name(&self) -> &'static str {
        "json-api"
    }

    async fn dispatch(&self, submission: &ContactSubmission) -> Result<RelayResponse, RelayError> {
        let payload = Payload {
            access_key: &self.access_key,
            from_name: &submission.name,
            subject: &submission.subject,
            reply_to: &submission.email,
            message: &submission.message,
            to: &self.to,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(&payload)
            .send()
            .await?;

        RelayResponse::read(response).await
    }

    fn accepts(&self, response: &RelayResponse) -> bool {
        serde_json::from_str::<Reply>(&response.body)
            .map(|reply| reply.success)
            .unwrap_or(false)
    }
}
