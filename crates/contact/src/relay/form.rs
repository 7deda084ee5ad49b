use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderValue},
    multipart::Form,
};

use super::{Relay, RelayError, RelayResponse};
use crate::ContactSubmission;

/// Generic form relay: the four fields posted as multipart, JSON requested back.
pub struct FormRelay {
    client: Client,
    endpoint: String,
}

impl FormRelay {
    pub fn new(endpoint: impl Into<String>) -> folio_shared::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Relay for FormRelay {
    fn name(&self) -> &'static str {
        "form"
    }

    async fn dispatch(&self, submission: &ContactSubmission) -> Result<RelayResponse, RelayError> {
        let form = Form::new()
            .text("name", submission.name.to_owned())
            .text("email", submission.email.to_owned())
            .text("subject", submission.subject.to_owned())
            .text("message", submission.message.to_owned());

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .multipart(form)
            .send()
            .await?;

        RelayResponse::read(response).await
    }
}
