use async_trait::async_trait;
use reqwest::{Client, StatusCode, multipart::Form, redirect::Policy};

use super::{Relay, RelayError, RelayResponse};
use crate::ContactSubmission;

/// FormSubmit relay using the provider's own field names.
///
/// The very first submission to a new address is answered with a 302 to the
/// provider's confirmation page. Redirects are not followed and that 302 counts
/// as accepted; this is specific to FormSubmit.
pub struct FormSubmitRelay {
    client: Client,
    endpoint: String,
}

impl FormSubmitRelay {
    pub fn new(endpoint: impl Into<String>) -> folio_shared::Result<Self> {
        Ok(Self {
            client: Client::builder().redirect(Policy::none()).build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Relay for FormSubmitRelay {
    fn name(&self) -> &'static str {
        "form-submit"
    }

    async fn dispatch(&self, submission: &ContactSubmission) -> Result<RelayResponse, RelayError> {
        let form = Form::new()
            .text("name", submission.name.to_owned())
            .text("email", submission.email.to_owned())
            .text("_subject", submission.subject.to_owned())
            .text("message", submission.message.to_owned())
            .text("_captcha", "false")
            .text("_template", "box")
            .text("_replyto", submission.email.to_owned());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        RelayResponse::read(response).await
    }

    fn accepts(&self, response: &RelayResponse) -> bool {
        matches!(response.status, StatusCode::OK | StatusCode::FOUND)
    }
}
