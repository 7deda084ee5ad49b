use async_trait::async_trait;
use reqwest::Client;

use crate::{ContactSubmission, SubmissionGateway, SubmissionResult};

/// Gateway living in a running folio server, reached over `POST /api/contact`.
pub struct RemoteGateway {
    client: Client,
    url: String,
}

impl RemoteGateway {
    pub fn new(base_url: impl AsRef<str>) -> folio_shared::Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            url: format!("{}/api/contact", base_url.as_ref().trim_end_matches('/')),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionGateway for RemoteGateway {
    async fn submit(&self, submission: ContactSubmission) -> folio_shared::Result<SubmissionResult> {
        let result = self
            .client
            .post(&self.url)
            .json(&submission)
            .send()
            .await?
            .error_for_status()?
            .json::<SubmissionResult>()
            .await?;

        Ok(result)
    }
}
