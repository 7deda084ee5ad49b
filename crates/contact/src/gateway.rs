use std::sync::Arc;

use async_trait::async_trait;

use crate::{ContactSubmission, Relay, RelayConfig, SubmissionResult, build_relay};

/// Anything Form Capture can hand a submission to.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, submission: ContactSubmission) -> folio_shared::Result<SubmissionResult>;
}

/// Validates a submission and forwards it to the configured relay.
///
/// One relay call per accepted submission, no retry and no deduplication.
#[derive(Clone)]
pub struct Gateway {
    relay: Arc<dyn Relay>,
}

impl Gateway {
    pub fn new(relay: Arc<dyn Relay>) -> Self {
        Self { relay }
    }

    pub fn from_config(config: &RelayConfig) -> folio_shared::Result<Self> {
        Ok(Self::new(build_relay(config)?))
    }

    pub fn relay_name(&self) -> &'static str {
        self.relay.name()
    }

    #[tracing::instrument(skip_all, fields(relay = self.relay.name()))]
    pub async fn send(&self, submission: ContactSubmission) -> SubmissionResult {
        if let Err(err) = submission.check() {
            tracing::debug!(error = %err, "Contact message incomplete");

            return SubmissionResult::missing_fields();
        }

        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            "Sending contact message"
        );

        match self.relay.dispatch(&submission).await {
            Ok(response) if self.relay.accepts(&response) => {
                tracing::info!(
                    status = response.status.as_u16(),
                    "Contact message accepted by relay"
                );

                SubmissionResult::success()
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status.as_u16(),
                    body = %response.body,
                    "Contact message rejected by relay"
                );

                SubmissionResult::failure()
            }
            Err(err) => {
                tracing::error!(error = %err, "Error sending contact message");

                SubmissionResult::failure()
            }
        }
    }
}

#[async_trait]
impl SubmissionGateway for Gateway {
    async fn submit(&self, submission: ContactSubmission) -> folio_shared::Result<SubmissionResult> {
        Ok(self.send(submission).await)
    }
}
