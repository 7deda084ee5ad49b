use anyhow::Result;
use folio_contact::{ContactSubmission, FormCapture, Gateway, RemoteGateway, SubmissionResult};

/// Submit one message from the command line, either through the configured
/// relay or through a running server's `/api/contact`.
///
/// The relay section of `config` is only validated when it is used.
pub async fn send(
    config: crate::config::Config,
    submission: ContactSubmission,
    server: Option<String>,
) -> Result<SubmissionResult> {
    let capture = FormCapture::with_fields(submission);

    let result = match server {
        Some(server) => {
            let gateway = RemoteGateway::new(&server)?;
            tracing::info!(url = gateway.url(), "Submitting through remote gateway");
            capture.submit(&gateway).await
        }
        None => {
            config.validate().map_err(anyhow::Error::msg)?;

            let gateway = Gateway::from_config(&config.relay)?;
            tracing::info!(relay = gateway.relay_name(), "Submitting through local relay");
            capture.submit(&gateway).await
        }
    };

    Ok(result.unwrap_or_else(SubmissionResult::failure))
}
