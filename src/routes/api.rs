use axum::{Json, extract::State};
use folio_contact::{ContactSubmission, SubmissionResult};

use crate::routes::AppState;

/// POST /api/contact - JSON counterpart of the contact form.
///
/// Always answers 200; the outcome lives in `success`.
pub async fn contact(
    State(app_state): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> Json<SubmissionResult> {
    Json(app_state.gateway.send(input).await)
}
