use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use folio_contact::{ContactSubmission, FormCapture, SubmissionResult};

use crate::{
    routes::AppState,
    template::{Template, ToastErrorTemplate, ToastSuccessTemplate},
};

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate<'a> {
    pub fields: &'a ContactSubmission,
}

/// POST /contact - submit the contact form and answer with the re-rendered
/// form wrapped in a toast.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> impl IntoResponse {
    let capture = FormCapture::with_fields(input);
    let result = capture
        .submit(&app_state.gateway)
        .await
        .unwrap_or_else(SubmissionResult::failure);

    let fields = capture.fields();
    let form = template.to_string(ContactFormTemplate { fields: &fields });

    if result.success {
        template.render(ToastSuccessTemplate {
            original: Some(&form),
            message: "Message Sent",
            description: Some(&result.message),
        })
    } else {
        template.render(ToastErrorTemplate {
            original: Some(&form),
            message: "Error",
            description: Some(&result.message),
        })
    }
}
