use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const FAILURE_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// The four fields of the contact form.
///
/// Absent fields deserialize to an empty string so that a missing field and an
/// empty one fail validation the same way.
#[derive(Validate, Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    // Only presence is checked, the relay is the one delivering to it.
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// All four fields present, in the shared error taxonomy.
    pub fn check(&self) -> folio_shared::Result<()> {
        self.validate()?;

        Ok(())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

/// Outcome of one submission, as shown to the visitor.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn success() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_owned(),
        }
    }

    pub fn missing_fields() -> Self {
        Self {
            success: false,
            message: MISSING_FIELDS_MESSAGE.to_owned(),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_submission_is_valid() {
        let submission = ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        let complete = ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello");

        for field in ["name", "email", "subject", "message"] {
            let mut submission = complete.clone();
            match field {
                "name" => submission.name.clear(),
                "email" => submission.email.clear(),
                "subject" => submission.subject.clear(),
                _ => submission.message.clear(),
            }

            let errors = submission.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key(field),
                "expected `{field}` to be reported"
            );
        }
    }

    #[test]
    fn test_check_reports_validation_error() {
        let submission = ContactSubmission::new("", "jane@x.com", "Hi", "Hello");

        let err = submission.check().unwrap_err();
        assert!(matches!(err, folio_shared::Error::Validate(_)));
        assert!(err.to_string().contains("name"));
        assert!(
            ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello")
                .check()
                .is_ok()
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let submission = ContactSubmission::new("  ", "jane@x.com", "Hi", "\n\t");
        let errors = submission.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_email_format_is_not_enforced() {
        let submission = ContactSubmission::new("Jane", "not-an-address", "Hi", "Hello");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_absent_fields_deserialize_as_empty() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"email":"jane@x.com"}"#).unwrap();
        assert_eq!(submission.name, "");
        assert_eq!(submission.email, "jane@x.com");
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_result_serializes_to_success_and_message() {
        let json = serde_json::to_value(SubmissionResult::missing_fields()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "All fields are required"})
        );
    }
}
