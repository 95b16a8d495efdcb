//! Enquiry form DTOs, validation, and free-text sanitization.
//!
//! Three submission shapes (contact, general enquiry, car-specific enquiry)
//! validate against fixed schemas via `validator` derive. After validation
//! every free-text field is run through a best-effort sanitizer that strips
//! script tags, remaining HTML tags, and SQL keywords/punctuation before the
//! submission is logged. Submissions are not persisted.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Accepted `enquiry_type` values for the general enquiry form.
pub const ENQUIRY_TYPES: [&str; 4] = ["subscription", "purchase", "general", "support"];

/// Accepted `preferred_contact` values for the car enquiry form.
pub const PREFERRED_CONTACT_METHODS: [&str; 2] = ["email", "phone"];

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s()-]{8,15}$").expect("valid regex"));

static SCRIPT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"));

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static SQL_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(select|insert|update|delete|drop|union|exec|execute)\b|--|[;'\\]")
        .expect("valid regex")
});

/// A single field-level validation failure, serialized into 400 responses.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Flatten `validator`'s nested error map into field-level entries.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}")),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// Strip script tags, remaining HTML tags, and SQL keywords/punctuation
/// from one free-text value. Best-effort defense in depth, not an escaper:
/// the output is only ever logged.
pub fn sanitize_text(input: &str) -> String {
    let no_scripts = SCRIPT_TAG_RE.replace_all(input, "");
    let no_tags = HTML_TAG_RE.replace_all(&no_scripts, "");
    let no_sql = SQL_TOKEN_RE.replace_all(&no_tags, "");
    no_sql.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn validate_enquiry_type(value: &str) -> Result<(), ValidationError> {
    if ENQUIRY_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("enquiry_type").with_message("Unknown enquiry type".into()))
    }
}

fn validate_preferred_contact(value: &str) -> Result<(), ValidationError> {
    if PREFERRED_CONTACT_METHODS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("preferred_contact")
            .with_message("Unknown preferred contact method".into()))
    }
}

/// `POST /api/contact` payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number"))]
    pub phone: Option<String>,
    #[validate(length(min = 2, max = 150, message = "Subject must be 2-150 characters"))]
    pub subject: String,
    #[validate(length(min = 10, max = 2000, message = "Message must be 10-2000 characters"))]
    pub message: String,
}

impl ContactForm {
    /// Sanitize every free-text field in place.
    pub fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self.subject = sanitize_text(&self.subject);
        self.message = sanitize_text(&self.message);
        self
    }
}

/// `POST /api/enquiry` payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnquiryForm {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number"))]
    pub phone: Option<String>,
    #[validate(custom(function = validate_enquiry_type))]
    pub enquiry_type: String,
    #[validate(length(min = 10, max = 2000, message = "Message must be 10-2000 characters"))]
    pub message: String,
}

impl EnquiryForm {
    pub fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self.message = sanitize_text(&self.message);
        self
    }
}

/// `POST /api/car-enquiry` payload. `car_id` is the synthetic catalog id
/// from the detail page, passed through opaquely.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarEnquiryForm {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Car id is required"))]
    pub car_id: String,
    #[validate(custom(function = validate_preferred_contact))]
    pub preferred_contact: String,
    #[validate(length(min = 10, max = 2000, message = "Message must be 10-2000 characters"))]
    pub message: String,
}

impl CarEnquiryForm {
    pub fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self.message = sanitize_text(&self.message);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> ContactForm {
        ContactForm {
            name: "Jamie O'Brien".to_string(),
            email: "jamie@example.com".to_string(),
            phone: Some("+61 400 000 000".to_string()),
            subject: "Subscription question".to_string(),
            message: "Is the weekly rate inclusive of insurance?".to_string(),
        }
    }

    // -- Validation --------------------------------------------------------

    #[test]
    fn valid_contact_form_passes() {
        assert!(valid_contact().validate().is_ok());
    }

    #[test]
    fn contact_form_without_phone_passes() {
        let mut form = valid_contact();
        form.phone = None;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn short_name_is_rejected_with_field_detail() {
        let mut form = valid_contact();
        form.name = "J".to_string();
        let errs = form.validate().unwrap_err();
        let fields = field_errors(&errs);
        assert!(fields.iter().any(|f| f.field == "name"));
    }

    #[test]
    fn field_errors_flatten_multiple_failing_fields() {
        let mut form = valid_contact();
        form.name = "J".to_string();
        form.email = "not-an-email".to_string();
        form.message = "hi".to_string();

        let errs = form.validate().unwrap_err();
        let fields = field_errors(&errs);

        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["email", "message", "name"]);
        assert!(fields.iter().all(|f| !f.message.is_empty()));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = valid_contact();
        form.email = "not-an-email".to_string();
        let errs = form.validate().unwrap_err();
        assert!(field_errors(&errs).iter().any(|f| f.field == "email"));
    }

    #[test]
    fn short_message_is_rejected() {
        let mut form = valid_contact();
        form.message = "hi".to_string();
        let errs = form.validate().unwrap_err();
        assert!(field_errors(&errs).iter().any(|f| f.field == "message"));
    }

    #[test]
    fn unknown_enquiry_type_is_rejected() {
        let form = EnquiryForm {
            name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            enquiry_type: "charter".to_string(),
            message: "Looking for a long-term family car.".to_string(),
        };
        let errs = form.validate().unwrap_err();
        assert!(field_errors(&errs).iter().any(|f| f.field == "enquiry_type"));
    }

    #[test]
    fn known_enquiry_types_pass() {
        for t in ENQUIRY_TYPES {
            let form = EnquiryForm {
                name: "Sam Lee".to_string(),
                email: "sam@example.com".to_string(),
                phone: None,
                enquiry_type: t.to_string(),
                message: "Looking for a long-term family car.".to_string(),
            };
            assert!(form.validate().is_ok(), "enquiry_type {t} should validate");
        }
    }

    #[test]
    fn car_enquiry_requires_known_contact_method() {
        let form = CarEnquiryForm {
            name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            car_id: "secondhand-12".to_string(),
            preferred_contact: "carrier-pigeon".to_string(),
            message: "Is this car still available for viewing?".to_string(),
        };
        let errs = form.validate().unwrap_err();
        assert!(field_errors(&errs)
            .iter()
            .any(|f| f.field == "preferred_contact"));
    }

    // -- Sanitizer ---------------------------------------------------------

    #[test]
    fn sanitize_strips_script_tags_and_contents() {
        let out = sanitize_text("Jane<script>alert(1)</script> Doe");
        assert_eq!(out, "Jane Doe");
    }

    #[test]
    fn sanitize_strips_remaining_html_tags() {
        let out = sanitize_text("hello <b>world</b>");
        assert_eq!(out, "hello world");
        assert!(!out.contains('<') && !out.contains('>'));
    }

    #[test]
    fn sanitize_strips_sql_keywords_and_punctuation() {
        let out = sanitize_text("'; DROP TABLE cars; --");
        assert!(!out.to_lowercase().contains("drop"));
        assert!(!out.contains(';') && !out.contains('\''));
    }

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_text("  plain   text  "), "plain text");
    }

    #[test]
    fn sanitized_contact_form_has_no_angle_brackets() {
        let mut form = valid_contact();
        form.name = "Jane<script>alert('x')</script>".to_string();
        let clean = form.sanitized();
        assert!(!clean.name.contains('<') && !clean.name.contains('>'));
    }
}
