use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::fetch::endpoints::CONTACT_SUBMIT;
use crate::fetch::transport::{FetchError, Transport};

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Deserialize, Debug, Default)]
struct ContactResponse {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Rejected(String),
    #[error("Could not reach the server: {0}")]
    Network(#[from] FetchError),
}

impl ContactSubmission {
    /// Trimmed copy of the form, or the first problem a visitor should fix.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let cleaned = ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service_id: self
                .service_id
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        let required = [
            ("Name", &cleaned.name),
            ("Email", &cleaned.email),
            ("Phone", &cleaned.phone),
            ("Subject", &cleaned.subject),
            ("Message", &cleaned.message),
        ];
        if let Some((label, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(ContactError::Invalid(format!("{} is required", label)));
        }

        if !is_plausible_email(&cleaned.email) {
            return Err(ContactError::Invalid("Please enter a valid email address".to_string()));
        }

        let digits = cleaned.phone.chars().filter(char::is_ascii_digit).count();
        let only_phone_chars = cleaned
            .phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
        if !only_phone_chars || !(10..=15).contains(&digits) {
            return Err(ContactError::Invalid("Please enter a valid phone number".to_string()));
        }

        Ok(cleaned)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn status_is_success(status: &Value) -> bool {
    match status {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_u64().map_or(false, |n| (200..300).contains(&n)),
        Value::String(s) => matches!(s.to_ascii_lowercase().as_str(), "success" | "ok" | "created"),
        _ => false,
    }
}

/// Send the contact form. Only a 201 whose body carries a success status
/// counts as delivered.
pub async fn submit_contact<C: Transport>(
    transport: &C,
    base_url: &str,
    submission: &ContactSubmission,
) -> Result<String, ContactError> {
    let cleaned = submission.validate()?;
    let body = serde_json::to_string(&cleaned)
        .map_err(|e| ContactError::Invalid(e.to_string()))?;

    let response = transport
        .post_json(&format!("{}{}", base_url, CONTACT_SUBMIT), body)
        .await?;
    let parsed: ContactResponse = serde_json::from_str(&response.body).unwrap_or_default();

    let delivered = response.status == 201 && parsed.status.as_ref().map_or(false, status_is_success);
    if delivered {
        log::info!("Contact form submitted for {}", cleaned.email);
        Ok(parsed
            .message
            .unwrap_or_else(|| "Thank you! We'll get back to you within 24 hours.".to_string()))
    } else {
        log::warn!("Contact form rejected with status {}", response.status);
        Err(ContactError::Rejected(parsed.message.unwrap_or_else(|| {
            format!("Failed to send message (status {}). Please try again.", response.status)
        })))
    }
}
