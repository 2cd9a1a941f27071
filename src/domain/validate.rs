use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::constants::{EMAIL_MAX_LEN, PHONE_MAX_LEN};
use crate::errors::AppError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9 \-+().]+$").unwrap());

/// Raw contact payload before any checking. Fields are kept as JSON values
/// so that a wrong type (a number where text is expected) produces the
/// form's own error message instead of a deserializer error.
#[derive(Debug, Default, Deserialize)]
pub struct RawContactForm {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

/// Shape-checked but not yet sanitized fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Ordered, short-circuiting checks: required text fields, then email
/// shape, then phone charset. Intentionally shallow; no deliverability or
/// country-format semantics.
pub fn validate(raw: &RawContactForm) -> Result<ContactFields, AppError> {
    let name = required_text(&raw.name)?;
    let email = required_text(&raw.email)?;
    let message = required_text(&raw.message)?;

    if !is_valid_email(&email) {
        return Err(AppError::InvalidEmail);
    }

    let phone = optional_text(&raw.phone);
    if let Some(phone) = &phone {
        if !is_valid_phone(phone) {
            return Err(AppError::InvalidPhone);
        }
    }

    Ok(ContactFields { name, email, phone, message })
}

fn required_text(value: &Option<Value>) -> Result<String, AppError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(AppError::MissingRequiredField),
    }
}

/// Phone is optional and, like the form it replaces, coerces non-text
/// scalars to their textual form before the charset check.
fn optional_text(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn is_valid_email(email: &str) -> bool {
    email.len() <= EMAIL_MAX_LEN && EMAIL_RE.is_match(email)
}

fn is_valid_phone(phone: &str) -> bool {
    phone.len() <= PHONE_MAX_LEN && PHONE_RE.is_match(phone)
}
