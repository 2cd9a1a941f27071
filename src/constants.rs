use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use std::time::Duration;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Contact-form rate limit: at most 5 submissions per client per minute.
pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);
pub const RATE_LIMIT_MAX_REQUESTS: u32 = 5;

/// Per-field length caps applied after sanitization.
pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 254;
pub const PHONE_MAX_LEN: usize = 20;
pub const MESSAGE_MAX_LEN: usize = 2000;

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for contacting Fine Line Auto Body. We will get back to you shortly!";

/// Ceiling on the outbound notification call so a slow mail provider
/// cannot stall the response.
pub const MAIL_SEND_TIMEOUT: Duration = Duration::from_secs(5);
