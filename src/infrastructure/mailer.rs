use async_trait::async_trait;
use serde::Serialize;

use crate::constants::MAIL_SEND_TIMEOUT;
use crate::entities::submission::NewSubmission;
use crate::settings::AppConfig;

/// Outcome of a notification attempt. None of these block the caller:
/// `Skipped` means the mailer is not configured, `Failed` is logged and
/// swallowed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    Skipped,
    Failed,
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &NewSubmission) -> NotifyOutcome;
}

#[derive(Debug, Serialize)]
struct OutboundMessage {
    from: String,
    to: String,
    reply_to: String,
    subject: String,
    html: String,
    text: String,
}

/// Sends contact alerts through a mail provider's HTTP API. The request
/// carries a hard timeout so a slow provider cannot stall the response
/// path.
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: String,
    to: String,
}

impl HttpMailer {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(MAIL_SEND_TIMEOUT)
            .build()
            .unwrap_or_default();

        let to = config
            .notification_email
            .clone()
            .unwrap_or_else(|| config.mail_from.clone());

        HttpMailer {
            client,
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
            to,
        }
    }

    fn build_message(&self, submission: &NewSubmission) -> OutboundMessage {
        // Everything user-supplied is escaped before it touches the HTML body.
        let safe_name = escape_html(&submission.name);
        let safe_email = escape_html(&submission.email);
        let safe_phone = if submission.phone.is_empty() {
            "Not provided".to_string()
        } else {
            escape_html(&submission.phone)
        };
        let safe_message = escape_html(&submission.message);

        let html = format!(
            "<h2>New contact form submission</h2>\
             <p><strong>Name:</strong> {safe_name}</p>\
             <p><strong>Email:</strong> <a href=\"mailto:{safe_email}\">{safe_email}</a></p>\
             <p><strong>Phone:</strong> {safe_phone}</p>\
             <p><strong>Message:</strong></p>\
             <p style=\"white-space: pre-wrap;\">{safe_message}</p>"
        );

        let text = format!(
            "New contact from {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            submission.name,
            submission.email,
            if submission.phone.is_empty() { "N/A" } else { &submission.phone },
            submission.message,
        );

        OutboundMessage {
            from: self.from.clone(),
            to: self.to.clone(),
            reply_to: submission.email.clone(),
            subject: format!("New Contact Form Submission from {safe_name}"),
            html,
            text,
        }
    }
}

#[async_trait]
impl ContactNotifier for HttpMailer {
    async fn notify(&self, submission: &NewSubmission) -> NotifyOutcome {
        let (Some(api_url), Some(api_key)) = (&self.api_url, &self.api_key) else {
            tracing::debug!("mail credentials not configured, notification skipped");
            return NotifyOutcome::Skipped;
        };

        let message = self.build_message(submission);

        let result = self
            .client
            .post(api_url)
            .bearer_auth(api_key)
            .json(&message)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match result {
            Ok(_) => {
                tracing::info!(to = %self.to, "contact notification delivered");
                NotifyOutcome::Sent
            }
            Err(e) => {
                tracing::warn!("failed to send contact notification: {}", e);
                NotifyOutcome::Failed
            }
        }
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> NewSubmission {
        NewSubmission {
            name: "Jane & Co".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
            message: "a \"quote\" for <my> car".into(),
        }
    }

    fn unconfigured_mailer() -> HttpMailer {
        let config: AppConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        HttpMailer::new(&config)
    }

    #[test]
    fn escapes_all_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">O'Brien & sons</a>"#),
            "&lt;a href=&quot;x&quot;&gt;O&#039;Brien &amp; sons&lt;/a&gt;"
        );
    }

    #[test]
    fn message_body_contains_no_raw_user_markup() {
        let mailer = unconfigured_mailer();
        let message = mailer.build_message(&submission());
        assert!(message.html.contains("Jane &amp; Co"));
        assert!(message.html.contains("&lt;my&gt;"));
        assert!(message.html.contains("Not provided"));
        assert!(!message.html.contains("<my>"));
    }

    #[tokio::test]
    async fn missing_credentials_skip_without_error() {
        let mailer = unconfigured_mailer();
        assert_eq!(mailer.notify(&submission()).await, NotifyOutcome::Skipped);
    }

    #[tokio::test]
    async fn unreachable_provider_reports_failed() {
        let mut config: AppConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        config.mail_api_url = Some("http://127.0.0.1:1/send".into());
        config.mail_api_key = Some("test-key".into());
        let mailer = HttpMailer::new(&config);
        assert_eq!(mailer.notify(&submission()).await, NotifyOutcome::Failed);
    }
}
