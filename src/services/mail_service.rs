use anyhow::{Context, Result, bail};
use serde_json::json;

use crate::config::AppConfig;

/// Thin client over the transactional-email HTTP API. Delivery itself is
/// the provider's concern.
pub struct MailService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender: String,
    frontend_url: String,
}

impl MailService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.mail_api_url.trim_end_matches('/').to_string(),
            api_key: config.mail_api_key.clone(),
            sender: config.mail_sender.clone(),
            frontend_url: config.frontend_url.trim_end_matches('/').to_string(),
        }
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/send", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.sender,
                "to": to,
                "subject": subject,
                "html": html,
            }))
            .send()
            .await
            .context("mail request failed")?;

        if !response.status().is_success() {
            bail!("mail provider responded with status {}", response.status());
        }
        Ok(())
    }

    pub async fn send_verification_email(&self, to: &str, token: &str) -> Result<()> {
        let link = format!("{}/verify-email?token={}", self.frontend_url, token);
        let html = format!(
            "<p>Welcome to Estatex!</p>\
             <p>Confirm your email address by following <a href=\"{link}\">this link</a>.</p>"
        );
        self.send(to, "Confirm your email address", &html).await
    }

    pub async fn send_password_reset_email(&self, to: &str, token: &str) -> Result<()> {
        let link = format!("{}/reset-password?token={}", self.frontend_url, token);
        let html = format!(
            "<p>A password reset was requested for your account.</p>\
             <p>Choose a new password via <a href=\"{link}\">this link</a>. \
             The link expires shortly; if you did not request it, ignore this email.</p>"
        );
        self.send(to, "Reset your password", &html).await
    }
}
