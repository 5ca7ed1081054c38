use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::HashMap;

use crate::config::AppConfig;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

pub fn authorization_url(config: &AppConfig) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth?response_type=code&client_id={}&redirect_uri={}&scope=email%20profile",
        config.google_client_id, config.google_redirect_uri
    )
}

pub async fn exchange_code_for_token(code: &str, config: &AppConfig) -> Result<Value> {
    let mut params = HashMap::new();
    params.insert("code", code);
    params.insert("client_id", config.google_client_id.as_str());
    params.insert("client_secret", config.google_client_secret.as_str());
    params.insert("redirect_uri", config.google_redirect_uri.as_str());
    params.insert("grant_type", "authorization_code");

    let response = reqwest::Client::new()
        .post(TOKEN_ENDPOINT)
        .form(&params)
        .send()
        .await
        .context("token exchange request failed")?;

    if !response.status().is_success() {
        bail!("token exchange failed with status {}", response.status());
    }

    response
        .json()
        .await
        .context("token exchange returned a malformed body")
}

pub async fn fetch_user_info(access_token: &str) -> Result<Value> {
    let response = reqwest::Client::new()
        .get(USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .await
        .context("userinfo request failed")?;

    if !response.status().is_success() {
        bail!("userinfo fetch failed with status {}", response.status());
    }

    response
        .json()
        .await
        .context("userinfo returned a malformed body")
}
