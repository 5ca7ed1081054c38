use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Value, json};

use crate::config::AppConfig;

/// Asset stored at the hosted media service.
#[derive(Debug, Clone)]
pub struct UploadedMedia {
    pub url: String,
    pub public_id: String,
}

/// Thin client over the hosted media service. Storage and transformation
/// happen remotely; this only uploads and destroys assets.
pub struct MediaService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl MediaService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.media_api_url.trim_end_matches('/').to_string(),
            api_key: config.media_api_key.clone(),
        }
    }

    /// `data` is a base64 data URI, forwarded verbatim.
    pub async fn upload(&self, data: &str, folder: &str) -> Result<UploadedMedia> {
        let response = self
            .client
            .post(format!("{}/upload", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&json!({ "file": data, "folder": folder }))
            .send()
            .await
            .context("media upload request failed")?;

        if !response.status().is_success() {
            bail!("media upload failed with status {}", response.status());
        }

        let body: Value = response
            .json()
            .await
            .context("media upload returned a malformed body")?;

        let url = body["secure_url"]
            .as_str()
            .or_else(|| body["url"].as_str())
            .ok_or_else(|| anyhow!("media upload response is missing the asset url"))?
            .to_string();
        let public_id = body["public_id"]
            .as_str()
            .ok_or_else(|| anyhow!("media upload response is missing the public id"))?
            .to_string();

        Ok(UploadedMedia { url, public_id })
    }

    pub async fn destroy(&self, public_id: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/destroy", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&json!({ "public_id": public_id }))
            .send()
            .await
            .context("media destroy request failed")?;

        if !response.status().is_success() {
            bail!("media destroy failed with status {}", response.status());
        }
        Ok(())
    }
}
