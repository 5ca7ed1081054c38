use serde::Deserialize;

/// Image payload as a base64 data URI, forwarded verbatim to the hosted
/// media service.
#[derive(Debug, Deserialize)]
pub struct ImageUploadRequest {
    pub data: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub is_main: bool,
}
