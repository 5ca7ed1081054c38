use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AvatarUploadRequest {
    pub data: String,
}
