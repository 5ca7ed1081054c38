use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ContactRequestBody {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}
