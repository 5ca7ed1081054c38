use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,

    pub email: String,

    pub password: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// `user` or `agent`; anything else falls back to `user`. Admin
    /// accounts are never self-registered.
    #[serde(default)]
    pub role: Option<String>,
}
