use serde::{Deserialize, Serialize};

/// A registered real-estate developer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    #[serde(default)]
    pub id: i64,
    pub rera_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperCreate {
    pub rera_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The RERA id is fixed at registration and is not part of an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
}
