use serde::{Deserialize, Serialize};

/// A facility a project can advertise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub created_at: String,
}
