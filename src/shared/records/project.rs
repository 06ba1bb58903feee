use serde::{Deserialize, Serialize};

/// Core listing data for a real-estate project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    pub rera_id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub developer_id: i64,
    pub area_id: i64,
    pub property_type: String,
    pub carpet_area_sqft: i64,
    pub min_price: f64,
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    pub rera_id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub developer_id: i64,
    pub area_id: i64,
    pub property_type: String,
    pub carpet_area_sqft: i64,
    pub min_price: f64,
    pub status: String,
}
