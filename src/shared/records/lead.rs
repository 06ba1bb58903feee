use serde::{Deserialize, Serialize};

/// A buyer enquiry against a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(default)]
    pub id: i64,
    pub project_id: i64,
    pub developer_id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget_min: f64,
    pub budget_max: f64,
    pub lead_status: String,
    pub lead_score: i64,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCreate {
    pub project_id: i64,
    pub developer_id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub budget_min: f64,
    pub budget_max: f64,
    pub lead_status: String,
    pub lead_score: i64,
}
