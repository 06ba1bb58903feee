use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A bill raised against a developer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub id: i64,
    pub developer_id: i64,
    pub invoice_number: String,
    pub total_amount: f64,
    pub payment_status: String,
    /// As sent by the backend; see [`super::parse_date`]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub due_date: String,
    #[serde(default)]
    pub created_at: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    pub developer_id: i64,
    pub invoice_number: String,
    pub total_amount: f64,
    pub payment_status: String,
    pub due_date: NaiveDate,
}
