use crate::console::forms::{amount, choice, email, integer, kept_choice, reference, text};
use crate::console::screen::EntityForm;
use crate::shared::error::FormError;
use crate::shared::records::{Lead, LeadCreate, LeadStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub lead_status: Option<LeadStatus>,
    pub project_id: String,
    pub developer_id: String,
    pub user_id: String,
    pub budget_min: String,
    pub budget_max: String,
    pub lead_score: String,
}

impl EntityForm for LeadForm {
    type Record = Lead;
    type Create = LeadCreate;
    type Update = Lead;

    fn from_record(record: &Lead) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            lead_status: LeadStatus::parse(&record.lead_status),
            project_id: record.project_id.to_string(),
            developer_id: record.developer_id.to_string(),
            user_id: record.user_id.to_string(),
            budget_min: record.budget_min.to_string(),
            budget_max: record.budget_max.to_string(),
            lead_score: record.lead_score.to_string(),
        }
    }

    fn to_create(&self) -> Result<LeadCreate, FormError> {
        self.payload(choice("leadStatus", self.lead_status)?.as_str().to_string())
    }

    fn to_update(&self, original: &Lead) -> Result<Lead, FormError> {
        let lead_status = kept_choice(
            "leadStatus",
            self.lead_status.map(LeadStatus::as_str),
            &original.lead_status,
        )?;
        let create = self.payload(lead_status)?;
        Ok(Lead {
            id: original.id,
            project_id: create.project_id,
            developer_id: create.developer_id,
            user_id: create.user_id,
            name: create.name,
            email: create.email,
            phone: create.phone,
            budget_min: create.budget_min,
            budget_max: create.budget_max,
            lead_status: create.lead_status,
            lead_score: create.lead_score,
            created_at: original.created_at.clone(),
        })
    }
}

impl LeadForm {
    fn payload(&self, lead_status: String) -> Result<LeadCreate, FormError> {
        let budget_min = amount("budgetMin", &self.budget_min)?;
        let budget_max = amount("budgetMax", &self.budget_max)?;
        if budget_max < budget_min {
            return Err(FormError::invalid("budgetMax", "must not be below budgetMin"));
        }
        Ok(LeadCreate {
            project_id: reference("projectId", &self.project_id)?,
            developer_id: reference("developerId", &self.developer_id)?,
            user_id: reference("userId", &self.user_id)?,
            name: text("name", &self.name)?,
            email: email("email", &self.email)?,
            phone: text("phone", &self.phone)?,
            budget_min,
            budget_max,
            lead_status,
            lead_score: integer("leadScore", &self.lead_score)?,
        })
    }
}
