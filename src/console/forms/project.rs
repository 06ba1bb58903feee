use crate::console::forms::{amount, choice, integer, kept_choice, optional_text, reference, text};
use crate::console::screen::EntityForm;
use crate::shared::error::FormError;
use crate::shared::records::{Project, ProjectCreate, ProjectStatus, PropertyType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    /// Only editable on create
    pub rera_id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub developer_id: String,
    pub area_id: String,
    pub property_type: Option<PropertyType>,
    pub carpet_area_sqft: String,
    pub min_price: String,
    pub status: Option<ProjectStatus>,
}

impl EntityForm for ProjectForm {
    type Record = Project;
    type Create = ProjectCreate;
    type Update = Project;

    fn from_record(record: &Project) -> Self {
        Self {
            rera_id: record.rera_id.clone(),
            name: record.name.clone(),
            slug: record.slug.clone(),
            description: record.description.clone(),
            developer_id: record.developer_id.to_string(),
            area_id: record.area_id.to_string(),
            property_type: PropertyType::parse(&record.property_type),
            carpet_area_sqft: record.carpet_area_sqft.to_string(),
            min_price: record.min_price.to_string(),
            status: ProjectStatus::parse(&record.status),
        }
    }

    fn to_create(&self) -> Result<ProjectCreate, FormError> {
        self.payload(
            text("reraId", &self.rera_id)?,
            choice("propertyType", self.property_type)?.as_str().to_string(),
            choice("status", self.status)?.as_str().to_string(),
        )
    }

    fn to_update(&self, original: &Project) -> Result<Project, FormError> {
        let property_type = kept_choice(
            "propertyType",
            self.property_type.map(PropertyType::as_str),
            &original.property_type,
        )?;
        let status = kept_choice("status", self.status.map(ProjectStatus::as_str), &original.status)?;
        let create = self.payload(original.rera_id.clone(), property_type, status)?;
        Ok(Project {
            id: original.id,
            rera_id: create.rera_id,
            name: create.name,
            slug: create.slug,
            description: create.description,
            developer_id: create.developer_id,
            area_id: create.area_id,
            property_type: create.property_type,
            carpet_area_sqft: create.carpet_area_sqft,
            min_price: create.min_price,
            status: create.status,
            created_at: original.created_at.clone(),
        })
    }
}

impl ProjectForm {
    fn payload(
        &self,
        rera_id: String,
        property_type: String,
        status: String,
    ) -> Result<ProjectCreate, FormError> {
        Ok(ProjectCreate {
            rera_id,
            name: text("name", &self.name)?,
            slug: text("slug", &self.slug)?,
            description: optional_text(&self.description),
            developer_id: reference("developerId", &self.developer_id)?,
            area_id: reference("areaId", &self.area_id)?,
            property_type,
            carpet_area_sqft: integer("carpetAreaSqft", &self.carpet_area_sqft)?,
            min_price: amount("minPrice", &self.min_price)?,
            status,
        })
    }
}
