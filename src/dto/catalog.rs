use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{models::CategoryWithProducts, tracker::Observation};

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<CategoryWithProducts>)]
    pub items: Vec<CategoryWithProducts>,
}

/// Visibility report for one product group on the catalog page.
#[derive(Debug, Deserialize, ToSchema)]
pub struct IntersectionRequest {
    /// Session id rendered into the page.
    pub session_id: String,
    pub category_id: i32,
    /// Visible fraction of the group, from 0 to 1.
    pub intersection_ratio: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SessionQuery {
    pub session_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActiveCategory {
    pub active_category_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IntersectionResponse {
    pub category_id: i32,
    /// Whether this report moved the group into the active state.
    pub fired: bool,
    pub active_category_id: Option<i32>,
}

impl From<Observation> for IntersectionResponse {
    fn from(observation: Observation) -> Self {
        Self {
            category_id: observation.category_id,
            fired: observation.fired,
            active_category_id: observation.active_category_id,
        }
    }
}
