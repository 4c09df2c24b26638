use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::products::IngredientList, error::AppResult, response::ApiResponse,
    services::ingredient_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_ingredients))
}

#[utoipa::path(
    get,
    path = "/api/ingredients",
    responses(
        (status = 200, description = "All ingredients", body = ApiResponse<IngredientList>)
    ),
    tag = "Catalog"
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<IngredientList>>> {
    let resp = ingredient_service::list_ingredients(&state).await?;
    Ok(Json(resp))
}
