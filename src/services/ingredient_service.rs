use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::products::IngredientList,
    entity::{Ingredients, ingredients},
    error::AppResult,
    models::Ingredient,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_ingredients(state: &AppState) -> AppResult<ApiResponse<IngredientList>> {
    let items: Vec<Ingredient> = Ingredients::find()
        .order_by_asc(ingredients::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Ingredient::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Ingredients", IngredientList { items }, Some(meta)))
}
