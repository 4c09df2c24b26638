use std::collections::HashMap;

use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    dto::catalog::CategoryList,
    entity::{Categories, Products, categories, products},
    error::AppResult,
    models::{CategoryWithProducts, Product},
    response::{ApiResponse, Meta},
    services::product_service::load_products,
    state::AppState,
};

/// Every category with its products, variants and ingredients.
pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let db_categories = Categories::find()
        .order_by_asc(categories::Column::Id)
        .all(&state.orm)
        .await?;
    let db_products = Products::find()
        .order_by_asc(products::Column::Id)
        .all(&state.orm)
        .await?;

    let mut by_category: HashMap<i32, Vec<Product>> = HashMap::new();
    for product in load_products(&state.orm, db_products).await? {
        by_category
            .entry(product.category_id)
            .or_default()
            .push(product);
    }

    let items: Vec<CategoryWithProducts> = db_categories
        .into_iter()
        .map(|category| CategoryWithProducts {
            products: by_category.remove(&category.id).unwrap_or_default(),
            id: category.id,
            name: category.name,
        })
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}
