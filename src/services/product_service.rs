use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    db::OrmConn,
    dto::products::ProductList,
    entity::{
        Ingredients, ProductIngredients, ProductItems,
        products::{Column, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Expr::col(Column::Name).ilike(format!("%{}%", search)));
    }

    if let Some(category_id) = query.category_id {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }

    let sort_col = match query.sort_by.unwrap_or(ProductSortBy::Id) {
        ProductSortBy::Id => Column::Id,
        ProductSortBy::CreatedAt => Column::CreatedAt,
        ProductSortBy::Name => Column::Name,
    };

    let mut finder = Products::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let models = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;
    let items = load_products(&state.orm, models).await?;

    let meta = Meta::paged(page, limit, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let model = match Products::find_by_id(id).one(&state.orm).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let product = load_products(&state.orm, vec![model])
        .await?
        .pop()
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

/// Attach variants and ingredients to a batch of products, keeping their order.
pub async fn load_products(db: &OrmConn, models: Vec<ProductModel>) -> AppResult<Vec<Product>> {
    let items = models.load_many(ProductItems, db).await?;
    let ingredients = models
        .load_many_to_many(Ingredients, ProductIngredients, db)
        .await?;

    Ok(models
        .into_iter()
        .zip(items)
        .zip(ingredients)
        .map(|((model, mut items), mut ingredients)| {
            items.sort_by_key(|item| item.id);
            ingredients.sort_by_key(|ingredient| ingredient.id);
            Product::from_parts(model, items, ingredients)
        })
        .collect())
}
