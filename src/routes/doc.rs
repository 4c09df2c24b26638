use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        catalog::{
            ActiveCategory, CategoryList, IntersectionRequest, IntersectionResponse, SessionQuery,
        },
        products::{IngredientList, ProductList},
    },
    entity::{
        product_items::{PizzaSize, PizzaType},
        users::UserRole,
    },
    models::{CategoryWithProducts, Ingredient, Product, ProductItem},
    response::{ApiResponse, Meta},
    routes::{catalog, categories, health, ingredients, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        products::list_products,
        products::get_product,
        ingredients::list_ingredients,
        catalog::active_category,
        catalog::report_intersection
    ),
    components(
        schemas(
            CategoryWithProducts,
            Ingredient,
            Product,
            ProductItem,
            PizzaType,
            PizzaSize,
            UserRole,
            CategoryList,
            ProductList,
            IngredientList,
            ActiveCategory,
            IntersectionRequest,
            IntersectionResponse,
            SessionQuery,
            params::Pagination,
            params::ProductQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CategoryList>,
            ApiResponse<IngredientList>,
            ApiResponse<IntersectionResponse>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Catalog", description = "Categories, ingredients and active category tracking"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
