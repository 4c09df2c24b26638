use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{
    ingredients,
    product_items::{self, PizzaSize, PizzaType},
    products,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductItem {
    pub id: i32,
    pub product_id: i32,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub pizza_type: Option<PizzaType>,
    pub size: Option<PizzaSize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ProductItem>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryWithProducts {
    pub id: i32,
    pub name: String,
    pub products: Vec<Product>,
}

impl From<ingredients::Model> for Ingredient {
    fn from(model: ingredients::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            image_url: model.image_url,
        }
    }
}

impl From<product_items::Model> for ProductItem {
    fn from(model: product_items::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            price: model.price,
            pizza_type: model.pizza_type,
            size: model.size,
        }
    }
}

impl Product {
    pub fn from_parts(
        model: products::Model,
        items: Vec<product_items::Model>,
        ingredients: Vec<ingredients::Model>,
    ) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            category_id: model.category_id,
            created_at: model.created_at.with_timezone(&Utc),
            items: items.into_iter().map(ProductItem::from).collect(),
            ingredients: ingredients.into_iter().map(Ingredient::from).collect(),
        }
    }
}
