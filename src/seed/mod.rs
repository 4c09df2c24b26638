//! Baseline catalog data for local development and demos.
//!
//! [`run`] wipes every catalog table with [`down`] and repopulates it with
//! [`up`]. Rows are inserted parents first (users, categories, ingredients,
//! products, product items, carts, cart items) and deleted in the reverse
//! order, after which the id sequences are realigned so a reseed starts from 1.

pub mod constants;
pub mod price;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use rand::{SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbBackend, EntityTrait, QueryOrder, Set, Statement,
};
use thiserror::Error;

use crate::{
    db::OrmConn,
    entity::{
        CartItemIngredients, CartItems, Carts, Categories, Ingredients, ProductIngredients,
        ProductItems, Products, Users, cart_item_ingredients, cart_items, carts, categories,
        ingredients, product_ingredients, product_items, products, users,
    },
};
use constants::{
    CART_ITEM_INGREDIENTS, CART_ITEM_QUANTITY, CART_TOKENS, CATEGORIES, FEATURED_PIZZAS,
    INGREDIENTS, PIZZA_CATEGORY, PRODUCTS, USERS,
};
use price::{MAX_ITEM_PRICE, MIN_ITEM_PRICE, random_price};

/// Tables with a serial `id`, realigned after [`down`].
pub const SEQUENCED_TABLES: &[&str] = &[
    "users",
    "categories",
    "carts",
    "cart_items",
    "ingredients",
    "products",
    "product_items",
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid price range [{min}, {max})")]
    InvalidPriceRange { min: i64, max: i64 },

    #[error("seeded {0} not found")]
    Missing(&'static str),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("ORM error: {0}")]
    Orm(#[from] sea_orm::DbErr),
}

/// Tear everything down, then seed from scratch.
pub async fn run(db: &OrmConn) -> Result<(), SeedError> {
    down(db).await?;
    up(db).await?;
    tracing::info!("seed completed");
    Ok(())
}

/// Process exit status for a seeding outcome: 0 on success, 1 on failure.
pub fn exit_status(outcome: &Result<(), SeedError>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(error = %err, "seeding failed");
            1
        }
    }
}

pub async fn up(db: &OrmConn) -> Result<(), SeedError> {
    let mut rng = StdRng::from_os_rng();
    up_with_rng(db, &mut rng).await
}

/// [`up`] with a caller-provided price generator.
pub async fn up_with_rng(db: &OrmConn, rng: &mut StdRng) -> Result<(), SeedError> {
    let verified_at = Utc::now().fixed_offset();
    let mut seed_users = Vec::with_capacity(USERS.len());
    for user in USERS {
        seed_users.push(users::ActiveModel {
            full_name: Set(user.full_name.to_string()),
            email: Set(user.email.to_string()),
            password: Set(hash_password(user.password)?),
            verified: Set(Some(verified_at)),
            role: Set(user.role),
            ..Default::default()
        });
    }
    Users::insert_many(seed_users).exec(db).await?;
    let db_users = Users::find().order_by_asc(users::Column::Id).all(db).await?;
    tracing::debug!(count = db_users.len(), "seeded users");

    Categories::insert_many(CATEGORIES.iter().map(|name| categories::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }))
    .exec(db)
    .await?;
    let db_categories = Categories::find()
        .order_by_asc(categories::Column::Id)
        .all(db)
        .await?;

    Ingredients::insert_many(INGREDIENTS.iter().map(|ingredient| ingredients::ActiveModel {
        name: Set(ingredient.name.to_string()),
        price: Set(Decimal::from(ingredient.price)),
        image_url: Set(ingredient.image_url.to_string()),
        ..Default::default()
    }))
    .exec(db)
    .await?;
    let db_ingredients = Ingredients::find()
        .order_by_asc(ingredients::Column::Id)
        .all(db)
        .await?;

    let mut seed_products = Vec::with_capacity(PRODUCTS.len());
    for product in PRODUCTS {
        let category = product
            .category
            .checked_sub(1)
            .and_then(|index| db_categories.get(index))
            .ok_or(SeedError::Missing("product category"))?;
        seed_products.push(products::ActiveModel {
            name: Set(product.name.to_string()),
            image_url: Set(product.image_url.to_string()),
            category_id: Set(category.id),
            ..Default::default()
        });
    }
    Products::insert_many(seed_products).exec(db).await?;

    let pizza_category_id = db_categories
        .iter()
        .find(|category| category.name == PIZZA_CATEGORY)
        .map(|category| category.id)
        .ok_or(SeedError::Missing("pizza category"))?;

    let mut seed_items = Vec::new();
    let mut featured_ids = Vec::with_capacity(FEATURED_PIZZAS.len());
    for pizza in FEATURED_PIZZAS {
        let product = products::ActiveModel {
            name: Set(pizza.name.to_string()),
            image_url: Set(pizza.image_url.to_string()),
            category_id: Set(pizza_category_id),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let end = pizza.ingredients.end.min(db_ingredients.len());
        let start = pizza.ingredients.start.min(end);
        let links: Vec<_> = db_ingredients[start..end]
            .iter()
            .map(|ingredient| product_ingredients::ActiveModel {
                product_id: Set(product.id),
                ingredient_id: Set(ingredient.id),
            })
            .collect();
        if !links.is_empty() {
            ProductIngredients::insert_many(links).exec(db).await?;
        }

        for (pizza_type, size) in pizza.variants {
            seed_items.push(product_item(rng, product.id, Some(*pizza_type), Some(*size))?);
        }
        featured_ids.push(product.id);
    }

    let db_products = Products::find()
        .order_by_asc(products::Column::Id)
        .all(db)
        .await?;
    for product in db_products
        .iter()
        .filter(|product| !featured_ids.contains(&product.id))
    {
        seed_items.push(product_item(rng, product.id, None, None)?);
    }
    let item_count = seed_items.len();
    ProductItems::insert_many(seed_items).exec(db).await?;
    tracing::debug!(products = db_products.len(), items = item_count, "seeded catalog");

    let seed_carts: Vec<_> = db_users
        .iter()
        .zip(CART_TOKENS)
        .map(|(user, token)| carts::ActiveModel {
            user_id: Set(Some(user.id)),
            token: Set(token.to_string()),
            total_amount: Set(Decimal::ZERO),
            ..Default::default()
        })
        .collect();
    if seed_carts.is_empty() {
        return Err(SeedError::Missing("cart owner"));
    }
    Carts::insert_many(seed_carts).exec(db).await?;

    let cart = Carts::find()
        .order_by_asc(carts::Column::Id)
        .one(db)
        .await?
        .ok_or(SeedError::Missing("cart"))?;
    let item = ProductItems::find()
        .order_by_asc(product_items::Column::Id)
        .one(db)
        .await?
        .ok_or(SeedError::Missing("product item"))?;

    let cart_item = cart_items::ActiveModel {
        cart_id: Set(cart.id),
        product_item_id: Set(item.id),
        quantity: Set(CART_ITEM_QUANTITY),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let selected: Vec<_> = db_ingredients
        .iter()
        .take(CART_ITEM_INGREDIENTS)
        .map(|ingredient| cart_item_ingredients::ActiveModel {
            cart_item_id: Set(cart_item.id),
            ingredient_id: Set(ingredient.id),
        })
        .collect();
    if !selected.is_empty() {
        CartItemIngredients::insert_many(selected).exec(db).await?;
    }

    Ok(())
}

/// Delete every seeded row, children first, then realign the id sequences.
pub async fn down(db: &OrmConn) -> Result<(), SeedError> {
    CartItemIngredients::delete_many().exec(db).await?;
    CartItems::delete_many().exec(db).await?;
    Carts::delete_many().exec(db).await?;
    ProductIngredients::delete_many().exec(db).await?;
    ProductItems::delete_many().exec(db).await?;
    Products::delete_many().exec(db).await?;
    Ingredients::delete_many().exec(db).await?;
    Categories::delete_many().exec(db).await?;
    Users::delete_many().exec(db).await?;

    let reset = reset_sequences(db, SEQUENCED_TABLES).await;
    tracing::info!(reset, tables = SEQUENCED_TABLES.len(), "catalog tables cleared");
    Ok(())
}

/// Point each table's id sequence at `max(id) + 1`, or 1 when the table is
/// empty. Failures are logged and skipped. Returns how many tables were reset.
pub async fn reset_sequences(db: &impl ConnectionTrait, tables: &[&str]) -> usize {
    let mut reset = 0;
    for table in tables {
        if table.is_empty() || !table.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
            tracing::warn!(table, "refusing to reset sequence for invalid table name");
            continue;
        }

        let sql = format!(
            "SELECT setval(pg_get_serial_sequence('public.{table}', 'id'), \
             COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        );
        match db
            .execute(Statement::from_string(DbBackend::Postgres, sql))
            .await
        {
            Ok(_) => reset += 1,
            Err(err) => tracing::warn!(table, error = %err, "failed to reset sequence"),
        }
    }
    reset
}

fn product_item(
    rng: &mut StdRng,
    product_id: i32,
    pizza_type: Option<product_items::PizzaType>,
    size: Option<product_items::PizzaSize>,
) -> Result<product_items::ActiveModel, SeedError> {
    Ok(product_items::ActiveModel {
        product_id: Set(product_id),
        price: Set(random_price(rng, MIN_ITEM_PRICE, MAX_ITEM_PRICE)?),
        pizza_type: Set(pizza_type),
        size: Set(size),
        ..Default::default()
    })
}

fn hash_password(password: &str) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SeedError::PasswordHash(e.to_string()))?
        .to_string();
    Ok(hash)
}
