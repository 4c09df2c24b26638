//! Server-rendered catalog page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::{
    seed::constants::{CATEGORIES, INGREDIENTS},
    state::AppState,
    tracker::ACTIVE_THRESHOLD,
};

const DEMO_IMAGE_URL: &str =
    "https://media.dodostatic.net/image/r:292x292/019613d222d37299af8d334da03c0da8.avif";
const DEMO_PRICE: i64 = 55_000;
const DEMO_ITEMS_PER_GROUP: i32 = 9;
const FILTER_INGREDIENTS: usize = 6;

/// Category highlighted before any group has reported its visibility.
pub const DEFAULT_ACTIVE_CATEGORY: i32 = 1;

/// Product groups shown on the page, as (title, category id).
pub const DEMO_GROUPS: &[(&str, i32)] = &[("Pizzas", 1), ("Combo", 2)];

pub struct CategoryTab {
    pub id: i32,
    pub name: String,
    pub active: bool,
}

pub struct ProductCard {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    /// Price of the first variant.
    pub price: Option<i64>,
}

pub struct ProductGroup {
    pub title: String,
    pub category_id: i32,
    pub items: Vec<ProductCard>,
}

pub struct FilterOption {
    pub value: String,
    pub label: String,
}

pub struct Filters {
    pub sizes: Vec<FilterOption>,
    pub pizza_types: Vec<FilterOption>,
    pub ingredients: Vec<FilterOption>,
    pub price_from: i64,
    pub price_to: i64,
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: String,
    /// Tracker session the page's script reports visibility to.
    pub session_id: String,
    pub tabs: Vec<CategoryTab>,
    pub filters: Filters,
    pub groups: Vec<ProductGroup>,
    pub threshold: f64,
}

/// Every render is a fresh page, so it gets a fresh tracker session.
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let category_ids: Vec<i32> = DEMO_GROUPS.iter().map(|(_, id)| *id).collect();
    let session_id = state.categories.open_session(&category_ids).await;
    home_page(session_id, None)
}

/// Compose the page from literal demo data.
pub fn home_page(session_id: String, active_category_id: Option<i32>) -> HomeTemplate {
    let active = active_category_id.unwrap_or(DEFAULT_ACTIVE_CATEGORY);
    let tabs = CATEGORIES
        .iter()
        .zip(1..)
        .map(|(name, id)| CategoryTab {
            id,
            name: name.to_string(),
            active: id == active,
        })
        .collect();

    HomeTemplate {
        title: "All pizzas".to_string(),
        session_id,
        tabs,
        filters: demo_filters(),
        groups: DEMO_GROUPS
            .iter()
            .map(|(title, category_id)| demo_group(title, *category_id))
            .collect(),
        threshold: ACTIVE_THRESHOLD,
    }
}

fn demo_group(title: &str, category_id: i32) -> ProductGroup {
    let items = (1..=DEMO_ITEMS_PER_GROUP)
        .map(|id| ProductCard {
            id,
            name: "Baraka pizza".to_string(),
            image_url: DEMO_IMAGE_URL.to_string(),
            price: Some(DEMO_PRICE),
        })
        .collect();

    ProductGroup {
        title: title.to_string(),
        category_id,
        items,
    }
}

fn demo_filters() -> Filters {
    let option = |value: &str, label: &str| FilterOption {
        value: value.to_string(),
        label: label.to_string(),
    };

    Filters {
        sizes: vec![
            option("20", "20 cm"),
            option("30", "30 cm"),
            option("40", "40 cm"),
        ],
        pizza_types: vec![option("1", "Traditional"), option("2", "Thin")],
        ingredients: INGREDIENTS
            .iter()
            .take(FILTER_INGREDIENTS)
            .zip(1..)
            .map(|(ingredient, id): (_, i32)| option(&id.to_string(), ingredient.name))
            .collect(),
        price_from: 0,
        price_to: 1000,
    }
}
