use std::ops::Range;

use crate::entity::{
    product_items::{PizzaSize, PizzaType},
    users::UserRole,
};

pub struct SeedUser {
    pub full_name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub role: UserRole,
}

pub struct SeedIngredient {
    pub name: &'static str,
    pub price: i64,
    pub image_url: &'static str,
}

pub struct SeedProduct {
    pub name: &'static str,
    pub image_url: &'static str,
    /// 1-based position in [`CATEGORIES`].
    pub category: usize,
}

pub struct FeaturedPizza {
    pub name: &'static str,
    pub image_url: &'static str,
    /// Slice of [`INGREDIENTS`], clamped to the list length.
    pub ingredients: Range<usize>,
    pub variants: &'static [(PizzaType, PizzaSize)],
}

pub const USERS: &[SeedUser] = &[
    SeedUser {
        full_name: "User Test",
        email: "user@test.ru",
        password: "111111",
        role: UserRole::User,
    },
    SeedUser {
        full_name: "Admin Test",
        email: "admin@test.ru",
        password: "111111",
        role: UserRole::Admin,
    },
];

pub const PIZZA_CATEGORY: &str = "Pizzas";

pub const CATEGORIES: &[&str] = &[
    PIZZA_CATEGORY,
    "Combo",
    "Snacks",
    "Cocktails",
    "Coffee",
    "Drinks",
    "Desserts",
];

pub const INGREDIENTS: &[SeedIngredient] = &[
    SeedIngredient {
        name: "Cheese crust",
        price: 179,
        image_url: "/static/images/ingredients/cheese-crust.png",
    },
    SeedIngredient {
        name: "Creamy mozzarella",
        price: 79,
        image_url: "/static/images/ingredients/creamy-mozzarella.png",
    },
    SeedIngredient {
        name: "Cheddar and parmesan",
        price: 79,
        image_url: "/static/images/ingredients/cheddar-parmesan.png",
    },
    SeedIngredient {
        name: "Jalapeno",
        price: 59,
        image_url: "/static/images/ingredients/jalapeno.png",
    },
    SeedIngredient {
        name: "Tender chicken",
        price: 79,
        image_url: "/static/images/ingredients/chicken.png",
    },
    SeedIngredient {
        name: "Champignons",
        price: 59,
        image_url: "/static/images/ingredients/champignons.png",
    },
    SeedIngredient {
        name: "Ham",
        price: 79,
        image_url: "/static/images/ingredients/ham.png",
    },
    SeedIngredient {
        name: "Spicy pepperoni",
        price: 79,
        image_url: "/static/images/ingredients/pepperoni.png",
    },
    SeedIngredient {
        name: "Spicy chorizo",
        price: 79,
        image_url: "/static/images/ingredients/chorizo.png",
    },
    SeedIngredient {
        name: "Pickles",
        price: 59,
        image_url: "/static/images/ingredients/pickles.png",
    },
    SeedIngredient {
        name: "Fresh tomatoes",
        price: 59,
        image_url: "/static/images/ingredients/tomatoes.png",
    },
    SeedIngredient {
        name: "Red onion",
        price: 59,
        image_url: "/static/images/ingredients/red-onion.png",
    },
    SeedIngredient {
        name: "Juicy pineapples",
        price: 59,
        image_url: "/static/images/ingredients/pineapples.png",
    },
    SeedIngredient {
        name: "Italian herbs",
        price: 39,
        image_url: "/static/images/ingredients/italian-herbs.png",
    },
    SeedIngredient {
        name: "Sweet pepper",
        price: 59,
        image_url: "/static/images/ingredients/sweet-pepper.png",
    },
    SeedIngredient {
        name: "Feta cubes",
        price: 79,
        image_url: "/static/images/ingredients/feta.png",
    },
    SeedIngredient {
        name: "Meatballs",
        price: 79,
        image_url: "/static/images/ingredients/meatballs.png",
    },
];

pub const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Ham and egg omelette",
        image_url: "/static/images/products/omelette-ham.webp",
        category: 3,
    },
    SeedProduct {
        name: "Chicken wings",
        image_url: "/static/images/products/chicken-wings.webp",
        category: 3,
    },
    SeedProduct {
        name: "Country potatoes",
        image_url: "/static/images/products/country-potatoes.webp",
        category: 3,
    },
    SeedProduct {
        name: "Chicken rolls",
        image_url: "/static/images/products/chicken-rolls.webp",
        category: 3,
    },
    SeedProduct {
        name: "Banana milkshake",
        image_url: "/static/images/products/banana-milkshake.webp",
        category: 4,
    },
    SeedProduct {
        name: "Caramel apple milkshake",
        image_url: "/static/images/products/caramel-apple-milkshake.webp",
        category: 4,
    },
    SeedProduct {
        name: "Oreo milkshake",
        image_url: "/static/images/products/oreo-milkshake.webp",
        category: 4,
    },
    SeedProduct {
        name: "Iced cappuccino",
        image_url: "/static/images/products/iced-cappuccino.webp",
        category: 5,
    },
    SeedProduct {
        name: "Caramel latte",
        image_url: "/static/images/products/caramel-latte.webp",
        category: 5,
    },
    SeedProduct {
        name: "Coconut latte",
        image_url: "/static/images/products/coconut-latte.webp",
        category: 5,
    },
    SeedProduct {
        name: "Orange juice",
        image_url: "/static/images/products/orange-juice.webp",
        category: 6,
    },
    SeedProduct {
        name: "Cheesecake",
        image_url: "/static/images/products/cheesecake.webp",
        category: 7,
    },
    SeedProduct {
        name: "Chocolate muffin",
        image_url: "/static/images/products/chocolate-muffin.webp",
        category: 7,
    },
    SeedProduct {
        name: "Pizza and snacks combo",
        image_url: "/static/images/products/pizza-snacks-combo.webp",
        category: 2,
    },
];

pub const FEATURED_PIZZAS: &[FeaturedPizza] = &[
    FeaturedPizza {
        name: "Pepperoni fresh",
        image_url: "/static/images/products/pepperoni-fresh.webp",
        ingredients: 0..5,
        variants: &[
            (PizzaType::Traditional, PizzaSize::Small),
            (PizzaType::Thin, PizzaSize::Medium),
            (PizzaType::Thin, PizzaSize::Large),
        ],
    },
    FeaturedPizza {
        name: "Cheese",
        image_url: "/static/images/products/cheese.webp",
        ingredients: 5..10,
        variants: &[
            (PizzaType::Traditional, PizzaSize::Small),
            (PizzaType::Traditional, PizzaSize::Medium),
            (PizzaType::Traditional, PizzaSize::Large),
            (PizzaType::Thin, PizzaSize::Small),
            (PizzaType::Thin, PizzaSize::Medium),
            (PizzaType::Thin, PizzaSize::Large),
        ],
    },
    FeaturedPizza {
        name: "Chorizo fresh",
        image_url: "/static/images/products/chorizo-fresh.webp",
        ingredients: 10..40,
        variants: &[
            (PizzaType::Traditional, PizzaSize::Small),
            (PizzaType::Thin, PizzaSize::Medium),
            (PizzaType::Thin, PizzaSize::Large),
        ],
    },
];

pub const CART_TOKENS: &[&str] = &["1111", "2222"];

/// The sample cart item gets this many leading ingredients.
pub const CART_ITEM_INGREDIENTS: usize = 4;
pub const CART_ITEM_QUANTITY: i32 = 2;
