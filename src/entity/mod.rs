pub mod cart_item_ingredients;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod ingredients;
pub mod product_ingredients;
pub mod product_items;
pub mod products;
pub mod users;

pub use cart_item_ingredients::Entity as CartItemIngredients;
pub use cart_items::Entity as CartItems;
pub use carts::Entity as Carts;
pub use categories::Entity as Categories;
pub use ingredients::Entity as Ingredients;
pub use product_ingredients::Entity as ProductIngredients;
pub use product_items::Entity as ProductItems;
pub use products::Entity as Products;
pub use users::Entity as Users;
