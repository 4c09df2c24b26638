pub mod catalog_service;
pub mod ingredient_service;
pub mod product_service;
