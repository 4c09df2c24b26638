use pizza_storefront::entity::{CartItems, Ingredients, Products, cart_items, ingredients, products};
use sea_orm::{DbBackend, EntityTrait, JoinType, QuerySelect, QueryTrait, RelationTrait};

fn joined_sql<E: EntityTrait>(select: sea_orm::Select<E>) -> String {
    select.build(DbBackend::Postgres).to_string()
}

#[test]
fn products_join_their_ingredient_links() {
    let sql = joined_sql(
        Products::find().join(JoinType::InnerJoin, products::Relation::ProductIngredients.def()),
    );
    assert!(sql.contains(r#"INNER JOIN "product_ingredients""#), "{sql}");
    assert!(sql.contains(r#""product_ingredients"."product_id""#), "{sql}");
}

#[test]
fn ingredients_join_both_link_tables() {
    let sql = joined_sql(
        Ingredients::find()
            .join(JoinType::InnerJoin, ingredients::Relation::ProductIngredients.def()),
    );
    assert!(sql.contains(r#""product_ingredients"."ingredient_id""#), "{sql}");

    let sql = joined_sql(
        Ingredients::find()
            .join(JoinType::InnerJoin, ingredients::Relation::CartItemIngredients.def()),
    );
    assert!(sql.contains(r#""cart_item_ingredients"."ingredient_id""#), "{sql}");
}

#[test]
fn cart_items_join_selected_ingredients() {
    let sql = joined_sql(
        CartItems::find()
            .join(JoinType::InnerJoin, cart_items::Relation::CartItemIngredients.def()),
    );
    assert!(sql.contains(r#""cart_item_ingredients"."cart_item_id""#), "{sql}");
}
