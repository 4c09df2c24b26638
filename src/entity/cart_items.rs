use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cart_id: i32,
    pub product_item_id: i32,
    pub quantity: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::carts::Entity",
        from = "Column::CartId",
        to = "super::carts::Column::Id"
    )]
    Carts,
    #[sea_orm(
        belongs_to = "super::product_items::Entity",
        from = "Column::ProductItemId",
        to = "super::product_items::Column::Id"
    )]
    ProductItems,
    #[sea_orm(has_many = "super::cart_item_ingredients::Entity")]
    CartItemIngredients,
}

impl Related<super::carts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carts.def()
    }
}

impl Related<super::product_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductItems.def()
    }
}

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        super::cart_item_ingredients::Relation::Ingredients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cart_item_ingredients::Relation::CartItems.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
