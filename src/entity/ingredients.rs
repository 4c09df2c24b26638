use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 1)))")]
    pub price: Decimal,
    pub image_url: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_ingredients::Entity")]
    ProductIngredients,
    #[sea_orm(has_many = "super::cart_item_ingredients::Entity")]
    CartItemIngredients,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_ingredients::Relation::Products.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_ingredients::Relation::Ingredients.def().rev())
    }
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        super::cart_item_ingredients::Relation::CartItems.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cart_item_ingredients::Relation::Ingredients.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
