use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub category_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Categories,
    #[sea_orm(has_many = "super::product_items::Entity")]
    ProductItems,
    #[sea_orm(has_many = "super::product_ingredients::Entity")]
    ProductIngredients,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::product_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductItems.def()
    }
}

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_ingredients::Relation::Ingredients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_ingredients::Relation::Products.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
