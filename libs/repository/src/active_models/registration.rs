use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub date_of_registration: Date,
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meetup::Entity")]
    Meetup,
}

impl Related<super::meetup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Meetup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
