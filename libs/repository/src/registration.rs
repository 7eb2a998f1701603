use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TryIntoModel,
};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct RegistrationRepository {
    db: DatabaseConnection,
}

impl RegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<registration::Model> for RegistrationEntity {
    fn from(value: registration::Model) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            email: value.email,
            password: value.password,
            date_of_registration: value.date_of_registration,
            code: value.code,
        }
    }
}

impl From<RegistrationEntity> for registration::ActiveModel {
    fn from(value: RegistrationEntity) -> Self {
        Self {
            id: match value.id {
                Some(id) => ActiveValue::set(id),
                None => ActiveValue::not_set(),
            },
            name: ActiveValue::set(value.name),
            email: ActiveValue::set(value.email),
            password: ActiveValue::set(value.password),
            date_of_registration: ActiveValue::set(value.date_of_registration),
            code: ActiveValue::set(value.code),
        }
    }
}

fn contains(column: registration::Column, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column)))
        .like(format!("%{}%", value.to_lowercase()))
}

impl RegistrationRepository {
    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Response<Option<RegistrationEntity>> {
        let registration = Registration::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find registration by id")?;

        Ok(registration.map(RegistrationEntity::from))
    }

    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Response<Option<RegistrationEntity>> {
        let registration = Registration::find()
            .filter(registration::Column::Code.eq(code))
            .one(&self.db)
            .await
            .into_response("in find registration by code")?;

        Ok(registration.map(RegistrationEntity::from))
    }

    pub async fn exists_by_code(&self, code: &str) -> Response<bool> {
        let count = Registration::find()
            .filter(registration::Column::Code.eq(code))
            .count(&self.db)
            .await
            .into_response("in count registrations by code")?;

        Ok(count > 0)
    }

    pub async fn save(
        &self,
        registration: RegistrationEntity,
    ) -> Response<RegistrationEntity> {
        let model = registration::ActiveModel::from(registration)
            .save(&self.db)
            .await
            .into_response("in save registration")?;

        Ok(RegistrationEntity::from(
            model.try_into_model().into_response("in save registration")?,
        ))
    }

    pub async fn delete(&self, registration_id: i32) -> Response<()> {
        registration::Entity::delete(registration::ActiveModel {
            id: ActiveValue::Set(registration_id),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .into_response("in delete registration")?;

        Ok(())
    }

    pub async fn find(
        &self,
        filter: &RegistrationFilter,
        offset: u64,
        limit: u64,
    ) -> Response<(Vec<RegistrationEntity>, u64)> {
        let mut query =
            Registration::find().order_by_asc(registration::Column::Id);

        if let Some(name) = &filter.name {
            query = query.filter(contains(registration::Column::Name, name));
        }

        if let Some(email) = &filter.email {
            query = query.filter(contains(registration::Column::Email, email));
        }

        if let Some(code) = &filter.code {
            query = query.filter(contains(registration::Column::Code, code));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .into_response("in count registrations")?;
        let registrations = query
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .into_response("in find registrations")?;

        Ok((
            registrations
                .into_iter()
                .map(RegistrationEntity::from)
                .collect(),
            total,
        ))
    }
}
