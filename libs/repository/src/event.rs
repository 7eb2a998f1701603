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
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            event_date: value.event_date,
            hosted_by: value.hosted_by,
            guest_speaker: value.guest_speaker,
            link: value.link,
        }
    }
}

impl From<EventEntity> for event::ActiveModel {
    fn from(value: EventEntity) -> Self {
        Self {
            id: match value.id {
                Some(id) => ActiveValue::set(id),
                None => ActiveValue::not_set(),
            },
            name: ActiveValue::set(value.name),
            event_date: ActiveValue::set(value.event_date),
            hosted_by: ActiveValue::set(value.hosted_by),
            guest_speaker: ActiveValue::set(value.guest_speaker),
            link: ActiveValue::set(value.link),
        }
    }
}

fn contains(column: event::Column, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column)))
        .like(format!("%{}%", value.to_lowercase()))
}

impl EventRepository {
    pub async fn find_by_id(&self, id: i32) -> Response<Option<EventEntity>> {
        let event = Event::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find event by id")?;

        Ok(event.map(EventEntity::from))
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Response<Option<EventEntity>> {
        let event = Event::find()
            .filter(event::Column::Name.eq(name))
            .one(&self.db)
            .await
            .into_response("in find event by name")?;

        Ok(event.map(EventEntity::from))
    }

    pub async fn save(&self, event: EventEntity) -> Response<EventEntity> {
        let model = event::ActiveModel::from(event)
            .save(&self.db)
            .await
            .into_response("in save event")?;

        Ok(EventEntity::from(
            model.try_into_model().into_response("in save event")?,
        ))
    }

    pub async fn delete(&self, event_id: i32) -> Response<()> {
        event::Entity::delete(event::ActiveModel {
            id: ActiveValue::Set(event_id),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .into_response("in delete event")?;

        Ok(())
    }

    pub async fn find_all(
        &self,
        filter: &EventFilter,
        offset: u64,
        limit: u64,
    ) -> Response<(Vec<EventEntity>, u64)> {
        let mut query = Event::find().order_by_asc(event::Column::Id);

        if let Some(name) = &filter.name {
            query = query.filter(contains(event::Column::Name, name));
        }

        if let Some(hosted_by) = &filter.hosted_by {
            query = query.filter(contains(event::Column::HostedBy, hosted_by));
        }

        if let Some(guest_speaker) = &filter.guest_speaker {
            query = query
                .filter(contains(event::Column::GuestSpeaker, guest_speaker));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .into_response("in count events")?;
        let events = query
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .into_response("in find events")?;

        Ok((events.into_iter().map(EventEntity::from).collect(), total))
    }
}
