use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TryIntoModel,
};

use crate::active_models::{prelude::*, *};
use crate::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct MeetupRepository {
    db: DatabaseConnection,
}

impl MeetupRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<meetup::Model> for MeetupEntity {
    fn from(value: meetup::Model) -> Self {
        Self {
            id: Some(value.id),
            registration_id: value.registration_id,
            event_id: value.event_id,
            enrolled_at: value.enrolled_at,
        }
    }
}

impl From<MeetupEntity> for meetup::ActiveModel {
    fn from(value: MeetupEntity) -> Self {
        Self {
            id: match value.id {
                Some(id) => ActiveValue::set(id),
                None => ActiveValue::not_set(),
            },
            registration_id: ActiveValue::set(value.registration_id),
            event_id: ActiveValue::set(value.event_id),
            enrolled_at: ActiveValue::set(value.enrolled_at),
        }
    }
}

impl MeetupRepository {
    pub async fn save(&self, meetup: MeetupEntity) -> Response<MeetupEntity> {
        let model = meetup::ActiveModel::from(meetup)
            .save(&self.db)
            .await
            .into_response("in save meetup")?;

        Ok(MeetupEntity::from(
            model.try_into_model().into_response("in save meetup")?,
        ))
    }

    pub async fn find_by_id(&self, id: i32) -> Response<Option<MeetupDetails>> {
        let meetup = Meetup::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find meetup by id")?;

        let Some(meetup) = meetup else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![meetup]).await?.into_iter().next())
    }

    pub async fn find_all(
        &self,
        filter: &MeetupFilter,
        offset: u64,
        limit: u64,
    ) -> Response<(Vec<MeetupDetails>, u64)> {
        let mut query = Meetup::find()
            .join(JoinType::InnerJoin, meetup::Relation::Registration.def())
            .join(JoinType::InnerJoin, meetup::Relation::Event.def())
            .order_by_asc(meetup::Column::Id);

        if filter.registration_code.is_some() || filter.event_name.is_some() {
            let mut condition = Condition::any();

            if let Some(code) = &filter.registration_code {
                condition =
                    condition.add(registration::Column::Code.eq(code.clone()));
            }

            if let Some(name) = &filter.event_name {
                condition = condition.add(event::Column::Name.eq(name.clone()));
            }

            query = query.filter(condition);
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .into_response("in count meetups")?;
        let meetups = query
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .into_response("in find meetups")?;

        let details = self.hydrate(meetups).await?;

        Ok((details, total))
    }

    pub async fn find_by_registration(
        &self,
        registration_id: i32,
        offset: u64,
        limit: u64,
    ) -> Response<(Vec<MeetupDetails>, u64)> {
        let query = Meetup::find()
            .filter(meetup::Column::RegistrationId.eq(registration_id))
            .order_by_asc(meetup::Column::Id);

        let total = query
            .clone()
            .count(&self.db)
            .await
            .into_response("in count meetups by registration")?;
        let meetups = query
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .into_response("in find meetups by registration")?;

        let details = self.hydrate(meetups).await?;

        Ok((details, total))
    }

    // Two-step hydration: fetch the referenced registration and event rows
    // in bulk, then zip them back onto the enrollments.
    async fn hydrate(
        &self,
        meetups: Vec<meetup::Model>,
    ) -> Response<Vec<MeetupDetails>> {
        let registration_ids: Vec<_> =
            meetups.iter().map(|m| m.registration_id).collect();
        let event_ids: Vec<_> = meetups.iter().map(|m| m.event_id).collect();

        let registrations: HashMap<_, _> = Registration::find()
            .filter(registration::Column::Id.is_in(registration_ids))
            .all(&self.db)
            .await
            .into_response("in find registrations for meetups")?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        let events: HashMap<_, _> = Event::find()
            .filter(event::Column::Id.is_in(event_ids))
            .all(&self.db)
            .await
            .into_response("in find events for meetups")?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut results = vec![];
        for meetup in meetups {
            let registration = registrations.get(&meetup.registration_id);
            let event = events.get(&meetup.event_id);

            let (Some(registration), Some(event)) = (registration, event)
            else {
                continue;
            };

            results.push(MeetupDetails {
                meetup: MeetupEntity::from(meetup),
                registration: RegistrationEntity::from(registration.clone()),
                event: EventEntity::from(event.clone()),
            });
        }

        Ok(results)
    }
}
