use entity::prelude::*;
use repository::event::EventRepository;

use crate::{Response, ServiceError};

#[derive(Clone, Debug)]
pub struct EventService {
    repository: EventRepository,
}

impl EventService {
    pub fn new(repository: EventRepository) -> Self {
        Self { repository }
    }

    /// Rejects when an event with the same name already exists. Same
    /// check-then-insert shape as registration codes.
    pub async fn save_new(&self, event: EventEntity) -> Response<EventEntity> {
        if self.repository.find_by_name(&event.name).await?.is_some() {
            return Err(ServiceError::DuplicateEvent);
        }

        Ok(self.repository.save(event).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Response<Option<EventEntity>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Response<Option<EventEntity>> {
        Ok(self.repository.find_by_name(name).await?)
    }

    pub async fn update(&self, event: EventEntity) -> Response<EventEntity> {
        if event.id.is_none() {
            return Err(ServiceError::MissingId { entity: "Event" });
        }

        Ok(self.repository.save(event).await?)
    }

    /// The event is looked up by name before the delete, mirroring the
    /// original behavior; an unknown name is rejected outright.
    pub async fn delete(&self, event: EventEntity) -> Response<()> {
        if self.repository.find_by_name(&event.name).await?.is_none() {
            return Err(ServiceError::UnknownEvent);
        }

        let Some(id) = event.id else {
            return Err(ServiceError::MissingId { entity: "Event" });
        };

        Ok(self.repository.delete(id).await?)
    }

    pub async fn find_all(
        &self,
        filter: &EventFilter,
        page: u64,
        limit: u64,
    ) -> Response<(Vec<EventEntity>, u64)> {
        Ok(self.repository.find_all(filter, page * limit, limit).await?)
    }
}
