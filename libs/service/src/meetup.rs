use entity::prelude::*;
use repository::meetup::MeetupRepository;

use crate::{Response, ServiceError};

#[derive(Clone, Debug)]
pub struct MeetupService {
    repository: MeetupRepository,
}

impl MeetupService {
    pub fn new(repository: MeetupRepository) -> Self {
        Self { repository }
    }

    // No duplicate-enrollment check: the original never implemented one.
    pub async fn enroll(&self, meetup: MeetupEntity) -> Response<MeetupEntity> {
        Ok(self.repository.save(meetup).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Response<Option<MeetupDetails>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn update(&self, meetup: MeetupEntity) -> Response<MeetupEntity> {
        if meetup.id.is_none() {
            return Err(ServiceError::MissingId { entity: "Meetup" });
        }

        Ok(self.repository.save(meetup).await?)
    }

    pub async fn find_all(
        &self,
        filter: &MeetupFilter,
        page: u64,
        limit: u64,
    ) -> Response<(Vec<MeetupDetails>, u64)> {
        Ok(self.repository.find_all(filter, page * limit, limit).await?)
    }

    pub async fn find_by_registration(
        &self,
        registration: &RegistrationEntity,
        page: u64,
        limit: u64,
    ) -> Response<(Vec<MeetupDetails>, u64)> {
        let Some(registration_id) = registration.id else {
            return Err(ServiceError::MissingId {
                entity: "Registration",
            });
        };

        Ok(self
            .repository
            .find_by_registration(registration_id, page * limit, limit)
            .await?)
    }
}
