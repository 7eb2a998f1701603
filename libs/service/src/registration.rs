use entity::prelude::*;
use repository::registration::RegistrationRepository;

use crate::{Response, ServiceError};

#[derive(Clone, Debug)]
pub struct RegistrationService {
    repository: RegistrationRepository,
}

impl RegistrationService {
    pub fn new(repository: RegistrationRepository) -> Self {
        Self { repository }
    }

    /// Rejects when another row already holds the registration code. The
    /// check and the insert are separate statements, as in the original
    /// system; concurrent duplicate submissions can race.
    pub async fn save(
        &self,
        registration: RegistrationEntity,
    ) -> Response<RegistrationEntity> {
        if self.repository.exists_by_code(&registration.code).await? {
            return Err(ServiceError::DuplicateRegistration);
        }

        Ok(self.repository.save(registration).await?)
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Response<Option<RegistrationEntity>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn get_by_code(
        &self,
        code: &str,
    ) -> Response<Option<RegistrationEntity>> {
        Ok(self.repository.find_by_code(code).await?)
    }

    pub async fn update(
        &self,
        registration: RegistrationEntity,
    ) -> Response<RegistrationEntity> {
        if registration.id.is_none() {
            return Err(ServiceError::MissingId {
                entity: "Registration",
            });
        }

        Ok(self.repository.save(registration).await?)
    }

    pub async fn delete(
        &self,
        registration: RegistrationEntity,
    ) -> Response<()> {
        let Some(id) = registration.id else {
            return Err(ServiceError::MissingId {
                entity: "Registration",
            });
        };

        Ok(self.repository.delete(id).await?)
    }

    pub async fn find(
        &self,
        filter: &RegistrationFilter,
        page: u64,
        limit: u64,
    ) -> Response<(Vec<RegistrationEntity>, u64)> {
        Ok(self.repository.find(filter, page * limit, limit).await?)
    }
}
