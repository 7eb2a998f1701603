mod event;
mod meetup;
mod registration;

pub use event::EventService;
pub use meetup::MeetupService;
pub use registration::RegistrationService;

/// Business-rule failures. Storage failures pass through as `Storage` so the
/// API layer can tell a rejected request from a broken database.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Registration already created")]
    DuplicateRegistration,

    #[error("Event already created")]
    DuplicateEvent,

    #[error("Event id must exist")]
    UnknownEvent,

    #[error("{entity} id must not be null")]
    MissingId { entity: &'static str },

    #[error(transparent)]
    Storage(#[from] repository::RepositoryError),
}

type Response<T> = Result<T, ServiceError>;
