pub mod prelude;

pub mod event;
pub mod meetup;
pub mod registration;
