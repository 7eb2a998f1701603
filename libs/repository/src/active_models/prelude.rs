pub use super::event::Entity as Event;
pub use super::meetup::Entity as Meetup;
pub use super::registration::Entity as Registration;
