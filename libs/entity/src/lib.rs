pub mod event;
pub mod meetup;
pub mod registration;

pub mod prelude {
    pub use crate::event::{Event as EventEntity, EventFilter};
    pub use crate::meetup::{
        Meetup as MeetupEntity, MeetupDetails, MeetupFilter,
    };
    pub use crate::registration::{
        Registration as RegistrationEntity, RegistrationFilter,
    };
}
