use chrono::NaiveDate;

use crate::{event::Event, registration::Registration};

/// An enrollment record joining one registration to one event.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Meetup {
    pub id: Option<i32>,
    pub registration_id: i32,
    pub event_id: i32,
    pub enrolled_at: NaiveDate,
}

/// An enrollment together with the rows it references.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct MeetupDetails {
    pub meetup: Meetup,
    pub registration: Registration,
    pub event: Event,
}

/// Search filter: rows match when either side matches. Both fields absent
/// means all rows.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct MeetupFilter {
    pub registration_code: Option<String>,
    pub event_name: Option<String>,
}
