use chrono::NaiveDate;

/// An event definition, keyed by a unique event name.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Event {
    pub id: Option<i32>,
    pub name: String,
    pub event_date: NaiveDate,
    pub hosted_by: String,
    pub guest_speaker: String,
    pub link: String,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct EventFilter {
    pub name: Option<String>,
    pub hosted_by: Option<String>,
    pub guest_speaker: Option<String>,
}
