use chrono::NaiveDate;
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResp {
    pub id: i32,
    #[serde(rename = "event")]
    pub name: String,
    #[serde(with = "crate::util::date_format")]
    pub event_date: NaiveDate,
    pub hosted_by: String,
    pub guest_speaker: String,
    pub link_meetup: String,
}

impl From<EventEntity> for EventResp {
    fn from(value: EventEntity) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.name,
            event_date: value.event_date,
            hosted_by: value.hosted_by,
            guest_speaker: value.guest_speaker,
            link_meetup: value.link,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetEventsResp {
    pub content: Vec<EventResp>,
    pub page: u64,
    pub limit: u64,
    pub total_elements: u64,
}
