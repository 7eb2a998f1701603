use chrono::NaiveDate;
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use crate::create_meetup::response::EventResp;
use crate::registration::response::RegistrationResp;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetupResp {
    pub id: i32,
    pub registration: RegistrationResp,
    pub event_details: EventResp,
    #[serde(with = "crate::util::date_format")]
    pub enrolled_at: NaiveDate,
}

impl From<MeetupDetails> for MeetupResp {
    fn from(value: MeetupDetails) -> Self {
        Self {
            id: value.meetup.id.unwrap_or_default(),
            registration: RegistrationResp::from(value.registration),
            event_details: EventResp::from(value.event),
            enrolled_at: value.meetup.enrolled_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMeetupsResp {
    pub content: Vec<MeetupResp>,
    pub page: u64,
    pub limit: u64,
    pub total_elements: u64,
}
