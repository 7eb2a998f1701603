use chrono::NaiveDate;
use entity::prelude::*;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::request::{require, Pagination};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[serde(default)]
    pub event: String,
    #[serde(default, with = "crate::util::option_date_format")]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub hosted_by: String,
    #[serde(default)]
    pub guest_speaker: String,
    #[serde(default)]
    pub link_meetup: String,
}

impl EventForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = vec![];

        require(&mut errors, "event", &self.event);
        require(&mut errors, "hostedBy", &self.hosted_by);
        require(&mut errors, "guestSpeaker", &self.guest_speaker);
        require(&mut errors, "linkMeetup", &self.link_meetup);

        if self.event_date.is_none() {
            errors.push("eventDate must not be null".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_entity(self) -> EventEntity {
        EventEntity {
            id: None,
            name: self.event,
            event_date: self.event_date.unwrap_or_default(),
            hosted_by: self.hosted_by,
            guest_speaker: self.guest_speaker,
            link: self.link_meetup,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GetEventsParam {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub event: Option<String>,
    pub hosted_by: Option<String>,
    pub guest_speaker: Option<String>,
}
