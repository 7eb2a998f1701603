use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::request::{require, Pagination};

#[derive(Debug, Deserialize, ToSchema)]
pub struct MeetupForm {
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub event: String,
}

impl MeetupForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = vec![];

        require(&mut errors, "registration", &self.registration);
        require(&mut errors, "event", &self.event);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct GetMeetupsParam {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub registration: Option<String>,
    pub event: Option<String>,
}
