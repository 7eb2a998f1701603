use chrono::{NaiveDate, Utc};
use entity::prelude::*;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::request::{require, Pagination};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "registration", default)]
    pub code: String,
    #[serde(default, with = "crate::util::option_date_format")]
    pub date_of_registration: Option<NaiveDate>,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = vec![];

        require(&mut errors, "name", &self.name);
        require(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password);
        require(&mut errors, "registration", &self.code);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_entity(self) -> RegistrationEntity {
        RegistrationEntity {
            id: None,
            name: self.name,
            email: self.email,
            password: self.password,
            date_of_registration: self
                .date_of_registration
                .unwrap_or_else(|| Utc::now().date_naive()),
            code: self.code,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UpdateRegistrationForm {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = vec![];

        require(&mut errors, "name", &self.name);
        require(&mut errors, "email", &self.email);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct GetRegistrationsParam {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "registration")]
    pub code: Option<String>,
}
