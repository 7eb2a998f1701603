use chrono::NaiveDate;
use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResp {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(with = "crate::util::date_format")]
    pub date_of_registration: NaiveDate,
    #[serde(rename = "registration")]
    pub code: String,
}

impl From<RegistrationEntity> for RegistrationResp {
    fn from(value: RegistrationEntity) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            name: value.name,
            email: value.email,
            password: value.password,
            date_of_registration: value.date_of_registration,
            code: value.code,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRegistrationsResp {
    pub content: Vec<RegistrationResp>,
    pub page: u64,
    pub limit: u64,
    pub total_elements: u64,
}
