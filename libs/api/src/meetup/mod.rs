use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, ErrorListResp, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{GetMeetupsParam, MeetupForm};
use self::response::{GetMeetupsResp, MeetupResp};

/// Enroll a registration in an event
#[utoipa::path(
    post,
    path = "/api/meetups",
    request_body = MeetupForm,
    responses(
        (status = 201, description = "Enrollment created", body = MeetupResp),
        (status = 400, description = "Unresolvable registration code or event name", body = ErrorListResp)
    )
)]
pub async fn enroll(
    State(state): State<ApiState>,
    Json(form): Json<MeetupForm>,
) -> ApiResponse<(StatusCode, Json<MeetupResp>)> {
    form.validate().map_err(ApiError::BadRequest)?;

    let registration = state
        .registrations
        .get_by_code(&form.registration)
        .await
        .into_response()?;

    let Some(registration) = registration else {
        return Err(ApiError::BadRequest(vec![format!(
            "registration {} not found",
            form.registration
        )]));
    };

    let event = state
        .events
        .find_by_name(&form.event)
        .await
        .into_response()?;

    let Some(event) = event else {
        return Err(ApiError::BadRequest(vec![format!(
            "event {} not found",
            form.event
        )]));
    };

    let meetup = MeetupEntity {
        id: None,
        registration_id: registration.id.unwrap_or_default(),
        event_id: event.id.unwrap_or_default(),
        enrolled_at: Utc::now().date_naive(),
    };

    let enrolled = state.meetups.enroll(meetup).await.into_response()?;

    Ok((
        StatusCode::CREATED,
        Json(MeetupResp::from(MeetupDetails {
            meetup: enrolled,
            registration,
            event,
        })),
    ))
}

/// Fetch an enrollment by id
#[utoipa::path(
    get,
    path = "/api/meetups/{id}",
    responses(
        (status = 200, description = "Get enrollment successfully", body = MeetupResp),
        (status = 404, description = "No enrollment with that id")
    ),
    params(
        ("id", description = "enrollment id"),
    )
)]
pub async fn get_meetup(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<MeetupResp>> {
    let details = state.meetups.get_by_id(id).await.into_response()?;

    let Some(details) = details else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(MeetupResp::from(details)))
}

/// Paged enrollment search by registration code or event name
#[utoipa::path(
    get,
    path = "/api/meetups",
    responses(
        (status = 200, description = "List enrollments successfully", body = GetMeetupsResp)
    ),
    params(
        GetMeetupsParam
    )
)]
pub async fn find_meetups(
    State(state): State<ApiState>,
    Query(params): Query<GetMeetupsParam>,
) -> ApiResponse<Json<GetMeetupsResp>> {
    let filter = MeetupFilter {
        registration_code: params.registration,
        event_name: params.event,
    };

    let (meetups, total) = state
        .meetups
        .find_all(&filter, params.pagination.page(), params.pagination.limit())
        .await
        .into_response()?;

    Ok(Json(GetMeetupsResp {
        content: meetups.into_iter().map(MeetupResp::from).collect(),
        page: params.pagination.page(),
        limit: params.pagination.limit(),
        total_elements: total,
    }))
}
