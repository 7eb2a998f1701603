use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use entity::prelude::*;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, ErrorListResp, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{
    GetRegistrationsParam, RegistrationForm, UpdateRegistrationForm,
};
use self::response::{GetRegistrationsResp, RegistrationResp};

/// Create a registration
#[utoipa::path(
    post,
    path = "/api/registration",
    request_body = RegistrationForm,
    responses(
        (status = 201, description = "Registration created", body = RegistrationResp),
        (status = 400, description = "Validation failure or duplicate registration code", body = ErrorListResp)
    )
)]
pub async fn create_registration(
    State(state): State<ApiState>,
    Json(form): Json<RegistrationForm>,
) -> ApiResponse<(StatusCode, Json<RegistrationResp>)> {
    form.validate().map_err(ApiError::BadRequest)?;

    let created = state
        .registrations
        .save(form.into_entity())
        .await
        .into_response()?;

    Ok((StatusCode::CREATED, Json(RegistrationResp::from(created))))
}

/// Fetch a registration by id
#[utoipa::path(
    get,
    path = "/api/registration/{id}",
    responses(
        (status = 200, description = "Get registration successfully", body = RegistrationResp),
        (status = 404, description = "No registration with that id")
    ),
    params(
        ("id", description = "registration id"),
    )
)]
pub async fn get_registration(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<RegistrationResp>> {
    let registration =
        state.registrations.get_by_id(id).await.into_response()?;

    let Some(registration) = registration else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(RegistrationResp::from(registration)))
}

/// Update a registration's name and email
#[utoipa::path(
    put,
    path = "/api/registration/{id}",
    request_body = UpdateRegistrationForm,
    responses(
        (status = 200, description = "Update registration successfully", body = RegistrationResp),
        (status = 404, description = "No registration with that id")
    ),
    params(
        ("id", description = "registration id"),
    )
)]
pub async fn update_registration(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Json(form): Json<UpdateRegistrationForm>,
) -> ApiResponse<Json<RegistrationResp>> {
    form.validate().map_err(ApiError::BadRequest)?;

    let registration =
        state.registrations.get_by_id(id).await.into_response()?;

    let Some(mut registration) = registration else {
        return Err(ApiError::NotFound);
    };

    registration.name = form.name;
    registration.email = form.email;

    let updated = state
        .registrations
        .update(registration)
        .await
        .into_response()?;

    Ok(Json(RegistrationResp::from(updated)))
}

/// Delete a registration
#[utoipa::path(
    delete,
    path = "/api/registration/{id}",
    responses(
        (status = 204, description = "Registration deleted"),
        (status = 404, description = "No registration with that id")
    ),
    params(
        ("id", description = "registration id"),
    )
)]
pub async fn delete_registration(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> ApiResponse<StatusCode> {
    let registration =
        state.registrations.get_by_id(id).await.into_response()?;

    let Some(registration) = registration else {
        return Err(ApiError::NotFound);
    };

    state
        .registrations
        .delete(registration)
        .await
        .into_response()?;

    Ok(StatusCode::NO_CONTENT)
}

/// Paged, example-filtered registration search
#[utoipa::path(
    get,
    path = "/api/registration",
    responses(
        (status = 200, description = "List registrations successfully", body = GetRegistrationsResp)
    ),
    params(
        GetRegistrationsParam
    )
)]
pub async fn find_registrations(
    State(state): State<ApiState>,
    Query(params): Query<GetRegistrationsParam>,
) -> ApiResponse<Json<GetRegistrationsResp>> {
    let filter = RegistrationFilter {
        name: params.name,
        email: params.email,
        code: params.code,
    };

    let (registrations, total) = state
        .registrations
        .find(&filter, params.pagination.page(), params.pagination.limit())
        .await
        .into_response()?;

    Ok(Json(GetRegistrationsResp {
        content: registrations
            .into_iter()
            .map(RegistrationResp::from)
            .collect(),
        page: params.pagination.page(),
        limit: params.pagination.limit(),
        total_elements: total,
    }))
}
