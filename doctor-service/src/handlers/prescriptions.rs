use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use service_core::{
    error::AppError,
    utils::{parse_object_id, ValidatedJson},
};

use crate::{dtos::PrescriptionBody, startup::AppState};

/// Service banner.
pub async fn index() -> &'static str {
    "doctorService"
}

/// Answer a query with a new prescription
#[utoipa::path(
    post,
    path = "/doctorService/{doctor_id}/{query_id}/prescription",
    params(
        ("doctor_id" = String, Path, description = "Doctor ObjectId"),
        ("query_id" = String, Path, description = "Query ObjectId")
    ),
    request_body = PrescriptionBody,
    responses(
        (status = 200, description = "Prescription created and linked to the query", body = crate::dtos::CreatePrescriptionResponse),
        (status = 400, description = "Malformed id or invalid body", body = crate::dtos::ErrorResponse),
        (status = 402, description = "Doctor or query not found", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Prescriptions"
)]
pub async fn create_prescription(
    State(state): State<AppState>,
    Path((doctor_id, query_id)): Path<(String, String)>,
    ValidatedJson(req): ValidatedJson<PrescriptionBody>,
) -> Result<impl IntoResponse, AppError> {
    let doctor_id = parse_object_id(&doctor_id)?;
    let query_id = parse_object_id(&query_id)?;

    let res = state
        .prescriptions
        .create(doctor_id, query_id, req.body)
        .await?;
    Ok(Json(res))
}

/// Replace a prescription's body
#[utoipa::path(
    patch,
    path = "/doctorService/{prescription_id}",
    params(("prescription_id" = String, Path, description = "Prescription ObjectId")),
    request_body = PrescriptionBody,
    responses(
        (status = 200, description = "Updated prescription", body = crate::dtos::UpdatePrescriptionResponse),
        (status = 400, description = "Malformed id or invalid body", body = crate::dtos::ErrorResponse),
        (status = 402, description = "Prescription not found", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Prescriptions"
)]
pub async fn update_prescription(
    State(state): State<AppState>,
    Path(prescription_id): Path<String>,
    ValidatedJson(req): ValidatedJson<PrescriptionBody>,
) -> Result<impl IntoResponse, AppError> {
    let prescription_id = parse_object_id(&prescription_id)?;

    let res = state
        .prescriptions
        .update(prescription_id, req.body)
        .await?;
    Ok(Json(res))
}

/// Unlink a prescription from its query and delete it
#[utoipa::path(
    delete,
    path = "/doctorService/{query_id}/{prescription_id}",
    params(
        ("query_id" = String, Path, description = "Query ObjectId"),
        ("prescription_id" = String, Path, description = "Prescription ObjectId")
    ),
    responses(
        (status = 200, description = "Query after the prescription was removed", body = crate::dtos::DeletePrescriptionResponse),
        (status = 400, description = "Malformed id", body = crate::dtos::ErrorResponse),
        (status = 402, description = "Prescription or query not found", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Prescriptions"
)]
pub async fn delete_prescription(
    State(state): State<AppState>,
    Path((query_id, prescription_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let query_id = parse_object_id(&query_id)?;
    let prescription_id = parse_object_id(&prescription_id)?;

    let res = state
        .prescriptions
        .delete(query_id, prescription_id)
        .await?;
    Ok(Json(res))
}

/// List every prescription
#[utoipa::path(
    get,
    path = "/doctorService/prescriptions",
    responses(
        (status = 200, description = "All prescriptions, unpaginated", body = Vec<crate::dtos::PrescriptionResponse>),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Prescriptions"
)]
pub async fn list_prescriptions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let prescriptions = state.prescriptions.list().await?;
    Ok(Json(prescriptions))
}
