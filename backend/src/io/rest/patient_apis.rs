//! # REST API for Patient Management
//!
//! Endpoints under `/patient` for listing, fetching, creating, replacing,
//! deleting and partially updating patients. Responses are plain text except
//! for the record and list endpoints, which return JSON.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info};

use crate::domain::PatientValidationError;
use crate::io::rest::mappers::patient_mapper::PatientMapper;
use crate::AppState;
use shared::{PatientPatch, PatientRequest};

pub const PATIENT_NOT_FOUND: &str = "Patient not found";
pub const PATIENT_REMOVED: &str = "Patient removed successfully";
pub const PATIENT_CHANGED: &str = "Successfully changed";

fn validation_failed(e: PatientValidationError) -> Response {
    info!("Patient not valid: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string()).into_response()
}

/// Bodies that fail to parse are a client error like any other invalid input
fn unreadable_body(rejection: JsonRejection) -> Response {
    info!("Unreadable request body: {}", rejection.body_text());
    (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
}

fn internal_error(context: &str, e: anyhow::Error) -> Response {
    error!("{}: {:#}", context, e);
    (StatusCode::INTERNAL_SERVER_ERROR, context.to_string()).into_response()
}

/// List all patients. An empty table is answered with 404 and an empty list.
pub async fn list_patients(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /patient/all");

    match state.patient_service.find_all().await {
        Ok(patients) => {
            let status = if patients.is_empty() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (status, Json(PatientMapper::to_dto_list(patients))).into_response()
        }
        Err(e) => internal_error("Error listing patients", e),
    }
}

/// Get a patient by id
pub async fn get_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /patient/{}", patient_id);

    match state.patient_service.find(patient_id).await {
        Ok(Some(patient)) => (StatusCode::OK, Json(PatientMapper::to_dto(patient))).into_response(),
        Ok(None) => {
            info!("Patient with id {} not found", patient_id);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => internal_error("Error retrieving patient", e),
    }
}

/// Create a patient. Success is 200 with the generated id in the body.
pub async fn create_patient(
    State(state): State<AppState>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return unreadable_body(rejection),
    };
    info!("POST /patient - request: {:?}", request);

    let patient = match PatientMapper::to_new_patient(request) {
        Ok(patient) => patient,
        Err(e) => return validation_failed(e),
    };

    match state.patient_service.save_patient(&patient).await {
        Ok(patient_id) => {
            let message = format!("Patient created with id {}", patient_id);
            info!("{}", message);
            (StatusCode::OK, message).into_response()
        }
        Err(e) => internal_error("Error creating patient", e),
    }
}

/// Delete a patient
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /patient/{}", patient_id);

    match state.patient_service.delete(patient_id).await {
        Ok(0) => {
            info!("Patient with id {} not found", patient_id);
            (StatusCode::NOT_FOUND, PATIENT_NOT_FOUND).into_response()
        }
        Ok(_) => {
            info!("{}", PATIENT_REMOVED);
            (StatusCode::OK, PATIENT_REMOVED).into_response()
        }
        Err(e) => internal_error("Error deleting patient", e),
    }
}

/// Replace a patient. The body names the id of the re-inserted row, which is new.
pub async fn replace_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    payload: Result<Json<PatientRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return unreadable_body(rejection),
    };
    info!("PUT /patient/{} - request: {:?}", patient_id, request);

    let patient = match PatientMapper::to_new_patient(request) {
        Ok(patient) => patient,
        Err(e) => return validation_failed(e),
    };

    match state.patient_service.replace(patient_id, &patient).await {
        Ok(Some(new_id)) => {
            let message = format!("Patient updated with id {}", new_id);
            info!("{}", message);
            (StatusCode::OK, message).into_response()
        }
        Ok(None) => {
            info!("Patient with id {} not found", patient_id);
            (StatusCode::NOT_FOUND, PATIENT_NOT_FOUND).into_response()
        }
        Err(e) => internal_error("Error updating patient", e),
    }
}

/// Change the supplied fields of a patient, leaving the others untouched
pub async fn patch_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    payload: Result<Json<PatientPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return unreadable_body(rejection),
    };
    info!("PATCH /patient/{} - changes: {:?}", patient_id, patch);

    let changes = match PatientMapper::to_field_changes(&patch) {
        Ok(changes) => changes,
        Err(e) => return validation_failed(e),
    };

    match state.patient_service.patch(patient_id, &changes).await {
        Ok(true) => {
            info!("{}", PATIENT_CHANGED);
            (StatusCode::OK, PATIENT_CHANGED).into_response()
        }
        // Failed updates are reported as not found as well
        Ok(false) => {
            info!("Patient with id {} not found", patient_id);
            (StatusCode::NOT_FOUND, PATIENT_NOT_FOUND).into_response()
        }
        Err(e) => internal_error("Error changing patient", e),
    }
}
