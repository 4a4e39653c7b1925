use serde::{Deserialize, Serialize};

/// A patient record as returned by the API.
///
/// Field names are camelCase on the wire (`middleName`, `isHavingTripAbroad`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Server-generated identifier, never accepted from clients
    pub id: i64,
    pub surname: String,
    pub name: String,
    pub middle_name: Option<String>,
    /// Free-text description of symptoms
    pub symptoms: Option<String>,
    /// Boolean-like answer stored as text ("yes", "no", "true", ...)
    pub is_having_trip_abroad: Option<String>,
    /// Boolean-like answer stored as text
    pub contact_with_patients: Option<String>,
}

/// Body of `POST /patient` and `PUT /patient/{id}`.
///
/// Every field is optional at the deserialization level so that a missing
/// `surname` is reported as a validation error rather than a JSON error.
/// Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientRequest {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub middle_name: Option<String>,
    pub symptoms: Option<String>,
    pub is_having_trip_abroad: Option<String>,
    pub contact_with_patients: Option<String>,
}

/// Body of `PATCH /patient/{id}`: field name to new value.
pub type PatientPatch = serde_json::Map<String, serde_json::Value>;
