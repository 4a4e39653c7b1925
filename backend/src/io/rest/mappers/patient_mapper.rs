use serde_json::Value;
use shared::{Patient as SharedPatient, PatientPatch, PatientRequest};

use crate::domain::models::patient::{FieldChange, NewPatient, Patient as DomainPatient, PatientField};
use crate::domain::validation::{validate_field, PatientValidationError};

/// Mapper to convert between shared patient DTOs and domain models.
pub struct PatientMapper;

impl PatientMapper {
    /// Converts a domain Patient to a shared Patient DTO.
    pub fn to_dto(domain: DomainPatient) -> SharedPatient {
        SharedPatient {
            id: domain.id,
            surname: domain.surname,
            name: domain.name,
            middle_name: domain.middle_name,
            symptoms: domain.symptoms,
            is_having_trip_abroad: domain.is_having_trip_abroad,
            contact_with_patients: domain.contact_with_patients,
        }
    }

    pub fn to_dto_list(domain_patients: Vec<DomainPatient>) -> Vec<SharedPatient> {
        domain_patients.into_iter().map(Self::to_dto).collect()
    }

    /// Validates a create/replace body and converts it to unsaved patient data.
    ///
    /// Fields are checked in declaration order and the first failure is returned.
    pub fn to_new_patient(request: PatientRequest) -> Result<NewPatient, PatientValidationError> {
        for field in PatientField::ALL {
            validate_field(field, Self::request_value(&request, field))?;
        }

        Ok(NewPatient {
            surname: request.surname.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            middle_name: request.middle_name,
            symptoms: request.symptoms,
            is_having_trip_abroad: request.is_having_trip_abroad,
            contact_with_patients: request.contact_with_patients,
        })
    }

    /// Validates a patch body and converts it to column changes.
    ///
    /// Keys must name a writable field, values must be strings or null, and
    /// each value must satisfy its field's rules. Entries are checked in the
    /// order the client sent them and the first failure is returned.
    pub fn to_field_changes(patch: &PatientPatch) -> Result<Vec<FieldChange>, PatientValidationError> {
        let mut changes = Vec::with_capacity(patch.len());

        for (key, value) in patch {
            let field = match PatientField::from_json_name(key) {
                Some(field) => field,
                None if key == "id" => return Err(PatientValidationError::ReadOnly(key.clone())),
                None => return Err(PatientValidationError::UnknownField(key.clone())),
            };

            let value = match value {
                Value::Null => None,
                Value::String(text) => Some(text.clone()),
                _ => return Err(PatientValidationError::NotAString(key.clone())),
            };

            validate_field(field, value.as_deref())?;
            changes.push(FieldChange { field, value });
        }

        Ok(changes)
    }

    fn request_value(request: &PatientRequest, field: PatientField) -> Option<&str> {
        match field {
            PatientField::Surname => request.surname.as_deref(),
            PatientField::Name => request.name.as_deref(),
            PatientField::MiddleName => request.middle_name.as_deref(),
            PatientField::Symptoms => request.symptoms.as_deref(),
            PatientField::IsHavingTripAbroad => request.is_having_trip_abroad.as_deref(),
            PatientField::ContactWithPatients => request.contact_with_patients.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patch_from(value: Value) -> PatientPatch {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {}", other),
        }
    }

    #[test]
    fn test_valid_request_maps_all_fields() {
        let request = PatientRequest {
            surname: Some("Ivanov".to_string()),
            name: Some("Petr".to_string()),
            middle_name: None,
            symptoms: Some("cough".to_string()),
            is_having_trip_abroad: Some("no".to_string()),
            contact_with_patients: None,
        };

        let patient = PatientMapper::to_new_patient(request).unwrap();
        assert_eq!(patient.surname, "Ivanov");
        assert_eq!(patient.name, "Petr");
        assert_eq!(patient.symptoms.as_deref(), Some("cough"));
        assert_eq!(patient.is_having_trip_abroad.as_deref(), Some("no"));
        assert_eq!(patient.contact_with_patients, None);
    }

    #[test]
    fn test_request_reports_first_failing_field() {
        let request = PatientRequest {
            surname: Some(" ".to_string()),
            name: None,
            ..Default::default()
        };

        let error = PatientMapper::to_new_patient(request).unwrap_err();
        assert_eq!(error.to_string(), "surname: must not be blank");

        let request = PatientRequest {
            surname: Some("Ivanov".to_string()),
            ..Default::default()
        };
        let error = PatientMapper::to_new_patient(request).unwrap_err();
        assert_eq!(error.to_string(), "name: must not be blank");
    }

    #[test]
    fn test_patch_maps_strings_and_nulls() {
        let patch = patch_from(json!({"symptoms": "cough", "middleName": null}));

        let changes = PatientMapper::to_field_changes(&patch).unwrap();
        assert_eq!(changes.len(), 2);
        assert!(changes.contains(&FieldChange::set(PatientField::Symptoms, "cough")));
        assert!(changes.contains(&FieldChange::clear(PatientField::MiddleName)));
    }

    #[test]
    fn test_patch_rejects_unknown_and_readonly_keys() {
        let error = PatientMapper::to_field_changes(&patch_from(json!({"age": "40"}))).unwrap_err();
        assert_eq!(error, PatientValidationError::UnknownField("age".to_string()));

        let error = PatientMapper::to_field_changes(&patch_from(json!({"id": "5"}))).unwrap_err();
        assert_eq!(error.to_string(), "id: field is read-only");

        // Column spellings are not accepted as keys
        let error = PatientMapper::to_field_changes(&patch_from(json!({"middle_name": "A"}))).unwrap_err();
        assert_eq!(error.field(), "middle_name");
    }

    #[test]
    fn test_patch_rejects_non_string_values() {
        let error =
            PatientMapper::to_field_changes(&patch_from(json!({"isHavingTripAbroad": true}))).unwrap_err();
        assert_eq!(error.to_string(), "isHavingTripAbroad: must be a string");
    }

    #[test]
    fn test_patch_applies_field_rules() {
        let error = PatientMapper::to_field_changes(&patch_from(json!({"surname": ""}))).unwrap_err();
        assert_eq!(error.to_string(), "surname: must not be blank");

        let error = PatientMapper::to_field_changes(&patch_from(json!({"name": null}))).unwrap_err();
        assert_eq!(error.to_string(), "name: must not be blank");
    }

    #[test]
    fn test_patch_reports_first_failure_in_body_order() {
        let patch: PatientPatch = serde_json::from_str(r#"{"surname": "", "name": ""}"#).unwrap();
        let error = PatientMapper::to_field_changes(&patch).unwrap_err();
        assert_eq!(error.to_string(), "surname: must not be blank");

        let patch: PatientPatch = serde_json::from_str(r#"{"symptoms": 1, "age": "40"}"#).unwrap();
        let error = PatientMapper::to_field_changes(&patch).unwrap_err();
        assert_eq!(error.to_string(), "symptoms: must be a string");
    }

    #[test]
    fn test_empty_patch_has_no_changes() {
        let changes = PatientMapper::to_field_changes(&PatientPatch::new()).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_to_dto_copies_every_field() {
        let domain = NewPatient {
            surname: "Ivanov".to_string(),
            name: "Petr".to_string(),
            middle_name: Some("Ivanovich".to_string()),
            symptoms: Some("cough".to_string()),
            is_having_trip_abroad: Some("no".to_string()),
            contact_with_patients: Some("yes".to_string()),
        }
        .with_id(4);

        let dto = PatientMapper::to_dto(domain);
        assert_eq!(dto.id, 4);
        assert_eq!(dto.middle_name.as_deref(), Some("Ivanovich"));
        assert_eq!(dto.contact_with_patients.as_deref(), Some("yes"));
    }
}
