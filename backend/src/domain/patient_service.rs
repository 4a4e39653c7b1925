use anyhow::Result;
use tracing::{info, warn};

use crate::domain::models::patient::{FieldChange, NewPatient, Patient};
use crate::storage::{DbConnection, PatientRepository};

/// Service for managing patient records
#[derive(Clone)]
pub struct PatientService {
    repository: PatientRepository,
}

impl PatientService {
    /// Create a new PatientService
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: PatientRepository::new(db),
        }
    }

    /// List all patients
    pub async fn find_all(&self) -> Result<Vec<Patient>> {
        let patients = self.repository.list_all().await?;
        info!("Found {} patients", patients.len());
        Ok(patients)
    }

    /// Get a patient by id. A missing patient is `None`, not an error.
    pub async fn find(&self, patient_id: i64) -> Result<Option<Patient>> {
        let patient = self.repository.get_by_id(patient_id).await?;

        if patient.is_none() {
            warn!("Patient not found: {}", patient_id);
        }

        Ok(patient)
    }

    /// Store a new patient and return its generated id
    pub async fn save_patient(&self, patient: &NewPatient) -> Result<i64> {
        let patient_id = self.repository.insert(patient).await?;
        info!("Created patient {} {} with ID: {}", patient.surname, patient.name, patient_id);
        Ok(patient_id)
    }

    /// Delete a patient. Returns the number of removed rows (0 or 1).
    pub async fn delete(&self, patient_id: i64) -> Result<u64> {
        let deleted = self.repository.delete_by_id(patient_id).await?;
        info!("Deleted {} patient row(s) for ID: {}", deleted, patient_id);
        Ok(deleted)
    }

    /// Replace a patient by deleting the row and inserting `patient` as a new one.
    ///
    /// Returns `None` when no row existed under `patient_id`; nothing is inserted
    /// then. Otherwise returns the id of the new row, which differs from
    /// `patient_id`. The two statements are not atomic, so a concurrent reader
    /// can see the patient as missing in between.
    pub async fn replace(&self, patient_id: i64, patient: &NewPatient) -> Result<Option<i64>> {
        if self.repository.delete_by_id(patient_id).await? == 0 {
            warn!("Cannot replace missing patient: {}", patient_id);
            return Ok(None);
        }

        let new_id = self.repository.insert(patient).await?;
        info!("Replaced patient {} with new ID: {}", patient_id, new_id);
        Ok(Some(new_id))
    }

    /// Apply a partial update to an existing patient.
    ///
    /// Returns `false` when the patient does not exist or when the update
    /// statement fails; the latter is logged and not propagated.
    pub async fn patch(&self, patient_id: i64, changes: &[FieldChange]) -> Result<bool> {
        if self.find(patient_id).await?.is_none() {
            return Ok(false);
        }

        if changes.is_empty() {
            info!("Empty patch for patient {}, nothing to change", patient_id);
            return Ok(true);
        }

        match self.repository.update_fields(patient_id, changes).await {
            Ok(0) => {
                warn!("Patient {} disappeared before the update was applied", patient_id);
                Ok(false)
            }
            Ok(_) => {
                info!("Patched {} field(s) of patient {}", changes.len(), patient_id);
                Ok(true)
            }
            Err(e) => {
                warn!("Failed to patch patient {}: {:#}", patient_id, e);
                Ok(false)
            }
        }
    }
}
