//! # Domain Module
//!
//! Business-level operations on patient records.
//!
//! - **models**: the `Patient` record, unsaved `NewPatient` data, the closed
//!   `PatientField` catalogue and `FieldChange` for partial updates
//! - **validation**: per-field rules (non-blank, maximum length)
//! - **patient_service**: find, save, delete, replace and patch
//!
//! ## Business Rules
//!
//! - Surname and name must not be blank
//! - Ids are assigned by storage and never written by clients
//! - Replacing a patient deletes the row and inserts a new one, so the id changes
//! - A missing patient is reported as absence, never as an error

pub mod models;
pub mod patient_service;
pub mod validation;

pub use models::patient::{FieldChange, NewPatient, Patient, PatientField};
pub use patient_service::PatientService;
pub use validation::{validate_field, PatientValidationError};
