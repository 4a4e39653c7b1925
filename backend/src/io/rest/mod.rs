//! # REST API Interface Layer
//!
//! Axum handlers for the `/patient` resource and the mappers between the
//! `shared` DTOs and the domain models.

pub mod mappers;
pub mod patient_apis;

pub use patient_apis::*;
