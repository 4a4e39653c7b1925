//! # IO Module
//!
//! Translates HTTP requests into domain operations and domain results into
//! HTTP responses. Handlers validate input, call `PatientService` and map
//! outcomes to status codes:
//!
//! - validation failures become 400 with a `field: message` body
//! - absence becomes 404, never an error
//! - unexpected storage failures become 500

pub mod rest;

pub use rest::*;
