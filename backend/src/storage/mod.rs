//! # Storage Module
//!
//! Persistence for patient records on top of SQLite through SQLx.
//!
//! - **connection**: owns the pool and bootstraps the `patient` table
//! - **patient_repository**: the SQL statements (select, insert, delete and
//!   the dynamic column update used by partial updates)
//!
//! No statement here runs inside an explicit transaction.

pub mod connection;
pub mod patient_repository;

pub use connection::DbConnection;
pub use patient_repository::PatientRepository;
