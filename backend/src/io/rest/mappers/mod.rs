pub mod patient_mapper;
