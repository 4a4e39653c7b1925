use anyhow::Result;
use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, Sqlite};

use crate::domain::models::patient::{FieldChange, NewPatient, Patient};
use crate::storage::connection::DbConnection;

/// Repository for the `patient` table.
///
/// Every method issues a single autocommitted statement.
#[derive(Clone)]
pub struct PatientRepository {
    db: DbConnection,
}

impl PatientRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_patient(row: &SqliteRow) -> Result<Patient, sqlx::Error> {
        Ok(Patient {
            id: row.try_get("patient_id")?,
            surname: row.try_get("surname")?,
            name: row.try_get("name")?,
            middle_name: row.try_get("middle_name")?,
            symptoms: row.try_get("symptoms")?,
            is_having_trip_abroad: row.try_get("is_having_trip_abroad")?,
            contact_with_patients: row.try_get("contact_with_patients")?,
        })
    }

    /// List every patient ordered by id
    pub async fn list_all(&self) -> Result<Vec<Patient>> {
        let rows = sqlx::query(
            r#"
            SELECT patient_id, surname, name, middle_name, symptoms,
                   is_having_trip_abroad, contact_with_patients
            FROM patient
            ORDER BY patient_id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let patients = rows
            .iter()
            .map(Self::row_to_patient)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(patients)
    }

    /// Get a patient by id
    pub async fn get_by_id(&self, patient_id: i64) -> Result<Option<Patient>> {
        let row = sqlx::query(
            r#"
            SELECT patient_id, surname, name, middle_name, symptoms,
                   is_having_trip_abroad, contact_with_patients
            FROM patient
            WHERE patient_id = ?
            "#,
        )
        .bind(patient_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_patient(&r)?)),
            None => Ok(None),
        }
    }

    /// Insert a patient and return the id generated by the database
    pub async fn insert(&self, patient: &NewPatient) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO patient (surname, name, middle_name, symptoms,
                                 is_having_trip_abroad, contact_with_patients)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&patient.surname)
        .bind(&patient.name)
        .bind(&patient.middle_name)
        .bind(&patient.symptoms)
        .bind(&patient.is_having_trip_abroad)
        .bind(&patient.contact_with_patients)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Delete a patient by id. Returns the number of rows removed (0 or 1).
    pub async fn delete_by_id(&self, patient_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM patient WHERE patient_id = ?")
            .bind(patient_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Set exactly the given columns on one row.
    ///
    /// Column names come from `PatientField`, values are always bound.
    /// Returns the number of rows updated.
    pub async fn update_fields(&self, patient_id: i64, changes: &[FieldChange]) -> Result<u64> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE patient SET ");
        let mut assignments = builder.separated(", ");
        for change in changes {
            assignments.push(change.field.column());
            assignments.push_unseparated(" = ");
            assignments.push_bind_unseparated(change.value.clone());
        }
        builder.push(" WHERE patient_id = ");
        builder.push_bind(patient_id);

        let result = builder.build().execute(self.db.pool()).await?;
        Ok(result.rows_affected())
    }
}
