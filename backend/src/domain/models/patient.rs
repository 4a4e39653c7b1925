/// A stored patient record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: i64,
    pub surname: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub symptoms: Option<String>,
    pub is_having_trip_abroad: Option<String>,
    pub contact_with_patients: Option<String>,
}

/// Patient data that has not been stored yet, so it has no id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPatient {
    pub surname: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub symptoms: Option<String>,
    pub is_having_trip_abroad: Option<String>,
    pub contact_with_patients: Option<String>,
}

impl NewPatient {
    pub fn new(surname: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attach the id the storage layer assigned on insert.
    pub fn with_id(self, id: i64) -> Patient {
        Patient {
            id,
            surname: self.surname,
            name: self.name,
            middle_name: self.middle_name,
            symptoms: self.symptoms,
            is_having_trip_abroad: self.is_having_trip_abroad,
            contact_with_patients: self.contact_with_patients,
        }
    }
}

/// The closed set of patient fields a client may write.
///
/// `id` is deliberately absent: it is assigned by storage and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    Surname,
    Name,
    MiddleName,
    Symptoms,
    IsHavingTripAbroad,
    ContactWithPatients,
}

impl PatientField {
    /// All writable fields in declaration order
    pub const ALL: [PatientField; 6] = [
        PatientField::Surname,
        PatientField::Name,
        PatientField::MiddleName,
        PatientField::Symptoms,
        PatientField::IsHavingTripAbroad,
        PatientField::ContactWithPatients,
    ];

    /// Name used in JSON bodies and validation messages
    pub fn json_name(&self) -> &'static str {
        match self {
            PatientField::Surname => "surname",
            PatientField::Name => "name",
            PatientField::MiddleName => "middleName",
            PatientField::Symptoms => "symptoms",
            PatientField::IsHavingTripAbroad => "isHavingTripAbroad",
            PatientField::ContactWithPatients => "contactWithPatients",
        }
    }

    /// Column name in the `patient` table
    pub fn column(&self) -> &'static str {
        match self {
            PatientField::Surname => "surname",
            PatientField::Name => "name",
            PatientField::MiddleName => "middle_name",
            PatientField::Symptoms => "symptoms",
            PatientField::IsHavingTripAbroad => "is_having_trip_abroad",
            PatientField::ContactWithPatients => "contact_with_patients",
        }
    }

    pub fn from_json_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.json_name() == name)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, PatientField::Surname | PatientField::Name)
    }

    /// Maximum length in characters
    pub fn max_length(&self) -> usize {
        match self {
            PatientField::Surname | PatientField::Name | PatientField::MiddleName => 100,
            PatientField::Symptoms => 1000,
            PatientField::IsHavingTripAbroad | PatientField::ContactWithPatients => 50,
        }
    }
}

/// A single column assignment of a partial update. `None` clears the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: PatientField,
    pub value: Option<String>,
}

impl FieldChange {
    pub fn set(field: PatientField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: Some(value.into()),
        }
    }

    pub fn clear(field: PatientField) -> Self {
        Self { field, value: None }
    }
}
