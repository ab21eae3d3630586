//! Domain types that mirror the SQLite schema and travel between the store,
//! the controller, and the terminal front-end. These stay light-weight data
//! holders so the other layers can focus on persistence and presentation.

#[derive(Debug, Clone, PartialEq, Eq)]
/// One persisted roster row.
pub struct Student {
    /// Primary key assigned by the database. Edit and delete flows bubble
    /// this id back to the persistence layer.
    pub id: i64,
    /// Display name of the student.
    pub name: String,
    /// Institution-assigned identifier, unique across the whole roster and
    /// distinct from the system-generated `id`.
    pub roll_number: String,
    /// Class or section label, free text.
    pub student_class: String,
    /// Enrollment year. Kept as raw text; the store applies no numeric
    /// coercion to it.
    pub student_year: String,
}

#[derive(Debug, Clone)]
/// Validated field values for an insert or update, produced by the form once
/// the non-empty check has passed.
pub struct StudentInput {
    pub name: String,
    pub roll_number: String,
    pub student_class: String,
    pub student_year: String,
}
