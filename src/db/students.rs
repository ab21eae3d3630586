use rusqlite::{params, Connection, Error as SqlError, ErrorCode};
use thiserror::Error;

use crate::models::{Student, StudentInput};

/// Failures surfaced by the roster table operations. The duplicate variant is
/// the one recoverable case callers are expected to handle; everything else
/// wraps the underlying SQLite error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Roll Number must be unique!")]
    DuplicateRoll,
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
}

/// Retrieve every student ordered by id ascending. The query doubles as the
/// single source of truth for how rows are ordered in the table view.
pub fn fetch_students(conn: &Connection) -> Result<Vec<Student>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, roll_number, student_class, student_year
         FROM students ORDER BY id",
    )?;

    let students = stmt
        .query_map([], |row| {
            Ok(Student {
                id: row.get(0)?,
                name: row.get(1)?,
                roll_number: row.get(2)?,
                student_class: row.get(3)?,
                student_year: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(students)
}

/// Insert a new student row, returning the hydrated struct so the caller can
/// use the assigned id without re-querying.
pub fn create_student(conn: &Connection, input: &StudentInput) -> Result<Student, StoreError> {
    conn.execute(
        "INSERT INTO students (name, roll_number, student_class, student_year)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            input.name,
            input.roll_number,
            input.student_class,
            input.student_year
        ],
    )
    .map_err(map_unique_constraint)?;

    let id = conn.last_insert_rowid();
    Ok(Student {
        id,
        name: input.name.clone(),
        roll_number: input.roll_number.clone(),
        student_class: input.student_class.clone(),
        student_year: input.student_year.clone(),
    })
}

/// Replace all mutable fields of the row matching `id`. Returns the number of
/// rows affected; zero means the id no longer exists, which callers treat as
/// a no-op rather than an error. A roll number collision with another row
/// surfaces as [`StoreError::DuplicateRoll`], the same as on insert.
pub fn update_student(
    conn: &Connection,
    id: i64,
    input: &StudentInput,
) -> Result<usize, StoreError> {
    let updated = conn
        .execute(
            "UPDATE students
             SET name = ?1, roll_number = ?2, student_class = ?3, student_year = ?4
             WHERE id = ?5",
            params![
                input.name,
                input.roll_number,
                input.student_class,
                input.student_year,
                id
            ],
        )
        .map_err(map_unique_constraint)?;

    Ok(updated)
}

/// Remove the row matching `id`. Zero rows affected means it was already
/// gone; like updates, that is not an error.
pub fn delete_student(conn: &Connection, id: i64) -> Result<usize, StoreError> {
    let deleted = conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;
    Ok(deleted)
}

/// Coerce SQLite constraint errors into the typed duplicate variant. The roll
/// number uniqueness constraint is the only one the schema declares beyond
/// NOT NULL, and the controller never binds empty values.
fn map_unique_constraint(err: SqlError) -> StoreError {
    if matches!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation)) {
        StoreError::DuplicateRoll
    } else {
        StoreError::Sql(err)
    }
}
