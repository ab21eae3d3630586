//! Mediates between user actions and the record store. Commands arrive from
//! whatever front-end is attached, the controller validates and persists,
//! and the displayed row list is rebuilt from storage after every mutation
//! so it always reflects committed state.

use rusqlite::Connection;
use thiserror::Error;

use crate::db::{create_student, delete_student, fetch_students, update_student, StoreError};
use crate::form::StudentForm;
use crate::models::Student;

/// Actions the presentation layer can dispatch against the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Update,
    Delete,
    Clear,
    /// Copy the row with this id into the form and remember it as the
    /// current selection.
    Select(i64),
    Refresh,
}

/// Outcomes a command can fail with. The display strings double as the
/// exact text shown to the user.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("All fields are required!")]
    Validation,
    #[error("Roll Number must be unique!")]
    DuplicateRoll,
    #[error("Please select a student to {0}!")]
    NoSelection(&'static str),
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ControllerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateRoll => ControllerError::DuplicateRoll,
            other => ControllerError::Store(other),
        }
    }
}

/// Owns the form state, the displayed rows, and the current selection. The
/// persisted table is the sole source of truth; everything held here is a
/// disposable cache of the last query result and the last selection.
pub struct Controller {
    conn: Connection,
    form: StudentForm,
    students: Vec<Student>,
    selected: Option<i64>,
}

impl Controller {
    pub fn new(conn: Connection, students: Vec<Student>) -> Self {
        Self {
            conn,
            form: StudentForm::default(),
            students,
            selected: None,
        }
    }

    /// Rows as last read from the store, ordered by id.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn form(&self) -> &StudentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StudentForm {
        &mut self.form
    }

    /// Id of the row whose values were last copied into the form.
    pub fn selection(&self) -> Option<i64> {
        self.selected
    }

    /// Execute a command. `Ok(Some(text))` carries a success notice for the
    /// user; `Ok(None)` means the command completed without one. Recoverable
    /// failures come back as [`ControllerError`] and leave the form and the
    /// store untouched.
    pub fn apply(&mut self, command: Command) -> Result<Option<&'static str>, ControllerError> {
        match command {
            Command::Add => {
                let input = self.form.validated().ok_or(ControllerError::Validation)?;
                // The uniqueness check lives in the store; a duplicate roll
                // number comes back before the form is cleared, so the user
                // keeps their input.
                create_student(&self.conn, &input)?;
                self.form.clear();
                self.selected = None;
                self.refresh()?;
                Ok(Some("Student added successfully!"))
            }
            Command::Update => {
                let id = self
                    .selected
                    .ok_or(ControllerError::NoSelection("update"))?;
                let input = self.form.validated().ok_or(ControllerError::Validation)?;
                update_student(&self.conn, id, &input)?;
                self.form.clear();
                self.selected = None;
                self.refresh()?;
                Ok(Some("Student updated successfully!"))
            }
            Command::Delete => {
                let id = self
                    .selected
                    .ok_or(ControllerError::NoSelection("delete"))?;
                delete_student(&self.conn, id)?;
                // The fields stay as they are; only the selection goes away
                // with the row.
                self.selected = None;
                self.refresh()?;
                Ok(Some("Student deleted successfully!"))
            }
            Command::Clear => {
                self.form.clear();
                Ok(None)
            }
            Command::Select(id) => {
                if let Some(student) = self.students.iter().find(|s| s.id == id) {
                    let student = student.clone();
                    self.form.load(&student);
                    self.selected = Some(id);
                }
                Ok(None)
            }
            Command::Refresh => {
                self.refresh()?;
                Ok(None)
            }
        }
    }

    fn refresh(&mut self) -> Result<(), StoreError> {
        self.students = fetch_students(&self.conn)?;
        Ok(())
    }
}
