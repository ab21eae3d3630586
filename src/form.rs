//! In-memory state for the student entry form. The struct only tracks text
//! and focus; rendering and persistence live in other layers, which keeps
//! this state drivable without any terminal attached.

use crate::models::{Student, StudentInput};

/// Fields available within the student form.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum StudentField {
    Name,
    RollNumber,
    StudentClass,
    StudentYear,
}

impl Default for StudentField {
    fn default() -> Self {
        StudentField::Name
    }
}

impl StudentField {
    /// Every field in the order the form presents them.
    pub const ALL: [StudentField; 4] = [
        StudentField::Name,
        StudentField::RollNumber,
        StudentField::StudentClass,
        StudentField::StudentYear,
    ];

    /// Label rendered next to the field's value.
    pub fn label(self) -> &'static str {
        match self {
            StudentField::Name => "Name",
            StudentField::RollNumber => "Roll Number",
            StudentField::StudentClass => "Class",
            StudentField::StudentYear => "Year",
        }
    }
}

/// The four entry fields plus the focus marker.
#[derive(Default, Clone)]
pub struct StudentForm {
    pub name: String,
    pub roll_number: String,
    pub student_class: String,
    pub student_year: String,
    pub active: StudentField,
}

impl StudentForm {
    /// Copy an existing row into the fields when the user picks it for
    /// editing. Focus returns to the name field.
    pub fn load(&mut self, student: &Student) {
        self.name = student.name.clone();
        self.roll_number = student.roll_number.clone();
        self.student_class = student.student_class.clone();
        self.student_year = student.student_year.clone();
        self.active = StudentField::Name;
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.roll_number.clear();
        self.student_class.clear();
        self.student_year.clear();
        self.active = StudentField::Name;
    }

    /// Move focus to the next field, wrapping from year back to name.
    pub fn next_field(&mut self) {
        self.active = match self.active {
            StudentField::Name => StudentField::RollNumber,
            StudentField::RollNumber => StudentField::StudentClass,
            StudentField::StudentClass => StudentField::StudentYear,
            StudentField::StudentYear => StudentField::Name,
        };
    }

    /// Move focus to the previous field.
    pub fn prev_field(&mut self) {
        self.active = match self.active {
            StudentField::Name => StudentField::StudentYear,
            StudentField::RollNumber => StudentField::Name,
            StudentField::StudentClass => StudentField::RollNumber,
            StudentField::StudentYear => StudentField::StudentClass,
        };
    }

    /// Append a character to the active field. Control characters are
    /// rejected so stray escape sequences never end up in the data.
    pub fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value_mut(self.active).push(ch);
        true
    }

    /// Remove the last character from the active field.
    pub fn backspace(&mut self) {
        self.value_mut(self.active).pop();
    }

    /// Current text of the requested field.
    pub fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::RollNumber => &self.roll_number,
            StudentField::StudentClass => &self.student_class,
            StudentField::StudentYear => &self.student_year,
        }
    }

    fn value_mut(&mut self, field: StudentField) -> &mut String {
        match field {
            StudentField::Name => &mut self.name,
            StudentField::RollNumber => &mut self.roll_number,
            StudentField::StudentClass => &mut self.student_class,
            StudentField::StudentYear => &mut self.student_year,
        }
    }

    /// Trimmed values ready for persistence, or `None` when any field is
    /// empty. The year stays whatever text was typed; the store keeps it
    /// uncoerced.
    pub fn validated(&self) -> Option<StudentInput> {
        let name = self.name.trim();
        let roll_number = self.roll_number.trim();
        let student_class = self.student_class.trim();
        let student_year = self.student_year.trim();

        if name.is_empty()
            || roll_number.is_empty()
            || student_class.is_empty()
            || student_year.is_empty()
        {
            return None;
        }

        Some(StudentInput {
            name: name.to_string(),
            roll_number: roll_number.to_string(),
            student_class: student_class.to_string(),
            student_year: student_year.to_string(),
        })
    }
}
