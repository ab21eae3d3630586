//! Persistence module split across logical submodules.

mod connection;
mod students;

pub use connection::{ensure_schema, ensure_schema_at};
pub use students::{
    create_student, delete_student, fetch_students, update_student, StoreError,
};
