use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

/// SQLite file created in the working directory on first run. Several code
/// paths (schema creation, tests, manual inspection) rely on the exact same
/// string.
const DB_FILE_NAME: &str = "students.db";

/// Ensure the database file exists in the working directory, create the
/// roster table if absent, and return a live connection. Any failure here is
/// fatal to startup.
pub fn ensure_schema() -> Result<Connection> {
    ensure_schema_at(Path::new(DB_FILE_NAME))
}

/// Same as [`ensure_schema`] but against an explicit path, so tests and
/// tooling can target a scratch database instead of the working directory.
///
/// Creating the table is idempotent; calling this on every startup leaves
/// existing rows and the table structure untouched.
pub fn ensure_schema_at(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create database directory")?;
        }
    }

    let conn = Connection::open(path).context("failed to open SQLite database")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            roll_number TEXT NOT NULL UNIQUE,
            student_class TEXT NOT NULL,
            student_year TEXT NOT NULL DEFAULT '2024'
        )",
        [],
    )
    .context("failed to create students table")?;

    Ok(conn)
}
