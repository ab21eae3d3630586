use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use student_roster_manager::db::{
    create_student, delete_student, ensure_schema_at, fetch_students, update_student, StoreError,
};
use student_roster_manager::models::StudentInput;

fn scratch_db(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir.join("students.db")
}

fn input(name: &str, roll: &str, class: &str, year: &str) -> StudentInput {
    StudentInput {
        name: name.to_string(),
        roll_number: roll.to_string(),
        student_class: class.to_string(),
        student_year: year.to_string(),
    }
}

#[test]
fn schema_init_is_idempotent() {
    let db = scratch_db("roster-schema-idempotent");
    let conn = ensure_schema_at(&db).expect("first init");
    create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("insert");
    drop(conn);

    let conn = ensure_schema_at(&db).expect("second init");
    let rows = fetch_students(&conn).expect("fetch after re-init");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].roll_number, "R1");
}

#[test]
fn insert_assigns_id_and_lists_row() {
    let conn = ensure_schema_at(&scratch_db("roster-insert")).expect("init");

    let created = create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("insert");
    assert_eq!(created.id, 1);

    let rows = fetch_students(&conn).expect("fetch");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].roll_number, "R1");
    assert_eq!(rows[0].student_class, "10A");
    assert_eq!(rows[0].student_year, "2024");
}

#[test]
fn duplicate_roll_number_is_rejected() {
    let conn = ensure_schema_at(&scratch_db("roster-duplicate")).expect("init");

    create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("first insert");
    let err = create_student(&conn, &input("Bob", "R1", "10B", "2024"))
        .expect_err("second insert with the same roll number");
    assert!(matches!(err, StoreError::DuplicateRoll));
    assert_eq!(err.to_string(), "Roll Number must be unique!");

    let rows = fetch_students(&conn).expect("fetch");
    assert_eq!(rows.len(), 1, "the failed insert must not add a row");
    assert_eq!(rows[0].name, "Alice");
}

#[test]
fn update_replaces_fields_in_place() {
    let conn = ensure_schema_at(&scratch_db("roster-update")).expect("init");

    let alice = create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("insert");
    let updated = update_student(&conn, alice.id, &input("Alicia", "R1", "10B", "2025"))
        .expect("update");
    assert_eq!(updated, 1);

    let rows = fetch_students(&conn).expect("fetch");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, alice.id);
    assert_eq!(rows[0].name, "Alicia");
    assert_eq!(rows[0].student_class, "10B");
    assert_eq!(rows[0].student_year, "2025");
}

#[test]
fn update_to_taken_roll_number_is_rejected() {
    let conn = ensure_schema_at(&scratch_db("roster-update-duplicate")).expect("init");

    create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("insert alice");
    let bob = create_student(&conn, &input("Bob", "R2", "10A", "2024")).expect("insert bob");

    let err = update_student(&conn, bob.id, &input("Bob", "R1", "10A", "2024"))
        .expect_err("update onto a taken roll number");
    assert!(matches!(err, StoreError::DuplicateRoll));

    let rows = fetch_students(&conn).expect("fetch");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].roll_number, "R2", "the failed update must not stick");
}

#[test]
fn update_of_missing_id_is_a_silent_noop() {
    let conn = ensure_schema_at(&scratch_db("roster-update-missing")).expect("init");

    create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("insert");
    let updated = update_student(&conn, 999, &input("Ghost", "R9", "10Z", "2024"))
        .expect("update of an absent id");
    assert_eq!(updated, 0);

    let rows = fetch_students(&conn).expect("fetch");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Alice");
}

#[test]
fn delete_removes_row() {
    let conn = ensure_schema_at(&scratch_db("roster-delete")).expect("init");

    let alice = create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("insert");
    let deleted = delete_student(&conn, alice.id).expect("delete");
    assert_eq!(deleted, 1);

    let rows = fetch_students(&conn).expect("fetch");
    assert!(rows.is_empty());
}

#[test]
fn delete_of_missing_id_is_a_silent_noop() {
    let conn = ensure_schema_at(&scratch_db("roster-delete-missing")).expect("init");

    let deleted = delete_student(&conn, 42).expect("delete of an absent id");
    assert_eq!(deleted, 0);
}

#[test]
fn rows_come_back_ordered_by_id() {
    let conn = ensure_schema_at(&scratch_db("roster-ordering")).expect("init");

    create_student(&conn, &input("Alice", "R1", "10A", "2024")).expect("insert");
    let bob = create_student(&conn, &input("Bob", "R2", "10A", "2024")).expect("insert");
    create_student(&conn, &input("Cara", "R3", "10B", "2024")).expect("insert");
    delete_student(&conn, bob.id).expect("delete the middle row");
    create_student(&conn, &input("Dana", "R4", "10B", "2024")).expect("insert");

    let ids: Vec<i64> = fetch_students(&conn)
        .expect("fetch")
        .iter()
        .map(|s| s.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}

#[test]
fn year_is_stored_as_given() {
    let conn = ensure_schema_at(&scratch_db("roster-year-text")).expect("init");

    create_student(&conn, &input("Alice", "R1", "10A", "2024/25")).expect("insert");
    let rows = fetch_students(&conn).expect("fetch");
    assert_eq!(rows[0].student_year, "2024/25");
}
