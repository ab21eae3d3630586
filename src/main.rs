//! Binary entry point that glues the SQLite-backed roster to the TUI: bring
//! up the database, hydrate the initial controller state, and drive the
//! event loop until the user exits.
use student_roster_manager::{ensure_schema, fetch_students, run_app, App, Controller};

/// Initialize persistence, load the roster, and launch the event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for
/// example an unwritable working directory) to the terminal instead of
/// crashing silently.
fn main() -> anyhow::Result<()> {
    let conn = ensure_schema()?;
    let students = fetch_students(&conn)?;

    let mut app = App::new(Controller::new(conn, students));
    run_app(&mut app)
}
