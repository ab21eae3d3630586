use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::controller::{Command, Controller};
use crate::form::{StudentField, StudentForm};

/// Footer space reserved for the selection hint and key instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Four field lines plus the surrounding border.
const FORM_HEIGHT: u16 = 6;
/// Rows skipped by PageUp/PageDown.
const PAGE_JUMP: isize = 5;

/// Holds a blocking notice plus its severity. Input is swallowed until the
/// user dismisses it.
struct Notice {
    text: String,
    kind: NoticeKind,
}

impl Notice {
    fn info<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }

    fn error<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Severity levels shown on the notice dialog.
enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    fn style(&self) -> Style {
        match self {
            NoticeKind::Info => Style::default().fg(Color::Green),
            NoticeKind::Error => Style::default().fg(Color::Red),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            NoticeKind::Info => "Success",
            NoticeKind::Error => "Error",
        }
    }
}

/// Central application state shared across the TUI. The controller does the
/// actual work; this wrapper tracks the table cursor and the pending notice.
pub struct App {
    controller: Controller,
    cursor: usize,
    notice: Option<Notice>,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            cursor: 0,
            notice: None,
        }
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub(crate) fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.notice.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return false;
        }

        match code {
            KeyCode::Esc => return true,
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-PAGE_JUMP),
            KeyCode::PageDown => self.move_cursor(PAGE_JUMP),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => {
                self.cursor = self.controller.students().len().saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(student) = self.controller.students().get(self.cursor) {
                    let id = student.id;
                    self.dispatch(Command::Select(id));
                }
            }
            KeyCode::Tab => self.controller.form_mut().next_field(),
            KeyCode::BackTab => self.controller.form_mut().prev_field(),
            KeyCode::Backspace => self.controller.form_mut().backspace(),
            KeyCode::Char(ch) => {
                self.controller.form_mut().push_char(ch);
            }
            _ => {}
        }

        false
    }

    pub(crate) fn handle_ctrl_a(&mut self) {
        if self.notice.is_none() {
            self.dispatch(Command::Add);
        }
    }

    pub(crate) fn handle_ctrl_u(&mut self) {
        if self.notice.is_none() {
            self.dispatch(Command::Update);
        }
    }

    pub(crate) fn handle_ctrl_d(&mut self) {
        if self.notice.is_none() {
            self.dispatch(Command::Delete);
        }
    }

    pub(crate) fn handle_ctrl_l(&mut self) {
        if self.notice.is_none() {
            self.dispatch(Command::Clear);
        }
    }

    /// Run a command through the controller and turn its outcome into a
    /// notice. Selection and refresh complete silently.
    fn dispatch(&mut self, command: Command) {
        match self.controller.apply(command) {
            Ok(Some(message)) => self.notice = Some(Notice::info(message)),
            Ok(None) => {}
            Err(err) => self.notice = Some(Notice::error(err.to_string())),
        }
        self.clamp_cursor();
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.controller.students().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = (self.cursor as isize + delta).clamp(0, len as isize - 1);
        self.cursor = next as usize;
    }

    fn clamp_cursor(&mut self) {
        let len = self.controller.students().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_title(frame, chunks[0]);
        self.draw_form(frame, chunks[1]);
        self.draw_table(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);

        if let Some(notice) = &self.notice {
            self.draw_notice(frame, area, notice);
        }
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Student Management System")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect) {
        let form = self.controller.form();
        let title = match self.controller.selection() {
            Some(id) => format!("Student Details (editing #{id})"),
            None => "Student Details".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);

        let lines: Vec<Line> = StudentField::ALL
            .iter()
            .map(|&field| field_line(form, field))
            .collect();
        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);

        // Park the terminal cursor at the end of the focused field so typing
        // has a visible insertion point. Skipped while a notice blocks input.
        if self.notice.is_none() {
            let row = StudentField::ALL
                .iter()
                .position(|&f| f == form.active)
                .unwrap_or(0) as u16;
            if inner.height > row {
                let label_width = form.active.label().len() as u16 + 2;
                let value_width = form.value(form.active).chars().count() as u16;
                let cursor_x = (inner.x + label_width + value_width)
                    .min(inner.right().saturating_sub(1));
                frame.set_cursor_position((cursor_x, inner.y + row));
            }
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let students = self.controller.students();
        let block = Block::default().borders(Borders::ALL).title("Students");

        if students.is_empty() {
            let message =
                Paragraph::new("No students yet. Fill in the form and press Ctrl+A to add one.")
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(block);
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(["ID", "Name", "Roll Number", "Class", "Year"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let rows = students.iter().map(|student| {
            Row::new(vec![
                student.id.to_string(),
                student.name.clone(),
                student.roll_number.clone(),
                student.student_class.clone(),
                student.student_year.clone(),
            ])
        });
        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(34),
            Constraint::Percentage(26),
            Constraint::Percentage(20),
            Constraint::Length(8),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default();
        state.select(Some(self.cursor.min(students.len() - 1)));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let selection_line = match self.controller.selection() {
            Some(id) => Line::from(format!(
                "Editing student #{id}. Ctrl+U saves the changes."
            )),
            None => Line::from("Press Enter on a row to load it into the form."),
        };

        let paragraph =
            Paragraph::new(vec![selection_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::styled("[Ctrl+A]", key_style),
            Span::raw(" Add   "),
            Span::styled("[Ctrl+U]", key_style),
            Span::raw(" Update   "),
            Span::styled("[Ctrl+D]", key_style),
            Span::raw(" Delete   "),
            Span::styled("[Ctrl+L]", key_style),
            Span::raw(" Clear   "),
            Span::styled("[Tab]", key_style),
            Span::raw(" Next Field   "),
            Span::styled("[\u{2191}\u{2193}]", key_style),
            Span::raw(" Navigate   "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Select   "),
            Span::styled("[Esc]", key_style),
            Span::raw(" Quit"),
        ])
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, notice: &Notice) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(notice.kind.title())
            .border_style(notice.kind.style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let lines = vec![
            Line::from(Span::styled(notice.text.clone(), notice.kind.style())),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Dismiss"),
            ]),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

/// Render a single labeled line for the form widget, highlighting the field
/// that currently has focus.
fn field_line(form: &StudentForm, field: StudentField) -> Line<'static> {
    let value = form.value(field);
    let is_active = form.active == field;

    let display = if value.is_empty() {
        "<required>".to_string()
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{}: ", field.label())),
        Span::styled(display, style),
    ])
}

/// Produce a rectangle centered within `area` that spans the requested
/// percent of the width and height. Used for the notice dialog.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}
