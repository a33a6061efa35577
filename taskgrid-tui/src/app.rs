//! Application state and event handling.
//!
//! Wraps the grid state with UI-only concerns: the row cursor into the
//! presented sequence, the focused column, the range-edit anchor, and
//! the input mode. Key presses are translated into the three grid
//! intents (sort requests, range edits, selection changes).

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::DefaultTerminal;
use ratatui::widgets::TableState;

use taskgrid_lib::GridState;
use taskgrid_lib::columns::{Column, default_columns};
use taskgrid_lib::data::sample_rows;
use taskgrid_lib::model::{Record, RecordPatch};

use crate::ui;

const SAMPLE_ROW_COUNT: usize = 1000;

/// Rows jumped by PageUp/PageDown.
const PAGE_JUMP: usize = 20;

/// Input mode for the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Browse,
    /// Editing the focused cell; the buffer is committed on Enter.
    Edit { buffer: String },
}

pub struct App {
    pub grid: GridState,
    pub columns: Vec<Column>,
    /// Cursor into the presented (sorted) sequence.
    pub cursor: usize,
    /// Index of the focused column.
    pub focus: usize,
    /// Anchor row for range edits, set with 'v'.
    pub anchor: Option<usize>,
    /// First non-frozen column currently shown.
    pub col_offset: usize,
    pub table: TableState,
    pub mode: Mode,
    pub status: String,
    pub running: bool,
}

impl App {
    /// Creates the app over generated sample data.
    pub fn new() -> Self {
        Self::with_rows(sample_rows(SAMPLE_ROW_COUNT))
    }

    /// Creates the app over a fixed row collection.
    pub fn with_rows(rows: Vec<Record>) -> Self {
        Self {
            grid: GridState::new(rows),
            columns: default_columns(),
            cursor: 0,
            focus: 0,
            anchor: None,
            col_offset: 0,
            table: TableState::default(),
            mode: Mode::Browse,
            status: "Ready".into(),
            running: true,
        }
    }

    /// Runs the event loop until quit.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|frame| ui::draw(frame, &mut self))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Dispatches a key press to the active mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(self.mode, Mode::Browse) {
            self.handle_browse_key(key);
        } else {
            self.handle_edit_key(key);
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-(PAGE_JUMP as i64)),
            KeyCode::PageDown => self.move_cursor(PAGE_JUMP as i64),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.grid.len().saturating_sub(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(1),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char(' ') => self.toggle_selection(),
            KeyCode::Char('a') => {
                self.grid.select_all();
                self.status = format!("Selected all {} rows", self.grid.len());
            }
            KeyCode::Char('v') => {
                self.anchor = Some(self.cursor);
                self.status = format!("Range anchor set at row {}", self.cursor + 1);
            }
            KeyCode::Esc => {
                self.grid.clear_selection();
                self.anchor = None;
                self.status = "Selection cleared".into();
            }
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                self.status = "Edit cancelled".into();
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                if let Mode::Edit { buffer } = &mut self.mode {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Mode::Edit { buffer } = &mut self.mode {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: i64) {
        let len = self.grid.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as i64 + delta;
        self.cursor = target.clamp(0, len as i64 - 1) as usize;
    }

    fn move_focus(&mut self, delta: i64) {
        let target = self.focus as i64 + delta;
        self.focus = target.clamp(0, self.columns.len() as i64 - 1) as usize;
    }

    fn toggle_sort(&mut self) {
        let column = self.columns[self.focus].clone();
        if !column.sortable {
            self.status = format!("Column '{}' is not sortable", column.label);
            return;
        }
        self.grid.toggle_sort(&column.id);
        let (sort_column, direction) = self.grid.sort_selector();
        self.status = format!("Sorted by {sort_column} ({direction})");
    }

    fn toggle_selection(&mut self) {
        let rows = self.grid.visible_rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        self.grid.toggle_selected(row.id);
        self.status = format!("{} selected", self.grid.selection().len());
    }

    fn begin_edit(&mut self) {
        let column = self.columns[self.focus].clone();
        if !column.editable {
            self.status = format!("Column '{}' is not editable", column.label);
            return;
        }
        let rows = self.grid.visible_rows();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        let buffer = row.field_text(&column.id).unwrap_or_default();
        self.mode = Mode::Edit { buffer };
        let (from, to) = self.edit_range();
        self.status = if from == to {
            format!("Editing {} (Enter commits, Esc cancels)", column.label)
        } else {
            format!(
                "Editing {} over rows {}-{} (Enter commits, Esc cancels)",
                column.label,
                from + 1,
                to + 1
            )
        };
    }

    fn commit_edit(&mut self) {
        let Mode::Edit { buffer } = std::mem::replace(&mut self.mode, Mode::Browse) else {
            return;
        };
        let column = self.columns[self.focus].clone();
        let (from, to) = self.edit_range();
        debug!("committing edit of '{}' over {from}..={to}", column.id);
        match RecordPatch::parse(&column.id, &buffer) {
            Ok(patch) => match self.grid.apply_edit(from, to, &patch) {
                Ok(()) => self.status = format!("Updated {} row(s)", to - from + 1),
                Err(e) => self.status = e.to_string(),
            },
            Err(e) => self.status = e.to_string(),
        }
        self.anchor = None;
        self.move_cursor(0);
    }

    /// The inclusive presented-row range an edit applies to.
    fn edit_range(&self) -> (usize, usize) {
        match self.anchor {
            Some(anchor) => (anchor.min(self.cursor), anchor.max(self.cursor)),
            None => (self.cursor, self.cursor),
        }
    }

    /// Scrolls the non-frozen column window so the focused column fits
    /// in `width` terminal columns. Called by the renderer with the
    /// current grid area width.
    pub fn ensure_focus_visible(&mut self, width: u16) {
        let spacing = 1u16;
        let frozen_width: u16 = self
            .columns
            .iter()
            .filter(|c| c.frozen)
            .map(|c| c.width + spacing)
            .sum();
        let avail = width.saturating_sub(ui::SELECTION_WIDTH + spacing + frozen_width);

        let scroll: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !self.columns[i].frozen)
            .collect();
        self.col_offset = self.col_offset.min(scroll.len().saturating_sub(1));
        let Some(focus_pos) = scroll.iter().position(|&i| i == self.focus) else {
            // Focused column is frozen and always visible.
            return;
        };

        if focus_pos < self.col_offset {
            self.col_offset = focus_pos;
            return;
        }
        while self.col_offset < focus_pos {
            let used: u16 = scroll[self.col_offset..=focus_pos]
                .iter()
                .map(|&i| self.columns[i].width + spacing)
                .sum();
            if used <= avail {
                break;
            }
            self.col_offset += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fixture() -> App {
        let rows = vec![
            Record::new(0, "banana"),
            Record::new(1, "apple"),
            Record::new(2, "cherry"),
        ];
        App::with_rows(rows)
    }

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut app = fixture();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.cursor, 2);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.cursor, 2);
        app.handle_key(key(KeyCode::Home));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_sort_key_cycles_focused_column() {
        let mut app = fixture();
        // Focus the title column (index 1) and toggle twice.
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(
            app.grid.sort_selector(),
            ("title", taskgrid_lib::Direction::Asc)
        );
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(
            app.grid.sort_selector(),
            ("title", taskgrid_lib::Direction::Desc)
        );
    }

    #[test]
    fn test_edit_flow_commits_patch() {
        let mut app = fixture();
        app.handle_key(key(KeyCode::Right)); // focus "title"
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(
            app.mode,
            Mode::Edit {
                buffer: "banana".into()
            }
        );

        // Clear the prefilled value and type a new one.
        for _ in 0..6 {
            app.handle_key(key(KeyCode::Backspace));
        }
        for c in "kiwi".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.grid.rows()[0].title, "kiwi");
    }

    #[test]
    fn test_edit_rejected_on_readonly_column() {
        let mut app = fixture();
        // Focus stays on "id", which is not editable.
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.status.contains("not editable"));
    }

    #[test]
    fn test_range_edit_uses_anchor() {
        let mut app = fixture();
        app.handle_key(key(KeyCode::Char('v'))); // anchor at row 0
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Right)); // focus "title"
        app.handle_key(key(KeyCode::Char('e')));
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Backspace));
        }
        for c in "same".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(app.grid.rows().iter().all(|r| r.title == "same"));
        assert_eq!(app.anchor, None);
    }

    #[test]
    fn test_space_toggles_selection_of_presented_row() {
        let mut app = fixture();
        app.grid.toggle_sort("title"); // presented: apple, banana, cherry
        app.handle_key(key(KeyCode::Char(' ')));
        // Presented row 0 is "apple", id 1.
        assert!(app.grid.is_selected(1));
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.grid.is_selected(1));
    }

    #[test]
    fn test_escape_clears_selection_and_anchor() {
        let mut app = fixture();
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('v')));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.grid.selection().is_empty());
        assert_eq!(app.anchor, None);
    }

    #[test]
    fn test_focus_window_follows_focus() {
        let mut app = fixture();
        // Focus the last column with a narrow viewport.
        app.focus = app.columns.len() - 1;
        app.ensure_focus_visible(40);
        assert!(app.col_offset > 0);

        // Moving focus back to the first non-frozen column scrolls back.
        app.focus = app
            .columns
            .iter()
            .position(|c| !c.frozen)
            .unwrap();
        app.ensure_focus_visible(40);
        assert_eq!(app.col_offset, 0);
    }
}
