//! Grid layout and drawing.
//!
//! Feeds the pipeline's derived views into the grid widget: the sorted
//! row sequence, the summary row, the selection set, and the active
//! sort selector. Frozen columns stay leftmost; the rest scroll with
//! the focused column.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use taskgrid_lib::columns::Column;
use taskgrid_lib::sort::Direction;

use crate::app::{App, Mode};
use crate::render::renderer_for;

/// Width of the leading selection-indicator column.
pub const SELECTION_WIDTH: u16 = 2;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let areas = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    draw_title(frame, app, areas[0]);
    draw_table(frame, app, areas[1]);
    draw_summary(frame, app, areas[2]);
    draw_status(frame, app, areas[3]);
    draw_help(frame, areas[4]);
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " taskgrid | {} records, {} selected",
        app.grid.len(),
        app.grid.selection().len()
    );
    let widget = Paragraph::new(title).style(
        Style::new()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(widget, area);
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    app.ensure_focus_visible(area.width);
    let columns = visible_columns(app, area.width);
    let (sort_column, direction) = {
        let (column, direction) = app.grid.sort_selector();
        (column.to_string(), direction)
    };
    let focused_id = app.columns[app.focus].id.clone();

    let header_cells = std::iter::once(Cell::from(" ")).chain(columns.iter().map(|col| {
        let mut label = col.label.clone();
        if col.id == sort_column {
            match direction {
                Direction::Asc => label.push_str(" ▲"),
                Direction::Desc => label.push_str(" ▼"),
                Direction::None => {}
            }
        }
        let mut style = Style::new().add_modifier(Modifier::BOLD);
        if col.id == focused_id {
            style = style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(label).style(style)
    }));
    let header = Row::new(header_cells);

    let rows = app.grid.visible_rows();
    let selection = app.grid.selection().clone();
    let body = rows.iter().map(|record| {
        let selected = selection.contains(&record.id);
        let indicator = if selected { "■" } else { "□" };
        let cells = std::iter::once(Cell::from(indicator)).chain(
            columns
                .iter()
                .map(|col| Cell::from(renderer_for(col.kind).cell(record, &col.id))),
        );
        let mut row = Row::new(cells);
        if selected {
            row = row.style(Style::new().fg(Color::Magenta));
        }
        row
    });

    let table = Table::new(body, widths(&columns))
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::new().add_modifier(Modifier::REVERSED));

    if rows.is_empty() {
        app.table.select(None);
    } else {
        app.table.select(Some(app.cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut app.table);
}

fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let columns = visible_columns(app, area.width);
    let summary = app.grid.summary();
    let cells = std::iter::once(Cell::from(" ")).chain(
        columns
            .iter()
            .map(|col| Cell::from(renderer_for(col.kind).summary_cell(&summary, &col.id))),
    );
    let row = Row::new(cells).style(Style::new().add_modifier(Modifier::BOLD));
    let table = Table::new(vec![row], widths(&columns)).column_spacing(1);
    frame.render_widget(table, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let widget = match &app.mode {
        Mode::Edit { buffer } => {
            let label = &app.columns[app.focus].label;
            Paragraph::new(format!(" {label}: {buffer}▏"))
                .style(Style::new().fg(Color::Yellow))
        }
        Mode::Browse => Paragraph::new(format!(" {}", app.status)),
    };
    frame.render_widget(widget, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = " ↑↓ row  ←→ column  s sort  Space select  a all  v anchor  e edit  Esc clear  q quit";
    let widget = Paragraph::new(help).style(Style::new().fg(Color::DarkGray));
    frame.render_widget(widget, area);
}

/// Frozen columns plus as many non-frozen columns from the current
/// offset as fit the area width.
fn visible_columns(app: &App, width: u16) -> Vec<Column> {
    let spacing = 1u16;
    let mut cols: Vec<Column> = app.columns.iter().filter(|c| c.frozen).cloned().collect();
    let mut used: u16 = SELECTION_WIDTH
        + spacing
        + cols.iter().map(|c| c.width + spacing).sum::<u16>();

    for col in app
        .columns
        .iter()
        .filter(|c| !c.frozen)
        .skip(app.col_offset)
    {
        if used + col.width > width {
            break;
        }
        used += col.width + spacing;
        cols.push(col.clone());
    }
    cols
}

fn widths(columns: &[Column]) -> Vec<Constraint> {
    std::iter::once(Constraint::Length(SELECTION_WIDTH))
        .chain(columns.iter().map(|c| Constraint::Length(c.width)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_columns_keep_frozen_leftmost() {
        let app = App::with_rows(Vec::new());
        let cols = visible_columns(&app, 60);
        assert!(cols.len() >= 2);
        assert_eq!(cols[0].id, "id");
        assert_eq!(cols[1].id, "title");
        assert!(cols[0].frozen && cols[1].frozen);
    }

    #[test]
    fn test_visible_columns_window_moves_with_offset() {
        let mut app = App::with_rows(Vec::new());
        let before = visible_columns(&app, 60);
        app.col_offset = 2;
        let after = visible_columns(&app, 60);
        // The frozen prefix is identical; the scrolled part changed.
        assert_eq!(before[0].id, after[0].id);
        assert_eq!(before[1].id, after[1].id);
        assert_ne!(before[2].id, after[2].id);
    }

    #[test]
    fn test_all_columns_fit_a_wide_viewport() {
        let app = App::with_rows(Vec::new());
        let cols = visible_columns(&app, 400);
        assert_eq!(cols.len(), app.columns.len());
    }
}
