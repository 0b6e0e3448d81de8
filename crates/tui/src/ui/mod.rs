//! Rendering for the inventory TUI.
//!
//! Responsibilities:
//! - Lay out the header, active table, pagination bar, and footer.
//! - Overlay popups and toasts on top of the main layout.
//!
//! Non-responsibilities:
//! - State mutation (rendering takes `&mut App` only for `TableState`).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Table},
};

pub mod pagination;
pub mod popup;
pub mod rows;
pub mod theme;
pub mod toast;

use crate::app::{App, ConnectionHealth, View};
use pagination::PaginationBar;

pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    match app.view {
        View::Inventory => render_inventory(f, chunks[1], app),
        View::Logs => render_logs(f, chunks[1], app),
    }
    let bar = PaginationBar::from_query(app.active_query());
    pagination::render_pagination(f, chunks[2], &bar);
    render_footer(f, chunks[3], app);

    if let Some(popup) = &app.popup {
        popup::render_popup(f, f.area(), popup);
    }
    toast::render_toasts(f, f.area(), &app.toasts);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(" GearTracker ")
        .title_style(theme::title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(inner);

    let tab = |view: View, key: &str| {
        let label = format!(" [{key}] {} ", view.title());
        if app.view == view {
            Span::styled(label, theme::title())
        } else {
            Span::styled(label, theme::muted())
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            tab(View::Inventory, "1"),
            tab(View::Logs, "2"),
        ])),
        columns[0],
    );

    let (status, style) = match &app.connection {
        ConnectionHealth::Unknown => ("checking...".to_string(), theme::muted()),
        ConnectionHealth::Connected => ("● connected".to_string(), theme::connected()),
        ConnectionHealth::Disconnected(detail) => {
            (format!("● {detail}"), theme::disconnected())
        }
        ConnectionHealth::Unreachable(_) => ("● unreachable".to_string(), theme::disconnected()),
    };
    f.render_widget(
        Paragraph::new(Span::styled(status, style)).alignment(Alignment::Right),
        columns[1],
    );
}

fn render_inventory(f: &mut Frame, area: Rect, app: &mut App) {
    let title = table_title("Inventory", app.inventory.loading, app.spinner_frame);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(title);

    if let Some(message) = placeholder(
        app.inventory.loading,
        app.inventory.rows.as_deref().map(|r| r.is_empty()),
        app.inventory.error.as_deref(),
        &app.inventory.query.search,
    ) {
        f.render_widget(message.block(block), area);
        return;
    }

    let items = app.inventory.rows.as_deref().unwrap_or_default();
    let table = Table::new(
        rows::inventory_rows(items),
        [
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(19),
            Constraint::Length(19),
        ],
    )
    .header(
        ratatui::widgets::Row::new(rows::INVENTORY_HEADERS.to_vec()).style(theme::table_header()),
    )
    .row_highlight_style(theme::row_highlight())
    .block(block);
    f.render_stateful_widget(table, area, &mut app.inventory.table_state);
}

fn render_logs(f: &mut Frame, area: Rect, app: &mut App) {
    let title = table_title("Operation Logs", app.logs.loading, app.spinner_frame);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(title);

    if let Some(message) = placeholder(
        app.logs.loading,
        app.logs.rows.as_deref().map(|r| r.is_empty()),
        app.logs.error.as_deref(),
        &app.logs.query.search,
    ) {
        f.render_widget(message.block(block), area);
        return;
    }

    let logs = app.logs.rows.as_deref().unwrap_or_default();
    let table = Table::new(
        rows::log_rows(logs, &app.logs.query.search, theme::search_match()),
        [
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Min(14),
            Constraint::Min(20),
            Constraint::Length(19),
        ],
    )
    .header(ratatui::widgets::Row::new(rows::LOG_HEADERS.to_vec()).style(theme::table_header()))
    .row_highlight_style(theme::row_highlight())
    .block(block);
    f.render_stateful_widget(table, area, &mut app.logs.table_state);
}

fn table_title(name: &str, loading: bool, spinner_frame: u8) -> String {
    if loading {
        format!(" {name} {} ", theme::spinner_char(spinner_frame))
    } else {
        format!(" {name} ")
    }
}

/// Centered placeholder shown instead of rows: loading spinner before the
/// first page arrives, the inline error, or the empty-state message.
fn placeholder(
    loading: bool,
    rows_empty: Option<bool>,
    error: Option<&str>,
    search: &str,
) -> Option<Paragraph<'static>> {
    if let Some(error) = error {
        return Some(
            Paragraph::new(error.to_string())
                .style(theme::error())
                .alignment(Alignment::Center),
        );
    }
    match rows_empty {
        None => {
            let text = if loading {
                "Loading...".to_string()
            } else {
                "Press 'r' to load.".to_string()
            };
            Some(Paragraph::new(text).alignment(Alignment::Center))
        }
        Some(true) => Some(
            Paragraph::new(rows::empty_message(search))
                .style(theme::muted())
                .alignment(Alignment::Center),
        ),
        Some(false) => None,
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.search_active {
        Line::from(vec![
            Span::styled(" Search: ", theme::table_header()),
            Span::raw(app.search.value().to_string()),
            Span::styled("▏", theme::title()),
            Span::styled("  (Enter: apply, Esc: cancel)", theme::muted()),
        ])
    } else {
        let mut hints =
            " q: quit  tab: switch view  /: search  ◀ ▶: page  r: refresh  c: status".to_string();
        if app.view == View::Inventory {
            hints.push_str("  e: edit  d: delete");
        }
        Line::styled(hints, theme::muted())
    };
    f.render_widget(Paragraph::new(line), area);
}
