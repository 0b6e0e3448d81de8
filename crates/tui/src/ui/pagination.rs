//! Pagination bar derivation and rendering.
//!
//! `PaginationBar` is a pure projection of `QueryState` so the caption and
//! button enablement can be tested without a terminal.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::QueryState;
use crate::ui::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub caption: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub page_size: u64,
}

impl PaginationBar {
    pub fn from_query(q: &QueryState) -> Self {
        Self {
            caption: format!(
                "Page {} of {} ({} records)",
                q.page, q.total_pages, q.total_items
            ),
            prev_enabled: q.page > 1,
            next_enabled: q.page < q.total_pages,
            page_size: q.page_size,
        }
    }
}

pub fn render_pagination(f: &mut Frame, area: Rect, bar: &PaginationBar) {
    let button = |label: &str, enabled: bool| {
        if enabled {
            Span::raw(label.to_string())
        } else {
            Span::styled(label.to_string(), theme::muted())
        }
    };
    let line = Line::from(vec![
        Span::raw(" "),
        button("◀ prev", bar.prev_enabled),
        Span::raw("  "),
        Span::raw(bar.caption.clone()),
        Span::raw("  "),
        button("next ▶", bar.next_enabled),
        Span::styled(
            format!("   {} per page (+/- to change)", bar.page_size),
            theme::muted(),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: u64, total_items: u64) -> QueryState {
        let mut q = QueryState::new(10);
        q.apply_total(total_items);
        q.set_page(page);
        q
    }

    #[test]
    fn caption_reports_page_totals_and_records() {
        let bar = PaginationBar::from_query(&query(2, 45));
        assert_eq!(bar.caption, "Page 2 of 5 (45 records)");
    }

    #[test]
    fn first_page_disables_prev_only() {
        let bar = PaginationBar::from_query(&query(1, 45));
        assert!(!bar.prev_enabled);
        assert!(bar.next_enabled);
    }

    #[test]
    fn last_page_disables_next_only() {
        let bar = PaginationBar::from_query(&query(5, 45));
        assert!(bar.prev_enabled);
        assert!(!bar.next_enabled);
    }

    #[test]
    fn middle_page_enables_both() {
        let bar = PaginationBar::from_query(&query(3, 45));
        assert!(bar.prev_enabled);
        assert!(bar.next_enabled);
    }

    #[test]
    fn empty_table_still_shows_page_one_of_one() {
        let bar = PaginationBar::from_query(&query(1, 0));
        assert_eq!(bar.caption, "Page 1 of 1 (0 records)");
        assert!(!bar.prev_enabled);
        assert!(!bar.next_enabled);
    }
}
