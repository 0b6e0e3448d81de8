//! Popup rendering for the edit and delete flows.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{DeletePrompt, EditField, EditForm, Popup};
use crate::ui::theme;

pub fn render_popup(f: &mut Frame, area: Rect, popup: &Popup) {
    match popup {
        Popup::Edit(form) => render_edit(f, area, form),
        Popup::Delete(prompt) => render_delete(f, area, prompt),
    }
}

fn render_edit(f: &mut Frame, area: Rect, form: &EditForm) {
    let rect = centered_rect(52, 11, area);
    let mut lines = vec![
        field_line("Quantity", form.quantity.value(), form.focus == EditField::Quantity),
        field_line("Location", form.location.value(), form.focus == EditField::Location),
        field_line("Reason  ", form.reason.value(), form.focus == EditField::Reason),
        Line::raw(""),
    ];
    lines.push(status_line(form.submitting, form.error.as_deref()));
    lines.push(Line::styled(
        "Tab: next field   Enter: save   Esc: cancel",
        theme::muted(),
    ));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(format!(" Edit: {} ", form.item_name))
            .title_style(theme::title()),
    );
    f.render_widget(Clear, rect);
    f.render_widget(widget, rect);
}

fn render_delete(f: &mut Frame, area: Rect, prompt: &DeletePrompt) {
    let rect = centered_rect(52, 9, area);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(prompt.item_name.clone(), theme::title()),
            Span::raw("? This cannot be undone."),
        ]),
        Line::raw(""),
        field_line("Reason", prompt.reason.value(), true),
    ];
    lines.push(status_line(prompt.submitting, prompt.error.as_deref()));
    lines.push(Line::styled("Enter: delete   Esc: cancel", theme::muted()));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::error())
            .title(" Delete item ")
            .title_style(theme::error()),
    );
    f.render_widget(Clear, rect);
    f.render_widget(widget, rect);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::raw(marker.to_string()),
        Span::styled(format!("{label}: "), theme::table_header()),
        Span::raw(value.to_string()),
        if focused {
            Span::styled("▏", theme::title())
        } else {
            Span::raw("")
        },
    ])
}

fn status_line(submitting: bool, error: Option<&str>) -> Line<'static> {
    if submitting {
        Line::styled("Saving...".to_string(), theme::muted())
    } else if let Some(error) = error {
        Line::styled(error.to_string(), theme::error())
    } else {
        Line::raw("")
    }
}

/// A fixed-size rect centered in `r`, clamped to fit.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}
