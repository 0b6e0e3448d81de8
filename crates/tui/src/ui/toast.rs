//! Transient notification toasts.
//!
//! Toasts report mutation outcomes and background failures without stealing
//! focus. They expire after a fixed number of UI ticks.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    /// Remaining UI ticks before the toast disappears.
    pub ttl: u8,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Success,
            ttl: 12,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Error,
            // Errors linger longer so they can actually be read.
            ttl: 24,
        }
    }
}

/// Decrement TTLs and drop expired toasts. Called once per UI tick.
pub fn prune(toasts: &mut Vec<Toast>) {
    for toast in toasts.iter_mut() {
        toast.ttl = toast.ttl.saturating_sub(1);
    }
    toasts.retain(|t| t.ttl > 0);
}

/// Render the most recent toasts stacked in the top-right corner.
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast]) {
    let mut y = area.y.saturating_add(1);
    for toast in toasts.iter().rev().take(3) {
        let width = (toast.text.len() as u16 + 4).min(area.width.saturating_sub(2));
        if width < 5 || y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);
        let color = match toast.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };
        let widget = Paragraph::new(toast.text.clone())
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(Clear, rect);
        f.render_widget(widget, rect);
        y += 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_drops_expired_toasts() {
        let mut toasts = vec![Toast::success("saved")];
        toasts[0].ttl = 1;
        prune(&mut toasts);
        assert!(toasts.is_empty());
    }

    #[test]
    fn prune_keeps_live_toasts() {
        let mut toasts = vec![Toast::error("failed")];
        prune(&mut toasts);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].ttl, 23);
    }
}
