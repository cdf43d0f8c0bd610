use std::cmp::min;
use std::ops::Range;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
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

/// Rows of a `len`-long list to draw in `capacity` lines so that `selected`
/// stays visible, scrolling only once the selection leaves the first page.
pub(crate) fn visible_window(selected: usize, capacity: usize, len: usize) -> Range<usize> {
    if len == 0 || capacity == 0 {
        return 0..0;
    }
    let mut start = if selected >= capacity {
        selected + 1 - capacity
    } else {
        0
    };
    if start + capacity > len {
        start = len.saturating_sub(capacity);
    }
    start..min(start + capacity, len)
}

/// Column for a text cursor after `prefix` label chars and `value_len` typed
/// chars, pinned to the last column of `inner` once the text overflows it.
pub(crate) fn cursor_column(inner: Rect, prefix: usize, value_len: usize) -> u16 {
    let offset = u16::try_from(prefix.saturating_add(value_len)).unwrap_or(u16::MAX);
    let last = inner.right().saturating_sub(1).max(inner.x);
    inner.x.saturating_add(offset).min(last)
}

/// `[key] Label   ` pair for the footer hints.
pub(crate) fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    [Span::styled(key, key_style), Span::raw(label)]
}
