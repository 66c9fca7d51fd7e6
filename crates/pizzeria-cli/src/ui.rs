//! Generic layout helpers shared by the views.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Render `child` so it exactly covers `parent`.
pub fn fill_parent<W: Widget>(child: W, parent: Rect, buf: &mut Buffer) {
    child.render(parent, buf);
}

/// A `width` x `height` rect centered inside `parent`, clamped to its
/// bounds.
pub fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;
    Rect::new(x, y, width, height)
}
