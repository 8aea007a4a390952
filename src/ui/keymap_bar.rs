//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, dropdown_open: bool, colors: &ThemeColors) {
    let keymap_text = if dropdown_open {
        "jk/↑↓:choose | Enter:select | Esc:cancel"
    } else {
        "q:quit | Tab/jk:focus | hl:adjust | HL:±10 | Enter:open | Space:toggle | r:reset | T:theme | ?:help"
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
