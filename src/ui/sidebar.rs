//! Sidebar with the three input controls.

use crate::app::App;
use crate::controls::{BarColor, ControlId};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the sidebar and, when open, the color dropdown.
pub(super) fn draw_sidebar(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = app.layout.control_height;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(height),
            Constraint::Length(height),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_slider(f, app, rows[0], colors);
    draw_color_select(f, app, rows[1], colors);
    draw_checkbox(f, app, rows[2], colors);
    draw_summary(f, app, rows[3], colors);

    if let Some(dropdown) = app.dropdown {
        let screen = f.area();
        draw_dropdown(f, dropdown.highlighted, rows[1], screen, colors);
    }
}

fn control_block(id: ControlId, focus: ControlId, colors: &ThemeColors) -> Block<'static> {
    let focused = id == focus;
    let border = if focused { colors.focus } else { colors.border };
    let title_style = if focused {
        Style::default().fg(colors.heading).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.label)
    };

    Block::default()
        .title(Span::styled(format!(" {} ", id.label()), title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_slider(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let bins = app.controls().bins;
    let gauge = LineGauge::default()
        .block(control_block(ControlId::Bins, app.focus, colors))
        .filled_style(Style::default().fg(colors.value))
        .unfilled_style(Style::default().fg(colors.border))
        .label(Span::styled(format!("{:>3} ", bins), Style::default().fg(colors.text)))
        .ratio(bins.ratio());

    f.render_widget(gauge, area);
}

fn draw_color_select(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let color = app.controls().color;
    let line = Line::from(vec![
        Span::styled("■ ", Style::default().fg(color.color())),
        Span::styled(color.name(), Style::default().fg(colors.text)),
        Span::styled(" ▾", Style::default().fg(colors.border)),
    ]);

    let paragraph =
        Paragraph::new(line).block(control_block(ControlId::Color, app.focus, colors));

    f.render_widget(paragraph, area);
}

fn draw_checkbox(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let mark = if app.controls().show_grid { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::styled(mark, Style::default().fg(colors.value)),
        Span::styled(" gridlines", Style::default().fg(colors.text)),
    ]);

    let paragraph =
        Paragraph::new(line).block(control_block(ControlId::Grid, app.focus, colors));

    f.render_widget(paragraph, area);
}

fn draw_summary(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let label = Style::default().fg(colors.label);
    let value = Style::default().fg(colors.value);
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Revision: ", label),
            Span::styled(app.view.revision().to_string(), value),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

/// Popup list anchored below the dropdown control.
fn draw_dropdown(
    f: &mut Frame<'_>,
    highlighted: BarColor,
    anchor: Rect,
    bounds: Rect,
    colors: &ThemeColors,
) {
    let name_width = BarColor::ALL
        .iter()
        .map(|c| c.name().width())
        .max()
        .unwrap_or(0) as u16;
    // swatch, space, name, borders
    let width = (name_width + 6).max(anchor.width).min(bounds.width);
    let height = (BarColor::ALL.len() as u16 + 2).min(bounds.height);
    let x = anchor.x.min(bounds.right().saturating_sub(width));
    let y = anchor.bottom().min(bounds.bottom().saturating_sub(height));
    let area = Rect::new(x, y, width, height);

    let items: Vec<ListItem<'_>> = BarColor::ALL
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(c.color())),
                Span::raw(c.name()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.focus))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(highlighted.index()));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
