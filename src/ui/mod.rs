//! User interface rendering.

mod formatters;
mod keymap_bar;
mod plot;
mod sidebar;
mod status_bar;
mod theme;

use crate::app::{App, PAGE_TITLE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Title, content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(PAGE_TITLE)
        .style(
            Style::default()
                .fg(colors.heading)
                .bg(colors.bg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(app.layout.sidebar_width), Constraint::Min(1)])
        .split(chunks[1]);

    let plot_config = app.view.plot_config().clone();
    let rendered = app.view.rendered();
    plot::draw_plot(f, content[1], rendered, &plot_config, &colors);

    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.dropdown.is_some(), &colors);

    // Sidebar last so the open dropdown draws on top of the plot.
    sidebar::draw_sidebar(f, app, content[0], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{BarColor, BinCount, ControlId};
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 32;

    fn render(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    /// Cells to the right of the sidebar drawn in `color`.
    fn plot_cells_with_fg(app: &App, buffer: &Buffer, color: Color) -> usize {
        let sidebar = app.layout.sidebar_width;
        let mut count = 0;
        for y in 0..HEIGHT {
            for x in sidebar..WIDTH {
                if buffer[(x, y)].fg == color {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn default_page_shows_titles_and_controls() {
        let mut app = App::default();
        let buffer = render(&mut app);
        let screen = text(&buffer);

        assert!(screen.contains("Interactive Histogram"));
        assert!(screen.contains("Data Distribution with Selected Number of Bins"));
        assert!(screen.contains("A histogram."));
        assert!(screen.contains("Number of Bins"));
        assert!(screen.contains("Choose Bar Color"));
        assert!(screen.contains("Show Grid"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains(" 20"));
        assert!(screen.contains("Density"));
    }

    #[test]
    fn bars_are_drawn_in_each_color() {
        let mut app = App::default();
        for color in BarColor::ALL {
            app.view.set_color(color);
            let buffer = render(&mut app);
            assert!(
                plot_cells_with_fg(&app, &buffer, color.color()) > 0,
                "no {} bars drawn",
                color
            );
        }
    }

    #[test]
    fn gridlines_follow_checkbox() {
        let mut app = App::default();
        let grid = ThemeColors::from_theme(&app.theme).grid;

        let buffer = render(&mut app);
        assert!(plot_cells_with_fg(&app, &buffer, grid) > 0);

        app.view.set_show_grid(false);
        let buffer = render(&mut app);
        assert_eq!(plot_cells_with_fg(&app, &buffer, grid), 0);
        assert!(text(&buffer).contains("[ ]"));
    }

    #[test]
    fn zero_bins_draws_empty_plot() {
        let mut app = App::default();
        app.view.set_bins(BinCount::new(0).unwrap());
        let buffer = render(&mut app);

        assert!(text(&buffer).contains("nothing to draw"));
        let blue = BarColor::Blue.color();
        assert_eq!(plot_cells_with_fg(&app, &buffer, blue), 0);
    }

    #[test]
    fn open_dropdown_lists_all_colors() {
        let mut app = App::default();
        app.focus = ControlId::Color;
        app.dropdown = Some(crate::app::Dropdown {
            highlighted: BarColor::Purple,
        });
        let screen = text(&render(&mut app));
        for color in BarColor::ALL {
            assert!(screen.contains(color.name()), "missing {}", color);
        }
    }
}
