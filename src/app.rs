//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{Config, LayoutConfig};
use crate::controls::{BarColor, ControlId, Controls};
use crate::view::ReactiveView;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Open state of the color dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown {
    /// Highlighted choice, not yet applied.
    pub highlighted: BarColor,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
}

/// Page title shown above the sidebar and plot.
pub const PAGE_TITLE: &str = "Interactive Histogram";

const HELP_TEXT: &str = "Help: Tab/jk=focus, hl=adjust, HL=±10, Enter=open, Space=toggle, r=reset, T=theme, q=quit";

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Controls and the histogram derived from them.
    pub view: ReactiveView,
    /// Focused sidebar control.
    pub focus: ControlId,
    /// Color dropdown, when open.
    pub dropdown: Option<Dropdown>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Layout configuration.
    pub layout: LayoutConfig,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: Config) -> Self {
        Self {
            view: ReactiveView::new(config.sample, config.plot),
            focus: ControlId::default(),
            dropdown: None,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            layout: config.layout,
        }
    }

    /// Current control values.
    pub fn controls(&self) -> Controls {
        self.view.controls()
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.dropdown.is_some() {
            self.handle_dropdown_key(key);
            return Action::Continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                return Action::Quit;
            },
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Action::Quit,

            // Focus
            (KeyModifiers::NONE, KeyCode::Tab)
            | (KeyModifiers::NONE, KeyCode::Down)
            | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                self.focus = self.focus.next();
            },
            (_, KeyCode::BackTab)
            | (KeyModifiers::NONE, KeyCode::Up)
            | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                self.focus = self.focus.prev();
            },

            // Adjust focused control
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.adjust(-1);
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.adjust(1);
            },
            (KeyModifiers::SHIFT, KeyCode::Char('H')) | (KeyModifiers::NONE, KeyCode::PageDown) => {
                self.adjust(-10);
            },
            (KeyModifiers::SHIFT, KeyCode::Char('L')) | (KeyModifiers::NONE, KeyCode::PageUp) => {
                self.adjust(10);
            },
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                self.activate();
            },

            // Features
            (KeyModifiers::NONE, KeyCode::Char('r')) => {
                self.view.set_controls(Controls::default());
                self.status = "Controls reset to defaults".to_string();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                self.theme = self.theme.next();
                self.status = format!("Theme: {}", self.theme.name());
            },
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                self.status = HELP_TEXT.to_string();
            },

            _ => {},
        }

        Action::Continue
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) {
        let Some(dropdown) = self.dropdown.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                dropdown.highlighted = dropdown.highlighted.prev();
            },
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                dropdown.highlighted = dropdown.highlighted.next();
            },
            KeyCode::Enter | KeyCode::Char(' ') => {
                let color = dropdown.highlighted;
                self.dropdown = None;
                self.view.set_color(color);
                self.status = format!("Bar color: {}", color);
            },
            KeyCode::Esc | KeyCode::Char('q') => {
                self.dropdown = None;
                self.status = "Color selection cancelled".to_string();
            },
            _ => {},
        }
    }

    /// Step the focused control by `delta`.
    fn adjust(&mut self, delta: i32) {
        let controls = self.controls();
        match self.focus {
            ControlId::Bins => {
                let bins = controls.bins.step(delta);
                self.view.set_bins(bins);
                self.status = format!("Bins: {}", bins);
            },
            ControlId::Color => {
                let color = if delta < 0 {
                    controls.color.prev()
                } else {
                    controls.color.next()
                };
                self.view.set_color(color);
                self.status = format!("Bar color: {}", color);
            },
            ControlId::Grid => self.toggle_grid(),
        }
    }

    /// Open the dropdown or toggle the checkbox.
    fn activate(&mut self) {
        match self.focus {
            ControlId::Bins => {},
            ControlId::Color => {
                self.dropdown = Some(Dropdown {
                    highlighted: self.controls().color,
                });
            },
            ControlId::Grid => self.toggle_grid(),
        }
    }

    fn toggle_grid(&mut self) {
        let show_grid = !self.controls().show_grid;
        self.view.set_show_grid(show_grid);
        self.status = if show_grid { "Grid on" } else { "Grid off" }.to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
