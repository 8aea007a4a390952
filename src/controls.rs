//! Input controls: bin-count slider, bar-color dropdown and grid checkbox.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::{HistoviewError, Result};

/// Number of histogram bins, constrained to the slider range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinCount(u8);

impl BinCount {
    /// Slider minimum.
    pub const MIN: u8 = 0;
    /// Slider maximum.
    pub const MAX: u8 = 100;
    /// Slider default.
    pub const DEFAULT: u8 = 20;

    /// Create a bin count, rejecting values outside the slider range.
    pub fn new(value: u32) -> Result<Self> {
        if value > u32::from(Self::MAX) {
            return Err(HistoviewError::bin_count_out_of_range(value));
        }
        Ok(Self(value as u8))
    }

    /// Get the raw value.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Step by `delta`, saturating at the slider ends.
    pub fn step(self, delta: i32) -> Self {
        let value = (i32::from(self.0) + delta).clamp(i32::from(Self::MIN), i32::from(Self::MAX));
        Self(value as u8)
    }

    /// Position of the slider thumb in [0, 1].
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl Default for BinCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for BinCount {
    type Error = HistoviewError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for BinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bar color choices offered by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarColor {
    /// Black.
    Black,
    /// Blue.
    #[default]
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Orange.
    Orange,
    /// Purple.
    Purple,
    /// Cyan.
    Cyan,
    /// Yellow.
    Yellow,
}

impl BarColor {
    /// All choices, in dropdown order.
    pub const ALL: [BarColor; 8] = [
        BarColor::Black,
        BarColor::Blue,
        BarColor::Red,
        BarColor::Green,
        BarColor::Orange,
        BarColor::Purple,
        BarColor::Cyan,
        BarColor::Yellow,
    ];

    /// Get the color name.
    pub fn name(self) -> &'static str {
        match self {
            BarColor::Black => "black",
            BarColor::Blue => "blue",
            BarColor::Red => "red",
            BarColor::Green => "green",
            BarColor::Orange => "orange",
            BarColor::Purple => "purple",
            BarColor::Cyan => "cyan",
            BarColor::Yellow => "yellow",
        }
    }

    /// Position in the dropdown.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    /// Choice at a dropdown position, wrapping around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Get the next color in the dropdown.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Get the previous color in the dropdown.
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }

    /// Terminal color used to draw bars.
    pub fn color(self) -> Color {
        match self {
            BarColor::Black => Color::Rgb(0, 0, 0),
            BarColor::Blue => Color::Rgb(31, 119, 180),
            BarColor::Red => Color::Rgb(214, 39, 40),
            BarColor::Green => Color::Rgb(44, 160, 44),
            BarColor::Orange => Color::Rgb(255, 127, 14),
            BarColor::Purple => Color::Rgb(148, 103, 189),
            BarColor::Cyan => Color::Rgb(23, 190, 207),
            BarColor::Yellow => Color::Rgb(255, 221, 0),
        }
    }
}

impl FromStr for BarColor {
    type Err = HistoviewError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HistoviewError::unknown_color(wanted))
    }
}

impl fmt::Display for BarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values of all three controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Controls {
    /// Slider value.
    pub bins: BinCount,
    /// Dropdown value.
    pub color: BarColor,
    /// Checkbox value.
    pub show_grid: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            bins: BinCount::default(),
            color: BarColor::default(),
            show_grid: true,
        }
    }
}

/// Identifies a sidebar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlId {
    /// Bin-count slider.
    #[default]
    Bins,
    /// Bar-color dropdown.
    Color,
    /// Grid checkbox.
    Grid,
}

impl ControlId {
    /// Get the next control in focus order.
    pub fn next(self) -> Self {
        match self {
            ControlId::Bins => ControlId::Color,
            ControlId::Color => ControlId::Grid,
            ControlId::Grid => ControlId::Bins,
        }
    }

    /// Get the previous control in focus order.
    pub fn prev(self) -> Self {
        match self {
            ControlId::Bins => ControlId::Grid,
            ControlId::Color => ControlId::Bins,
            ControlId::Grid => ControlId::Color,
        }
    }

    /// Get the control label.
    pub fn label(self) -> &'static str {
        match self {
            ControlId::Bins => "Number of Bins",
            ControlId::Color => "Choose Bar Color",
            ControlId::Grid => "Show Grid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_count_rejects_values_above_slider_max() {
        assert!(BinCount::new(100).is_ok());
        assert!(matches!(
            BinCount::new(101),
            Err(HistoviewError::BinCountOutOfRange { value: 101 })
        ));
    }

    #[test]
    fn bin_count_step_saturates() {
        let zero = BinCount::new(0).unwrap();
        assert_eq!(zero.step(-1).get(), 0);
        let max = BinCount::new(100).unwrap();
        assert_eq!(max.step(10).get(), 100);
        assert_eq!(BinCount::default().step(-10).get(), 10);
    }

    #[test]
    fn color_parsing_is_case_insensitive() {
        assert_eq!("Purple".parse::<BarColor>().unwrap(), BarColor::Purple);
        assert_eq!(" cyan ".parse::<BarColor>().unwrap(), BarColor::Cyan);
        assert!("magenta".parse::<BarColor>().is_err());
    }

    #[test]
    fn color_cycle_wraps() {
        assert_eq!(BarColor::Yellow.next(), BarColor::Black);
        assert_eq!(BarColor::Black.prev(), BarColor::Yellow);
        for color in BarColor::ALL {
            assert_eq!(BarColor::from_index(color.index()), color);
        }
    }

    #[test]
    fn defaults_match_controls() {
        let controls = Controls::default();
        assert_eq!(controls.bins.get(), 20);
        assert_eq!(controls.color, BarColor::Blue);
        assert!(controls.show_grid);
    }

    #[test]
    fn focus_cycles_through_all_controls() {
        let start = ControlId::default();
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.prev(), ControlId::Grid);
    }
}
