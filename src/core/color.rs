//! The 8-point ordinal color wheel
//!
//! Colors double as combat values: a champion's current color is both its
//! identity on the wheel and the damage it deals on a direct attack. BLACK (0)
//! and WHITE (7) are terminal; any champion pushed to or past either bound is
//! defeated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower terminal bound of the wheel
pub const COLOR_MIN: i8 = 0;
/// Upper terminal bound of the wheel
pub const COLOR_MAX: i8 = 7;

/// A clamped position on the color wheel
///
/// Stored colors are always in [0,7] by construction. Combat arithmetic that
/// can overshoot the bounds works on raw `i8` ordinals and converts back only
/// after the defeat check (see `game::combat`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
}

/// All colors in wheel order, BLACK first
pub const ALL_COLORS: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
    Color::White,
];

impl Color {
    /// Ordinal value on the wheel, 0..=7
    pub fn value(&self) -> i8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Orange => 2,
            Color::Yellow => 3,
            Color::Green => 4,
            Color::Blue => 5,
            Color::Purple => 6,
            Color::White => 7,
        }
    }

    /// Convert a raw ordinal to a color, clamping to the wheel bounds
    pub fn from_value(value: i8) -> Self {
        ALL_COLORS[clamp(value) as usize]
    }

    /// Display name matching the original wheel labels
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
            Color::White => "White",
        }
    }

    /// Is this a terminal color? A champion sitting on a terminal color is
    /// already out of bounds.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Color::Black | Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.value())
    }
}

/// Bound a raw ordinal to [0,7]
pub fn clamp(value: i8) -> i8 {
    value.clamp(COLOR_MIN, COLOR_MAX)
}

/// Has a raw ordinal reached a terminal bound?
pub fn is_out_of_bounds(value: i8) -> bool {
    value <= COLOR_MIN || value >= COLOR_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_cover_wheel() {
        for (i, color) in ALL_COLORS.iter().enumerate() {
            assert_eq!(color.value(), i as i8);
            assert_eq!(Color::from_value(i as i8), *color);
        }
    }

    #[test]
    fn test_from_value_clamps() {
        assert_eq!(Color::from_value(-3), Color::Black);
        assert_eq!(Color::from_value(12), Color::White);
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(is_out_of_bounds(0));
        assert!(is_out_of_bounds(-5));
        assert!(is_out_of_bounds(7));
        assert!(is_out_of_bounds(11));
        for v in 1..=6 {
            assert!(!is_out_of_bounds(v));
        }
    }

    #[test]
    fn test_terminal_colors() {
        assert!(Color::Black.is_terminal());
        assert!(Color::White.is_terminal());
        assert!(!Color::Green.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Yellow.to_string(), "Yellow(3)");
    }
}
