//! Paint colors and the mixing rules between them

use serde::{Deserialize, Serialize};

/// A cell or paint color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Unpainted cell
    #[default]
    Empty,
    Red,
    Blue,
    Yellow,
    Orange,
    Green,
    Purple,
    Brown,
    Black,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Empty,
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Green,
        Color::Purple,
        Color::Brown,
        Color::Black,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Empty => "Empty",
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Green => "Green",
            Color::Purple => "Purple",
            Color::Brown => "Brown",
            Color::Black => "Black",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Single-character cell symbol for text output
    pub fn symbol(&self) -> char {
        match self {
            Color::Empty => '.',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Purple => 'P',
            Color::Brown => 'N',
            Color::Black => 'K',
        }
    }

    /// The two primaries a secondary color is made of
    pub fn components(&self) -> Option<[Color; 2]> {
        match self {
            Color::Orange => Some([Color::Red, Color::Yellow]),
            Color::Purple => Some([Color::Red, Color::Blue]),
            Color::Green => Some([Color::Yellow, Color::Blue]),
            _ => None,
        }
    }

    /// Paint `incoming` over `self`.
    ///
    /// Not associative: layering order matters. Secondaries absorb their own
    /// primaries; anything else that is not a primary pair turns Brown.
    pub fn mix(self, incoming: Color) -> Color {
        use Color::*;

        if self == Empty {
            return incoming;
        }
        if self == incoming {
            return self;
        }

        match (self, incoming) {
            (Red, Yellow) | (Yellow, Red) => Orange,
            (Red, Blue) | (Blue, Red) => Purple,
            (Yellow, Blue) | (Blue, Yellow) => Green,
            (base, paint) if base.components().is_some_and(|c| c.contains(&paint)) => base,
            _ => Brown,
        }
    }
}

/// Free-function form of [`Color::mix`]
#[inline]
pub fn mix_colors(base: Color, incoming: Color) -> Color {
    base.mix(incoming)
}
