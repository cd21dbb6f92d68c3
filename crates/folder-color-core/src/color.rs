//! The fixed folder color palette and the implicit colors of well-known themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A folder color.
///
/// The palette is closed: theme packages ship one `<base>-<Color>` variant
/// per entry, and the color name is part of that directory name. Declaration
/// order is the order colors are offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Sand,
    Beige,
    Yellow,
    Orange,
    Brown,
    Red,
    Purple,
    Pink,
    Blue,
    Cyan,
    Aqua,
    Teal,
    Green,
    White,
    Grey,
    Black,
}

impl Color {
    /// Every color, in display order.
    pub const ALL: [Color; 16] = [
        Color::Sand,
        Color::Beige,
        Color::Yellow,
        Color::Orange,
        Color::Brown,
        Color::Red,
        Color::Purple,
        Color::Pink,
        Color::Blue,
        Color::Cyan,
        Color::Aqua,
        Color::Teal,
        Color::Green,
        Color::White,
        Color::Grey,
        Color::Black,
    ];

    /// The color name as it appears in theme directory names.
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Sand => "Sand",
            Color::Beige => "Beige",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Brown => "Brown",
            Color::Red => "Red",
            Color::Purple => "Purple",
            Color::Pink => "Pink",
            Color::Blue => "Blue",
            Color::Cyan => "Cyan",
            Color::Aqua => "Aqua",
            Color::Teal => "Teal",
            Color::Green => "Green",
            Color::White => "White",
            Color::Grey => "Grey",
            Color::Black => "Black",
        }
    }

    /// Suffix a theme name carries when it is this color's variant.
    pub fn theme_suffix(self) -> String {
        format!("-{}", self.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a color name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// Themes whose un-suffixed install already uses a specific folder color.
///
/// Requesting that color for such a theme resolves to the base theme rather
/// than to a `<base>-<Color>` variant that does not exist.
pub const KNOWN_THEMES: &[(&str, Color)] = &[
    ("Mint-X", Color::Green),
    ("Mint-X-Dark", Color::Green),
    ("Mint-Y", Color::Green),
    ("Rave-X-CX", Color::Beige),
    ("Faience", Color::Beige),
    ("gnome", Color::Beige),
    ("Matrinileare", Color::Beige),
    ("menta", Color::Green),
    ("mate", Color::Beige),
    ("oxygen", Color::Blue),
];

/// Look up the implicit color of a base theme name.
pub fn implicit_color(base_name: &str) -> Option<Color> {
    KNOWN_THEMES
        .iter()
        .find(|(name, _)| *name == base_name)
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        assert_eq!(Color::ALL.len(), 16);
        assert_eq!(Color::ALL[0], Color::Sand);
        assert_eq!(Color::ALL[15], Color::Black);
        assert!(Color::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("Blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("grey".parse::<Color>().unwrap(), Color::Grey);
        assert_eq!(" Teal ".parse::<Color>().unwrap(), Color::Teal);
        assert!(matches!(
            "Mauve".parse::<Color>(),
            Err(Error::UnknownColor(name)) if name == "Mauve"
        ));
    }

    #[test]
    fn test_theme_suffix() {
        assert_eq!(Color::Aqua.theme_suffix(), "-Aqua");
        assert_eq!(Color::Aqua.to_string(), "Aqua");
    }

    #[test]
    fn test_implicit_color() {
        assert_eq!(implicit_color("Mint-X"), Some(Color::Green));
        assert_eq!(implicit_color("oxygen"), Some(Color::Blue));
        assert_eq!(implicit_color("mate"), Some(Color::Beige));
        assert_eq!(implicit_color("Adwaita"), None);
        // Lookup is exact.
        assert_eq!(implicit_color("mint-x"), None);
    }
}
