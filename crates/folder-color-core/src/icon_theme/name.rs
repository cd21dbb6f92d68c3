//! Theme name parsing.
//!
//! Color variants of an icon theme are installed as separate themes named
//! `<base>-<Color>`. The naming convention is the only contract theme
//! packages offer, so parsing is plain suffix matching against the palette.

use std::fmt;

use crate::color::{Color, implicit_color};

/// Split a theme name into its base name and color variant.
///
/// Every palette color is tried in declaration order and the last matching
/// `-<Color>` suffix wins. Without a match the whole name is the base.
///
/// A base theme that itself ends in a color word (`Something-Blue`) is
/// indistinguishable from a variant and parses as one.
///
/// # Examples
///
/// ```
/// use folder_color_core::color::Color;
/// use folder_color_core::icon_theme::parse_theme_name;
///
/// assert_eq!(parse_theme_name("Mint-Y"), ("Mint-Y".to_string(), None));
/// assert_eq!(
///     parse_theme_name("Mint-Y-Blue"),
///     ("Mint-Y".to_string(), Some(Color::Blue))
/// );
/// ```
pub fn parse_theme_name(name: &str) -> (String, Option<Color>) {
    let mut base_name = name;
    let mut color_variant = None;

    for color in Color::ALL {
        if let Some(base) = name.strip_suffix(color.theme_suffix().as_str()) {
            base_name = base;
            color_variant = Some(color);
        }
    }

    (base_name.to_string(), color_variant)
}

/// Identity of an icon theme: its base name and optional color variant.
///
/// Two keys that compare equal denote the same installed theme, so all
/// memoized theme data is keyed by this pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeKey {
    base_name: String,
    color_variant: Option<Color>,
}

impl ThemeKey {
    /// Create a key from its parts.
    pub fn new(base_name: impl Into<String>, color_variant: Option<Color>) -> Self {
        Self {
            base_name: base_name.into(),
            color_variant,
        }
    }

    /// Parse a raw theme name such as `Mint-Y-Blue`.
    pub fn parse(name: &str) -> Self {
        let (base_name, color_variant) = parse_theme_name(name.trim());
        Self {
            base_name,
            color_variant,
        }
    }

    /// The theme's name without color suffix.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The explicit color variant, if any.
    pub fn color_variant(&self) -> Option<Color> {
        self.color_variant
    }

    /// The theme's folder color: its variant, or the implicit color of a
    /// well-known base theme.
    pub fn color(&self) -> Option<Color> {
        self.color_variant.or_else(|| implicit_color(&self.base_name))
    }

    /// Key of the same base theme in another variant.
    pub fn with_variant(&self, color_variant: Option<Color>) -> Self {
        Self::new(self.base_name.clone(), color_variant)
    }

    /// The theme playing this theme's role in another color.
    ///
    /// - the theme itself when it already has `color`;
    /// - the un-suffixed base theme when `color` is the base theme's
    ///   implicit color;
    /// - `<base>-<color>` otherwise.
    pub fn sibling(&self, color: Color) -> Self {
        if self.color() == Some(color) {
            self.clone()
        } else if implicit_color(&self.base_name) == Some(color) {
            self.with_variant(None)
        } else {
            self.with_variant(Some(color))
        }
    }

    /// Directory name of the theme under an icon root.
    pub fn dir_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color_variant {
            Some(color) => write!(f, "{}-{}", self.base_name, color),
            None => f.write_str(&self.base_name),
        }
    }
}

impl From<&str> for ThemeKey {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_theme() {
        assert_eq!(parse_theme_name("Mint-Y"), ("Mint-Y".to_string(), None));
        assert_eq!(parse_theme_name("Adwaita"), ("Adwaita".to_string(), None));
        assert_eq!(parse_theme_name(""), (String::new(), None));
    }

    #[test]
    fn test_parse_color_variant() {
        assert_eq!(
            parse_theme_name("Mint-Y-Blue"),
            ("Mint-Y".to_string(), Some(Color::Blue))
        );
        assert_eq!(
            parse_theme_name("Mint-X-Dark-Sand"),
            ("Mint-X-Dark".to_string(), Some(Color::Sand))
        );
    }

    #[test]
    fn test_parse_requires_hyphen_and_exact_case() {
        assert_eq!(parse_theme_name("MintBlue"), ("MintBlue".to_string(), None));
        assert_eq!(parse_theme_name("Mint-blue"), ("Mint-blue".to_string(), None));
        assert_eq!(parse_theme_name("Blue"), ("Blue".to_string(), None));
    }

    #[test]
    fn test_parse_ambiguous_base_name() {
        // A theme literally named "Something-Blue" reads as a Blue variant.
        assert_eq!(
            parse_theme_name("Something-Blue"),
            ("Something".to_string(), Some(Color::Blue))
        );
        // Only the trailing color is stripped.
        assert_eq!(
            parse_theme_name("Red-Theme-Green"),
            ("Red-Theme".to_string(), Some(Color::Green))
        );
    }

    #[test]
    fn test_parse_suffix_roundtrip() {
        let names = [
            "Mint-Y",
            "Mint-Y-Blue",
            "Mint-X-Dark-Grey",
            "a-b-c-Black",
            "-Pink",
            "hicolor",
        ];
        for name in names {
            let (base, color) = parse_theme_name(name);
            match color {
                Some(color) => {
                    assert!(name.ends_with(&format!("{}-{}", base, color)));
                    assert_eq!(format!("{}-{}", base, color), name);
                }
                None => assert_eq!(base, name),
            }
        }
    }

    #[test]
    fn test_theme_key_display() {
        assert_eq!(ThemeKey::parse("Mint-Y-Blue").to_string(), "Mint-Y-Blue");
        assert_eq!(ThemeKey::parse("Mint-Y").dir_name(), "Mint-Y");
        assert_eq!(ThemeKey::parse(" hicolor ").base_name(), "hicolor");
    }

    #[test]
    fn test_theme_key_color() {
        assert_eq!(ThemeKey::parse("Mint-X").color(), Some(Color::Green));
        assert_eq!(ThemeKey::parse("Mint-X-Red").color(), Some(Color::Red));
        assert_eq!(ThemeKey::parse("Adwaita").color(), None);
    }

    #[test]
    fn test_sibling() {
        let mint_x = ThemeKey::parse("Mint-X");
        assert_eq!(mint_x.sibling(Color::Green), mint_x);
        assert_eq!(mint_x.sibling(Color::Blue), ThemeKey::parse("Mint-X-Blue"));

        // A variant of a known theme goes back to the base for its implicit color.
        let mint_x_red = ThemeKey::parse("Mint-X-Red");
        assert_eq!(mint_x_red.sibling(Color::Red), mint_x_red);
        assert_eq!(mint_x_red.sibling(Color::Green), mint_x);
        assert_eq!(mint_x_red.sibling(Color::Sand), ThemeKey::parse("Mint-X-Sand"));

        // Unknown themes have no implicit color.
        let adwaita = ThemeKey::parse("Adwaita");
        assert_eq!(adwaita.sibling(Color::Green), ThemeKey::parse("Adwaita-Green"));
    }

    #[test]
    fn test_theme_key_identity() {
        assert_eq!(
            ThemeKey::parse("Mint-Y-Blue"),
            ThemeKey::new("Mint-Y", Some(Color::Blue))
        );
        assert_ne!(ThemeKey::parse("Mint-Y-Blue"), ThemeKey::parse("Mint-Y"));
        assert_eq!(
            ThemeKey::parse("Mint-Y-Blue").with_variant(None),
            ThemeKey::parse("Mint-Y")
        );
    }
}
