//! Parsing of a theme's `index.theme` descriptor.
//!
//! Only two things matter for folder icons: the `Inherits` list of the
//! `[Icon Theme]` section and the `Type` of every `places/<size>` section.
//! Sections are kept in file order since size tie-breaking depends on it.

use std::fs;
use std::path::Path;

use ini::{Ini, ParseOption, Properties};

use super::size::{DeclaredSize, IconSize, SizeType};

/// Descriptor file name inside a theme's install root.
pub const INDEX_FILE: &str = "index.theme";

/// Main section of a descriptor.
pub const ICON_THEME_SECTION: &str = "Icon Theme";

/// Icon context holding folder icons.
pub const PLACES_CONTEXT: &str = "places";

/// Parsed contents of an `index.theme` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Human-readable theme name
    pub name: Option<String>,
    /// Parent theme names, in declaration order
    pub inherits: Vec<String>,
    /// Declared `places` size directories, in file order
    pub sizes: Vec<DeclaredSize>,
}

impl ThemeDescriptor {
    /// Load a descriptor file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| crate::Error::io(path, e))?;
        Self::parse(&content).map_err(|e| crate::Error::descriptor(path, e.to_string()))
    }

    /// Load a descriptor, treating a missing or unreadable file as a theme
    /// with no parents and no declared sizes.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::info!(
                    target: crate::targets::DESCRIPTOR,
                    "Could not read {}: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Parse descriptor text.
    pub fn parse(content: &str) -> Result<Self, ini::ParseError> {
        // Comments and names in real themes contain backslashes and quotes.
        let option = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, option)?;

        let mut descriptor = Self::default();

        if let Some(section) = ini.section(Some(ICON_THEME_SECTION)) {
            descriptor.name = property(section, "Name").map(|s| s.trim().to_string());
            if let Some(inherits) = property(section, "Inherits") {
                descriptor.inherits = inherits
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }

        for (name, props) in ini.iter() {
            let Some(segment) = name.and_then(places_segment) else {
                continue;
            };
            let declared_type = property(props, "Type").map(SizeType::parse);
            let size = DeclaredSize::from_dir_segment(segment, declared_type.unwrap_or_default())
                .map(|size| match (declared_type, size.size) {
                    // An untyped scalable directory holds vector icons.
                    (None, IconSize::Scalable) => DeclaredSize {
                        size_type: SizeType::Scalable,
                        ..size
                    },
                    _ => size,
                });
            match size {
                Some(size) if !descriptor.sizes.contains(&size) => descriptor.sizes.push(size),
                Some(_) => {}
                None => tracing::debug!(
                    target: crate::targets::DESCRIPTOR,
                    "Ignoring size section [{}]",
                    name.unwrap_or_default()
                ),
            }
        }

        Ok(descriptor)
    }

    /// Whether the theme declares any parent.
    pub fn has_parents(&self) -> bool {
        !self.inherits.is_empty()
    }
}

/// Value of a key, matched case-insensitively.
fn property<'a>(props: &'a Properties, key: &str) -> Option<&'a str> {
    props
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

/// Size segment of a `places/<segment>` section name.
fn places_segment(section: &str) -> Option<&str> {
    let segment = section.strip_prefix(PLACES_CONTEXT)?.strip_prefix('/')?;
    (!segment.is_empty() && !segment.contains('/')).then_some(segment)
}
