//! Icon sizes declared by a theme and best-fit size selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A size directory of a theme's `places` context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    /// Raster icons of a fixed pixel dimension (`places/48`).
    Pixels(u32),
    /// Vector icons usable at any size (`places/scalable`).
    Scalable,
}

impl IconSize {
    /// Parse a size directory name such as `48` or `scalable`.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("scalable") {
            return Some(IconSize::Scalable);
        }
        match name.parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(pixels) => Some(IconSize::Pixels(pixels)),
        }
    }

    /// Pixel dimension, if this is not the scalable directory.
    pub fn pixels(self) -> Option<u32> {
        match self {
            IconSize::Pixels(pixels) => Some(pixels),
            IconSize::Scalable => None,
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSize::Pixels(pixels) => write!(f, "{}", pixels),
            IconSize::Scalable => f.write_str("scalable"),
        }
    }
}

/// Size type of a declared directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeType {
    /// Fixed size icons - must match exactly
    Fixed,
    /// Scalable icons (typically SVG)
    Scalable,
    /// Threshold-based sizing, treated like a fixed size when picking the
    /// closest directory
    #[default]
    Threshold,
}

impl SizeType {
    /// Parse an index.theme `Type` value.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "fixed" => SizeType::Fixed,
            "scalable" => SizeType::Scalable,
            _ => SizeType::Threshold,
        }
    }
}

/// One size directory declared in a theme descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclaredSize {
    /// Directory under `places/`
    pub size: IconSize,
    /// Scale factor (1 for normal, 2 for HiDPI, etc.)
    pub scale: u32,
    /// Declared size type
    pub size_type: SizeType,
}

impl DeclaredSize {
    /// Declare a scale-1 directory.
    pub fn new(size: IconSize, size_type: SizeType) -> Self {
        Self {
            size,
            scale: 1,
            size_type,
        }
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Parse a `places/<N>` or `places/<N>@<S>x` directory segment.
    pub fn from_dir_segment(segment: &str, size_type: SizeType) -> Option<Self> {
        let (size, scale) = match segment.split_once('@') {
            Some((size, scale)) => {
                let scale = scale.strip_suffix('x')?.parse::<u32>().ok()?;
                (size, scale)
            }
            None => (segment, 1),
        };
        if scale == 0 {
            return None;
        }
        Some(Self::new(IconSize::from_dir_name(size)?, size_type).with_scale(scale))
    }

    /// Directory path relative to the theme root.
    pub fn dir_path(&self, context: &str) -> String {
        if self.scale == 1 {
            format!("{}/{}", context, self.size)
        } else {
            format!("{}/{}@{}x", context, self.size, self.scale)
        }
    }

    /// Numeric distance to a target size; `None` for directories without a
    /// pixel dimension.
    pub fn distance(&self, target: u32) -> Option<u32> {
        self.size.pixels().map(|pixels| pixels.abs_diff(target))
    }
}

/// How to break ties between equally close declared sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeTieBreak {
    /// First candidate in descriptor file order wins.
    #[default]
    FileOrder,
    /// Smallest candidate wins.
    Ascending,
}

/// Pick the declared size that best fits a desired pixel size.
///
/// Only directories declared for `scale` are considered; when there are
/// none, scale-1 directories are used instead. Among those:
///
/// 1. the first directory of type `Scalable`, since vector assets fit any size;
/// 2. otherwise a directory of exactly the desired size;
/// 3. otherwise the directory with the smallest distance, ties broken by
///    `tie_break`.
pub fn select_best_size(
    declared: &[DeclaredSize],
    desired: u32,
    scale: u32,
    tie_break: SizeTieBreak,
) -> Option<DeclaredSize> {
    let mut candidates: Vec<DeclaredSize> =
        declared.iter().copied().filter(|d| d.scale == scale).collect();
    if candidates.is_empty() && scale != 1 {
        candidates = declared.iter().copied().filter(|d| d.scale == 1).collect();
    }

    if let Some(scalable) = candidates
        .iter()
        .find(|d| d.size_type == SizeType::Scalable)
    {
        return Some(*scalable);
    }

    if let Some(exact) = candidates
        .iter()
        .find(|d| d.size == IconSize::Pixels(desired))
    {
        return Some(*exact);
    }

    if tie_break == SizeTieBreak::Ascending {
        candidates.sort_by_key(|d| d.size.pixels());
    }

    // min_by_key keeps the first of equal minima.
    candidates
        .into_iter()
        .filter_map(|d| d.distance(desired).map(|distance| (distance, d)))
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, d)| d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(pixels: u32) -> DeclaredSize {
        DeclaredSize::new(IconSize::Pixels(pixels), SizeType::Fixed)
    }

    #[test]
    fn test_icon_size_from_dir_name() {
        assert_eq!(IconSize::from_dir_name("48"), Some(IconSize::Pixels(48)));
        assert_eq!(IconSize::from_dir_name("scalable"), Some(IconSize::Scalable));
        assert_eq!(IconSize::from_dir_name("0"), None);
        assert_eq!(IconSize::from_dir_name("48x48"), None);
        assert_eq!(IconSize::Pixels(24).to_string(), "24");
        assert_eq!(IconSize::Scalable.to_string(), "scalable");
    }

    #[test]
    fn test_size_type_parse() {
        assert_eq!(SizeType::parse("Fixed"), SizeType::Fixed);
        assert_eq!(SizeType::parse("scalable"), SizeType::Scalable);
        assert_eq!(SizeType::parse("Threshold"), SizeType::Threshold);
        assert_eq!(SizeType::parse("bogus"), SizeType::Threshold);
    }

    #[test]
    fn test_declared_size_segment() {
        let plain = DeclaredSize::from_dir_segment("48", SizeType::Fixed).unwrap();
        assert_eq!(plain, fixed(48));
        assert_eq!(plain.dir_path("places"), "places/48");

        let hidpi = DeclaredSize::from_dir_segment("48@2x", SizeType::Fixed).unwrap();
        assert_eq!(hidpi.scale, 2);
        assert_eq!(hidpi.dir_path("places"), "places/48@2x");

        assert!(DeclaredSize::from_dir_segment("48@x", SizeType::Fixed).is_none());
        assert!(DeclaredSize::from_dir_segment("48@0x", SizeType::Fixed).is_none());
        assert!(DeclaredSize::from_dir_segment("symbolic", SizeType::Fixed).is_none());
    }

    #[test]
    fn test_scalable_wins_outright() {
        let declared = [
            fixed(16),
            fixed(48),
            DeclaredSize::new(IconSize::Scalable, SizeType::Scalable),
        ];
        for desired in [16, 48, 64, 512] {
            let best = select_best_size(&declared, desired, 1, SizeTieBreak::FileOrder).unwrap();
            assert_eq!(best.size, IconSize::Scalable);
        }
    }

    #[test]
    fn test_exact_size_preferred() {
        let declared = [fixed(16), fixed(24), fixed(48)];
        let best = select_best_size(&declared, 24, 1, SizeTieBreak::FileOrder).unwrap();
        assert_eq!(best, fixed(24));
    }

    #[test]
    fn test_closest_size() {
        let declared = [fixed(16), fixed(96)];
        let best = select_best_size(&declared, 48, 1, SizeTieBreak::FileOrder).unwrap();
        assert_eq!(best, fixed(16));

        let best = select_best_size(&declared, 80, 1, SizeTieBreak::FileOrder).unwrap();
        assert_eq!(best, fixed(96));
    }

    #[test]
    fn test_tie_break_policies() {
        // 32 and 64 are both 16 away from 48.
        let declared = [fixed(64), fixed(32)];

        let best = select_best_size(&declared, 48, 1, SizeTieBreak::FileOrder).unwrap();
        assert_eq!(best, fixed(64));

        let best = select_best_size(&declared, 48, 1, SizeTieBreak::Ascending).unwrap();
        assert_eq!(best, fixed(32));
    }

    #[test]
    fn test_scale_filtering() {
        let declared = [fixed(48), fixed(24).with_scale(2)];

        let best = select_best_size(&declared, 48, 2, SizeTieBreak::FileOrder).unwrap();
        assert_eq!(best, fixed(24).with_scale(2));

        // No scale-3 directory: fall back to scale 1.
        let best = select_best_size(&declared, 48, 3, SizeTieBreak::FileOrder).unwrap();
        assert_eq!(best, fixed(48));
    }

    #[test]
    fn test_nothing_declared() {
        assert_eq!(select_best_size(&[], 48, 1, SizeTieBreak::FileOrder), None);
    }
}
