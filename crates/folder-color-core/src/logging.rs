//! Logging facilities for folder color resolution.
//!
//! All diagnostics go through the `tracing` crate. Nothing is printed unless
//! the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("folder_color_core::resolver=debug")
//!     .init();
//! ```
//!
//! Resolution never fails loudly. Missing icons are reported at `debug`,
//! unreadable theme descriptors at `info` and cyclic inheritance at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate-wide target.
    pub const CORE: &str = "folder_color_core";
    /// Inheritance walk and icon probing.
    pub const RESOLVER: &str = "folder_color_core::resolver";
    /// `index.theme` loading.
    pub const DESCRIPTOR: &str = "folder_color_core::descriptor";
    /// Special directory detection.
    pub const FOLDERS: &str = "folder_color_core::folders";
    /// Colored icon lookup.
    pub const LOCATOR: &str = "folder_color_core::locator";
}

/// Span names used for tracing.
pub mod span_names {
    /// Target of every resolution span; the `operation` field tells them apart.
    pub const RESOLVE: &str = "folder_color_core::resolve";
    /// Computing the supported colors of a theme.
    pub const SUPPORTED_COLORS: &str = "supported_colors";
}

/// RAII guard for a timed resolution span.
///
/// The span stays entered until the guard is dropped, so a subscriber with
/// span timing enabled reports how long the enclosed lookup took.
///
/// ```ignore
/// let _span = ResolveSpan::new(span_names::SUPPORTED_COLORS, "Mint-Y-Blue");
/// // probe icons...
/// ```
pub struct ResolveSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl ResolveSpan {
    /// Enter a span for `operation` on `theme`.
    ///
    /// The span target is always [`span_names::RESOLVE`]; `operation` is
    /// recorded as a field.
    pub fn new(operation: &'static str, theme: &str) -> Self {
        let span = tracing::debug_span!(
            target: span_names::RESOLVE,
            "resolve",
            operation,
            theme
        );
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_share_crate_prefix() {
        for target in [
            targets::RESOLVER,
            targets::DESCRIPTOR,
            targets::FOLDERS,
            targets::LOCATOR,
        ] {
            assert!(target.starts_with(targets::CORE));
        }
    }

    #[test]
    fn test_resolve_span_metadata() {
        let subscriber = tracing_subscriber::registry();
        tracing::subscriber::with_default(subscriber, || {
            let _span = ResolveSpan::new(span_names::SUPPORTED_COLORS, "Mint-Y");
            let current = tracing::Span::current();
            let metadata = current.metadata().unwrap();
            assert_eq!(metadata.target(), span_names::RESOLVE);
            assert_eq!(metadata.name(), "resolve");
            assert!(metadata.fields().field("operation").is_some());
            assert!(metadata.fields().field("theme").is_some());
        });
    }

    #[test]
    fn test_resolve_span_without_subscriber() {
        let _span = ResolveSpan::new("test_operation", "Mint-Y");
    }
}
