//! Folder color switching for file managers.
//!
//! This crate wraps [`folder_color_core`] into the service a file manager
//! context-menu extension needs:
//!
//! - **Theme tracking**: [`FolderColorSwitcher::update_theme`] follows the
//!   desktop's icon theme setting
//! - **Menu contents**: [`FolderColorSwitcher::supported_colors`] lists the
//!   colors available for the selected folders
//! - **Icon changes**: [`FolderColorSwitcher::plan_assignments`] gives the
//!   icon file and `file://` URI to store for each folder
//! - **Selections**: [`folder_path_from_uri`] validates selected items
//!
//! Writing folder metadata, redrawing and menu widgets stay with the host.
//!
//! # Example
//!
//! ```no_run
//! use folder_color::{Color, FolderColorSwitcher, IconAssignment, folder_paths_from_uris};
//!
//! fn main() -> folder_color::Result<()> {
//!     folder_color::init_logging()?;
//!     let switcher = FolderColorSwitcher::new("Mint-Y")?;
//!
//!     let Some(folders) = folder_paths_from_uris(["file:///home/user/Music"]) else {
//!         return Ok(());
//!     };
//!
//!     for color in switcher.supported_colors(&folders, 48, 1) {
//!         println!("offer {}", color);
//!     }
//!
//!     for (folder, assignment) in switcher.plan_assignments(Some(Color::Blue), &folders, 48, 1) {
//!         if let IconAssignment::Set { uri, .. } = assignment {
//!             println!("{} -> {}", folder.display(), uri);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod error;
pub mod logging;
pub mod selection;
pub mod settings;
mod switcher;

pub use error::{Result, SwitcherError};
pub use logging::{LOG_ENV_VAR, init_logging};
pub use selection::{file_uri, folder_path_from_uri, folder_paths_from_uris};
pub use settings::{config_path, load_config};
pub use switcher::{FolderColorSwitcher, IconAssignment};

pub use folder_color_core::{Color, FolderKind, LocatorConfig, SpecialDirs};
