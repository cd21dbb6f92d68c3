//! Selected-item URIs and the file URIs written back to the host.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Result, SwitcherError};

/// Local folder path of a selected item's URI.
///
/// Only plain `file` URIs are accepted. A host, query or fragment makes the
/// URI unusable for a custom folder icon and yields `None`; the host should
/// then offer nothing for the whole selection.
pub fn folder_path_from_uri(uri: &str) -> Option<PathBuf> {
    let url = match Url::parse(uri) {
        Ok(url) => url,
        Err(e) => {
            tracing::info!(
                target: folder_color_core::targets::FOLDERS,
                "Ignoring unparsable URI {:?}: {}",
                uri,
                e
            );
            return None;
        }
    };

    if url.scheme() != "file"
        || url.host().is_some()
        || url.query().is_some()
        || url.fragment().is_some()
    {
        tracing::info!(
            target: folder_color_core::targets::FOLDERS,
            "A selected item has an unsupported URI: {}",
            uri
        );
        return None;
    }

    let path = url.to_file_path().ok()?;
    tracing::debug!(
        target: folder_color_core::targets::FOLDERS,
        "Valid path selected: '{}'",
        path.display()
    );
    Some(path)
}

/// Paths of a whole selection, or `None` if any URI is unusable.
pub fn folder_paths_from_uris<'a>(uris: impl IntoIterator<Item = &'a str>) -> Option<Vec<PathBuf>> {
    uris.into_iter().map(folder_path_from_uri).collect()
}

/// `file://` URI of an icon path.
pub fn file_uri(path: &Path) -> Result<Url> {
    Url::from_file_path(path).map_err(|()| SwitcherError::NotAbsolute(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_uri() {
        assert_eq!(
            folder_path_from_uri("file:///home/user/Music"),
            Some(PathBuf::from("/home/user/Music"))
        );
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(
            folder_path_from_uri("file:///home/user/My%20Files"),
            Some(PathBuf::from("/home/user/My Files"))
        );
    }

    #[test]
    fn test_rejected_uris() {
        assert_eq!(folder_path_from_uri("sftp://server/home/user"), None);
        assert_eq!(folder_path_from_uri("file://server/share"), None);
        assert_eq!(folder_path_from_uri("file:///home/user?x=1"), None);
        assert_eq!(folder_path_from_uri("file:///home/user#top"), None);
        assert_eq!(folder_path_from_uri("trash:///"), None);
        assert_eq!(folder_path_from_uri("not a uri"), None);
    }

    #[test]
    fn test_selection_is_all_or_nothing() {
        assert_eq!(
            folder_paths_from_uris(["file:///a", "file:///b"]),
            Some(vec![PathBuf::from("/a"), PathBuf::from("/b")])
        );
        assert_eq!(folder_paths_from_uris(["file:///a", "smb://host/b"]), None);
    }

    #[test]
    fn test_file_uri() {
        let uri = file_uri(Path::new("/usr/share/icons/Mint-Y/places/48/folder.svg")).unwrap();
        assert_eq!(
            uri.as_str(),
            "file:///usr/share/icons/Mint-Y/places/48/folder.svg"
        );
        assert!(file_uri(Path::new("relative.svg")).is_err());
    }
}
