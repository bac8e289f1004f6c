// Copyright (c) 2025 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0

use crate::binding_scanner::{BindingScanner, ResourceLocation};
use crate::error_code::ErrorCode;
use crate::log::{debug, warn};
use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable containing the search path.
/// Uses platform path-list syntax (`:` on Unix, `;` on Windows).
pub const SEARCH_PATH_ENV: &str = "LOG_BINDING_PATH";

/// Scheme of locations produced by `SearchPathScanner`.
const FILE_SCHEME: &str = "file://";

/// Bytes escaped in location paths.
/// Non-ASCII bytes are always escaped.
const PATH_ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Raw bytes of a path.
#[cfg(unix)]
fn path_to_bytes(path: &Path) -> Result<Cow<'_, [u8]>, ErrorCode> {
    use std::os::unix::ffi::OsStrExt;
    Ok(Cow::Borrowed(path.as_os_str().as_bytes()))
}

/// Raw bytes of a path.
/// Paths not representable as UTF-8 are rejected.
#[cfg(not(unix))]
fn path_to_bytes(path: &Path) -> Result<Cow<'_, [u8]>, ErrorCode> {
    match path.to_str() {
        Some(path) => Ok(Cow::Borrowed(path.as_bytes())),
        None => Err(ErrorCode::ConversionFailed),
    }
}

#[cfg(unix)]
fn bytes_to_path(bytes: Vec<u8>) -> Result<PathBuf, ErrorCode> {
    use std::os::unix::ffi::OsStringExt;
    Ok(PathBuf::from(OsString::from_vec(bytes)))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: Vec<u8>) -> Result<PathBuf, ErrorCode> {
    Ok(PathBuf::from(OsString::from(String::from_utf8(bytes)?)))
}

/// Builder for `SearchPathScanner`.
pub struct SearchPathScannerBuilder {
    search_path: Vec<PathBuf>,
}

impl SearchPathScannerBuilder {
    pub fn new() -> Self {
        Self {
            search_path: Vec::new(),
        }
    }

    /// Replace search path.
    pub fn search_path(mut self, search_path: Vec<PathBuf>) -> Self {
        self.search_path = search_path;
        self
    }

    /// Append single search path entry.
    pub fn path(mut self, path: PathBuf) -> Self {
        self.search_path.push(path);
        self
    }

    pub fn build(self) -> SearchPathScanner {
        SearchPathScanner {
            search_path: self.search_path,
        }
    }
}

impl Default for SearchPathScannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Binding scanner over an ordered list of directories.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchPathScanner {
    search_path: Vec<PathBuf>,
}

impl SearchPathScanner {
    /// Create scanner using `LOG_BINDING_PATH`.
    /// Empty search path is used if variable is not set.
    pub fn from_env() -> Self {
        let search_path = match std::env::var_os(SEARCH_PATH_ENV) {
            Some(value) => std::env::split_paths(&value).collect(),
            None => Vec::new(),
        };
        SearchPathScannerBuilder::new()
            .search_path(search_path)
            .build()
    }

    /// Directories scanned, in search order.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Get marker path for given search path entry.
    pub fn marker_path(entry: &Path, marker: &str) -> PathBuf {
        entry.join(marker)
    }

    /// Convert file path to `file://` location.
    /// Path bytes are percent-encoded, so any path converts back unchanged.
    fn to_location(path: &Path) -> Result<ResourceLocation, ErrorCode> {
        let absolute_path = std::path::absolute(path)?;
        let bytes = path_to_bytes(&absolute_path)?;
        Ok(ResourceLocation::new(format!(
            "{FILE_SCHEME}{}",
            percent_encode(&bytes, PATH_ESCAPE_SET)
        )))
    }

    /// Convert `file://` location back to file path.
    fn to_path(location: &ResourceLocation) -> Result<PathBuf, ErrorCode> {
        match location.as_str().strip_prefix(FILE_SCHEME) {
            Some(path) => bytes_to_path(percent_decode_str(path).collect()),
            None => Err(ErrorCode::UnsupportedLocation(location.to_string())),
        }
    }
}

impl BindingScanner for SearchPathScanner {
    /// Entries without marker are skipped.
    /// Entries failing with I/O errors are logged and skipped, remaining entries are still scanned.
    fn find_resources(&self, marker: &str) -> Result<Vec<ResourceLocation>, ErrorCode> {
        let mut locations = Vec::new();

        for entry in self.search_path.iter() {
            let marker_path = Self::marker_path(entry, marker);
            match std::fs::metadata(&marker_path) {
                Ok(metadata) if metadata.is_file() => match Self::to_location(&marker_path) {
                    Ok(location) => {
                        debug!("marker found: {location}");
                        locations.push(location);
                    }
                    Err(e) => warn!("skipping marker {}: {e:?}", marker_path.display()),
                },
                Ok(_) => debug!("marker is not a file: {}", marker_path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => warn!("skipping search path entry {}: {e}", entry.display()),
            }
        }

        Ok(locations)
    }

    fn read_resource(&self, location: &ResourceLocation) -> Result<String, ErrorCode> {
        let path = Self::to_path(location)?;
        let content = std::fs::read_to_string(path)?;
        Ok(content)
    }
}

#[cfg(test)]
mod search_path_scanner_tests {
    use crate::binding_resolver::MARKER_RESOURCE;
    use crate::binding_scanner::{BindingScanner, ResourceLocation};
    use crate::error_code::ErrorCode;
    use crate::search_path_scanner::{SearchPathScanner, SearchPathScannerBuilder};
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    /// Create marker resource in given search path entry.
    fn create_marker(entry: &Path, content: &str) -> PathBuf {
        let marker_path = SearchPathScanner::marker_path(entry, MARKER_RESOURCE);
        std::fs::create_dir_all(marker_path.parent().unwrap()).unwrap();
        std::fs::write(&marker_path, content).unwrap();
        marker_path
    }

    #[test]
    fn test_builder_default() {
        let scanner = SearchPathScannerBuilder::default().build();
        assert!(scanner.search_path().is_empty());
    }

    #[test]
    fn test_builder_path_appends() {
        let scanner = SearchPathScannerBuilder::new()
            .search_path(vec![PathBuf::from("a")])
            .path(PathBuf::from("b"))
            .build();
        assert_eq!(
            scanner.search_path(),
            &[PathBuf::from("a"), PathBuf::from("b")]
        );
    }

    #[test]
    fn test_find_resources_empty_search_path() {
        let scanner = SearchPathScannerBuilder::new().build();
        let locations = scanner.find_resources(MARKER_RESOURCE).unwrap();
        assert!(locations.is_empty());
    }

    #[test]
    fn test_find_resources_single() {
        let dir = tempdir().unwrap();
        let marker_path = create_marker(dir.path(), "{}");

        let scanner = SearchPathScannerBuilder::new()
            .path(dir.path().to_path_buf())
            .build();
        let locations = scanner.find_resources(MARKER_RESOURCE).unwrap();

        assert_eq!(locations.len(), 1);
        assert!(locations[0].as_str().starts_with("file://"));
        assert!(locations[0]
            .as_str()
            .ends_with(&marker_path.display().to_string()));
    }

    #[test]
    fn test_find_resources_search_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        let without_marker = dir.path().join("without_marker");
        std::fs::create_dir_all(&without_marker).unwrap();
        create_marker(&first, "{}");
        create_marker(&second, "{}");

        // Second entry is placed before first on the search path.
        let scanner = SearchPathScannerBuilder::new()
            .path(second.clone())
            .path(without_marker)
            .path(dir.path().join("missing"))
            .path(first.clone())
            .build();
        let locations = scanner.find_resources(MARKER_RESOURCE).unwrap();

        assert_eq!(locations.len(), 2);
        assert!(locations[0].as_str().contains("second"));
        assert!(locations[1].as_str().contains("first"));
    }

    #[test]
    fn test_find_resources_marker_is_directory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(SearchPathScanner::marker_path(dir.path(), MARKER_RESOURCE))
            .unwrap();

        let scanner = SearchPathScannerBuilder::new()
            .path(dir.path().to_path_buf())
            .build();
        assert!(scanner.find_resources(MARKER_RESOURCE).unwrap().is_empty());
    }

    #[test]
    fn test_read_resource_ok() {
        let dir = tempdir().unwrap();
        create_marker(dir.path(), r#"{"binding":"nop"}"#);

        let scanner = SearchPathScannerBuilder::new()
            .path(dir.path().to_path_buf())
            .build();
        let locations = scanner.find_resources(MARKER_RESOURCE).unwrap();
        let content = scanner.read_resource(&locations[0]).unwrap();

        assert_eq!(content, r#"{"binding":"nop"}"#);
    }

    #[test]
    fn test_location_escaped_characters() {
        let dir = tempdir().unwrap();
        let entry = dir.path().join("lib [100%] #1");
        create_marker(&entry, r#"{"binding":"nop"}"#);

        let scanner = SearchPathScannerBuilder::new().path(entry).build();
        let locations = scanner.find_resources(MARKER_RESOURCE).unwrap();

        assert_eq!(locations.len(), 1);
        assert!(locations[0].as_str().contains("lib%20%5B100%25%5D%20%231"));
        let content = scanner.read_resource(&locations[0]).unwrap();
        assert_eq!(content, r#"{"binding":"nop"}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_location_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let entry = dir.path().join(OsStr::from_bytes(b"lib\xff"));
        create_marker(&entry, r#"{"binding":"simple"}"#);

        let scanner = SearchPathScannerBuilder::new().path(entry).build();
        let locations = scanner.find_resources(MARKER_RESOURCE).unwrap();

        assert_eq!(locations.len(), 1);
        assert!(locations[0].as_str().contains("lib%FF"));
        let content = scanner.read_resource(&locations[0]).unwrap();
        assert_eq!(content, r#"{"binding":"simple"}"#);
    }

    #[test]
    fn test_read_resource_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let location = ResourceLocation::new(format!("file://{}", path.display()));

        let scanner = SearchPathScannerBuilder::new().build();
        assert!(scanner
            .read_resource(&location)
            .is_err_and(|e| e == ErrorCode::FileNotFound));
    }

    #[test]
    fn test_read_resource_unsupported_location() {
        let scanner = SearchPathScannerBuilder::new().build();
        let location = ResourceLocation::from("jar:app.jar!/marker.json");
        assert!(scanner
            .read_resource(&location)
            .is_err_and(|e| e == ErrorCode::UnsupportedLocation(location.to_string())));
    }
}
