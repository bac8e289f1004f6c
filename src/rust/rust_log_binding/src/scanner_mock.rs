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

use crate::binding_resolver::MARKER_RESOURCE;
use crate::binding_scanner::{BindingScanner, ResourceLocation};
use crate::error_code::ErrorCode;
use std::sync::{Arc, Mutex, PoisonError};

/// Scanner returning a fixed list of resources.
#[derive(Clone, Default)]
pub struct MockScanner {
    /// Locations with their content, in search order.
    pub resources: Vec<(ResourceLocation, String)>,
    pub fail: bool,
}

impl MockScanner {
    pub fn new(resources: Vec<(ResourceLocation, String)>, fail: bool) -> Self {
        MockScanner { resources, fail }
    }

    /// Create scanner with one synthetic marker per binding name.
    pub fn with_bindings(bindings: &[&str]) -> Self {
        let resources = bindings
            .iter()
            .enumerate()
            .map(|(idx, binding)| {
                (
                    ResourceLocation::new(format!("mock://entry_{idx}/{MARKER_RESOURCE}")),
                    format!(r#"{{"binding": "{binding}"}}"#),
                )
            })
            .collect();
        MockScanner {
            resources,
            fail: false,
        }
    }
}

impl BindingScanner for MockScanner {
    fn find_resources(&self, _marker: &str) -> Result<Vec<ResourceLocation>, ErrorCode> {
        if self.fail {
            return Err(ErrorCode::UnmappedError);
        }
        Ok(self
            .resources
            .iter()
            .map(|(location, _)| location.clone())
            .collect())
    }

    fn read_resource(&self, location: &ResourceLocation) -> Result<String, ErrorCode> {
        if self.fail {
            return Err(ErrorCode::UnmappedError);
        }
        self.resources
            .iter()
            .find(|(l, _)| l == location)
            .map(|(_, content)| content.clone())
            .ok_or(ErrorCode::FileNotFound)
    }
}

/// Diagnostic stream capturing written bytes.
/// Clones share the same buffer.
#[derive(Clone, Default)]
pub struct MockDiagnostics {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl MockDiagnostics {
    /// Captured output as text.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Count non-overlapping occurrences of `pattern` in captured output.
    pub fn count(&self, pattern: &str) -> usize {
        self.contents().matches(pattern).count()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl std::io::Write for MockDiagnostics {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
