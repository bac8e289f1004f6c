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

use crate::error_code::ErrorCode;
use core::fmt;

/// Location of a marker resource, e.g. `file:///opt/app/lib/log_binding/static_logger_binder.json`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceLocation(String);

impl ResourceLocation {
    pub fn new<S: Into<String>>(location: S) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceLocation {
    fn from(location: &str) -> Self {
        Self::new(location)
    }
}

impl From<String> for ResourceLocation {
    fn from(location: String) -> Self {
        Self::new(location)
    }
}

/// Binding scanner interface.
/// Lists candidate bindings visible to the facade.
pub trait BindingScanner: Sync + Send {
    /// Find all locations of a marker resource.
    /// Locations are returned in search order, the first one is the binding in use.
    fn find_resources(&self, marker: &str) -> Result<Vec<ResourceLocation>, ErrorCode>;

    /// Read content of a resource found by `find_resources`.
    fn read_resource(&self, location: &ResourceLocation) -> Result<String, ErrorCode>;
}
