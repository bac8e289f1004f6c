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
use crate::log::error;
use std::collections::HashMap;
use tinyjson::{JsonGenerateError, JsonParseError, JsonValue};

// Example of marker resource content:
// {
//   "binding": "simple",
//   "api_version": "0.1.0"
// }
// Empty document selects default binding.

/// Binding used when marker resource doesn't name one.
pub const DEFAULT_BINDING: &str = "simple";

/// tinyjson::JsonParseError -> ErrorCode::JsonParserError
impl From<JsonParseError> for ErrorCode {
    fn from(cause: JsonParseError) -> Self {
        error!(
            "JSON parser error: line = {}, column = {}",
            cause.line(),
            cause.column()
        );
        ErrorCode::JsonParserError
    }
}

/// tinyjson::JsonGenerateError -> ErrorCode::JsonGeneratorError
impl From<JsonGenerateError> for ErrorCode {
    fn from(cause: JsonGenerateError) -> Self {
        error!("JSON generator error: msg = {}", cause.message());
        ErrorCode::JsonGeneratorError
    }
}

/// Content of a marker resource.
#[derive(Clone, Debug, PartialEq)]
pub struct BindingDescriptor {
    /// Registered binding name.
    pub binding: String,

    /// API version the binding was built against.
    pub api_version: Option<String>,
}

impl BindingDescriptor {
    pub fn new(binding: &str) -> Self {
        Self {
            binding: binding.to_string(),
            api_version: None,
        }
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = Some(api_version.to_string());
        self
    }

    /// Parse marker resource content.
    ///
    /// # Parameters
    ///   * `s`: marker resource content
    ///
    /// # Return Values
    ///   * Ok: parsed descriptor, default one for empty content
    ///   * `ErrorCode::JsonParserError`: content is not valid JSON
    ///   * `ErrorCode::InvalidBindingDescriptor`: not an object or fields of wrong type
    pub fn parse(s: &str) -> Result<Self, ErrorCode> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let json_value: JsonValue = s.parse()?;
        let JsonValue::Object(mut obj) = json_value else {
            return Err(ErrorCode::InvalidBindingDescriptor);
        };

        let binding = match obj.remove("binding") {
            Some(JsonValue::String(binding)) => binding,
            None => DEFAULT_BINDING.to_string(),
            Some(_) => return Err(ErrorCode::InvalidBindingDescriptor),
        };

        let api_version = match obj.remove("api_version") {
            Some(JsonValue::String(api_version)) => Some(api_version),
            Some(JsonValue::Null) | None => None,
            Some(_) => return Err(ErrorCode::InvalidBindingDescriptor),
        };

        Ok(Self {
            binding,
            api_version,
        })
    }

    /// Generate marker resource content.
    pub fn to_json(&self) -> Result<String, ErrorCode> {
        let mut obj = HashMap::new();
        obj.insert(
            "binding".to_string(),
            JsonValue::String(self.binding.clone()),
        );
        if let Some(api_version) = &self.api_version {
            obj.insert(
                "api_version".to_string(),
                JsonValue::String(api_version.clone()),
            );
        }
        JsonValue::Object(obj).stringify().map_err(ErrorCode::from)
    }

    /// Check requested API version against compatibility list.
    /// Descriptor without version is always compatible.
    pub fn is_compatible(&self, compatibility_list: &[&str]) -> bool {
        self.api_version.as_deref().is_none_or(|api_version| {
            compatibility_list
                .iter()
                .any(|prefix| api_version.starts_with(prefix))
        })
    }
}

impl Default for BindingDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_BINDING)
    }
}
