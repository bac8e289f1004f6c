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

extern crate alloc;

use crate::log::error;

/// Runtime Error Codes
#[derive(Debug, PartialEq)]
pub enum ErrorCode {
    /// Error that was not yet mapped
    UnmappedError,

    /// File not found
    FileNotFound,

    /// Marker resource exists but could not be read
    ResourceReadError,

    /// Resource location uses a scheme the scanner cannot open
    UnsupportedLocation(String),

    /// JSON parser error
    JsonParserError,

    /// JSON generator error
    JsonGeneratorError,

    /// Marker resource content is not a valid binding descriptor
    InvalidBindingDescriptor,

    /// Binding name not registered
    UnknownBinding(String),

    /// Binding name already registered
    BindingAlreadyRegistered,

    /// Conversion failed
    ConversionFailed,

    /// Mutex failed
    MutexLockFailed,
}

impl From<std::io::Error> for ErrorCode {
    fn from(cause: std::io::Error) -> Self {
        let kind = cause.kind();
        match kind {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::InvalidData => {
                ErrorCode::ResourceReadError
            }
            _ => {
                error!("unmapped error: {kind}");
                ErrorCode::UnmappedError
            }
        }
    }
}

impl From<alloc::string::FromUtf8Error> for ErrorCode {
    fn from(cause: alloc::string::FromUtf8Error) -> Self {
        error!("UTF-8 conversion failed: {cause:#?}");
        ErrorCode::ConversionFailed
    }
}
