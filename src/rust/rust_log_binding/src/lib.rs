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

//! # Logger binding resolution
//!
//! The facade looks up every copy of a well-known marker resource on a search path.
//! The first copy wins and selects the logger implementation (the binding) used for
//! all loggers handed out afterwards. If more than one copy is visible the facade
//! reports every extra location to the diagnostic stream, unless multiple-binding
//! detection is switched off.
//!
//! ## Example
//!
//! ```no_run
//! use rust_log_binding::prelude::*;
//!
//! let resolver = BindingResolverBuilder::new()
//!     .scanner(Box::new(
//!         SearchPathScannerBuilder::new()
//!             .path("/opt/app/lib".into())
//!             .build(),
//!     ))
//!     .detect_multiple_bindings(DetectionToggle::Enabled)
//!     .build();
//!
//! let logger = resolver.resolve("app::server");
//! logger.info("server started");
//! ```
//!
//! ## Configuration
//!
//! * `LOG_BINDING_PATH` - search path used by [`SearchPathScanner::from_env`](search_path_scanner::SearchPathScanner::from_env).
//! * `LOG_BINDING_DETECT_MULTIPLE` - `false` suppresses the multiple-binding warning.
//! * `LOG_BINDING_SIMPLE_LEVEL` - maximum level of the `simple` binding.

mod log;

pub mod binding_descriptor;
pub mod binding_registry;
pub mod binding_resolver;
pub mod binding_scanner;
pub mod detection_toggle;
pub mod error_code;
pub mod log_crate_logger;
pub mod logger;
pub mod nop_logger;
pub mod scanner_mock;
pub mod search_path_scanner;
pub mod simple_logger;

/// Commonly used types.
pub mod prelude {
    pub use crate::binding_descriptor::BindingDescriptor;
    pub use crate::binding_registry::BindingRegistry;
    pub use crate::binding_resolver::{
        BindingResolver, BindingResolverBuilder, API_COMPATIBILITY_LIST, MARKER_RESOURCE,
    };
    pub use crate::binding_scanner::{BindingScanner, ResourceLocation};
    pub use crate::detection_toggle::{DetectionToggle, DETECT_MULTIPLE_BINDINGS_ENV};
    pub use crate::error_code::ErrorCode;
    pub use crate::log_crate_logger::LogCrateLoggerFactory;
    pub use crate::logger::{Level, Logger, LoggerFactory, LoggerHandle};
    pub use crate::nop_logger::NopLoggerFactory;
    pub use crate::scanner_mock::{MockDiagnostics, MockScanner};
    pub use crate::search_path_scanner::{
        SearchPathScanner, SearchPathScannerBuilder, SEARCH_PATH_ENV,
    };
    pub use crate::simple_logger::{SimpleLoggerFactory, SIMPLE_LEVEL_ENV};
}
