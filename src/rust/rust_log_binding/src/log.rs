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

//! Logging module.
//! Utilizes `"LOGB"` target by default.
//!
//! Internal messages only. Diagnostics meant for the user of the facade
//! (multiple bindings, NOP fallback) go to the resolver's diagnostic stream.

#![allow(unused_macros)]

pub(crate) const CONTEXT: &str = "LOGB";

/// Proxy for `log::error!`.
#[cfg(feature = "logging")]
#[clippy::format_args]
macro_rules! error {
    ($($arg:tt)+) => (::log::error!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::warn!`.
#[cfg(feature = "logging")]
#[clippy::format_args]
macro_rules! warning {
    ($($arg:tt)+) => (::log::warn!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::info!`.
#[cfg(feature = "logging")]
#[clippy::format_args]
macro_rules! info {
    ($($arg:tt)+) => (::log::info!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::debug!`.
#[cfg(feature = "logging")]
#[clippy::format_args]
macro_rules! debug {
    ($($arg:tt)+) => (::log::debug!(target: $crate::log::CONTEXT, $($arg)+));
}

/// Proxy for `log::trace!`.
#[cfg(feature = "logging")]
#[clippy::format_args]
macro_rules! trace {
    ($($arg:tt)+) => (::log::trace!(target: $crate::log::CONTEXT, $($arg)+));
}

// Without `logging` the arguments are still type-checked, nothing is emitted.
#[cfg(not(feature = "logging"))]
macro_rules! discard {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! error {
    ($($arg:tt)+) => ($crate::log::discard!($($arg)+));
}

#[cfg(not(feature = "logging"))]
macro_rules! warning {
    ($($arg:tt)+) => ($crate::log::discard!($($arg)+));
}

#[cfg(not(feature = "logging"))]
macro_rules! info {
    ($($arg:tt)+) => ($crate::log::discard!($($arg)+));
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)+) => ($crate::log::discard!($($arg)+));
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)+) => ($crate::log::discard!($($arg)+));
}

#[cfg(not(feature = "logging"))]
#[allow(unused_imports)]
pub(crate) use discard;

// Export macros from this module (e.g., `crate::log::error`).
// `#[macro_export]` would export them from crate (e.g., `crate::error`).
//
// `warning as warn` is due to `warn` macro name conflicting with `warn` attribute.
#[allow(unused_imports)]
pub(crate) use {debug, error, info, trace, warning as warn};
