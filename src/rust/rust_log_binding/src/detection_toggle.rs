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

use crate::log::warn;

/// Environment variable controlling multiple-binding detection.
pub const DETECT_MULTIPLE_BINDINGS_ENV: &str = "LOG_BINDING_DETECT_MULTIPLE";

/// Multiple-binding detection setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetectionToggle {
    /// Not configured, detection is enabled.
    #[default]
    Unset,

    /// Explicitly enabled.
    Enabled,

    /// Explicitly disabled, multiple bindings are never reported.
    Disabled,
}

impl DetectionToggle {
    /// Read setting from `LOG_BINDING_DETECT_MULTIPLE`.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(DETECT_MULTIPLE_BINDINGS_ENV).ok().as_deref())
    }

    /// Parse setting value.
    ///
    /// Only `true` (any case) enables detection. Every other present value disables it,
    /// unrecognized values are additionally logged.
    ///
    /// # Parameters
    ///   * `value`: raw setting value, `None` if not set
    ///
    /// # Return Values
    ///   * Parsed toggle
    pub fn from_value(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return DetectionToggle::Unset;
        };

        let value = value.trim();
        if value.eq_ignore_ascii_case("true") {
            DetectionToggle::Enabled
        } else {
            if !value.eq_ignore_ascii_case("false") {
                warn!("unrecognized {DETECT_MULTIPLE_BINDINGS_ENV} value {value:?}, treated as false");
            }
            DetectionToggle::Disabled
        }
    }

    /// Check detection is enabled.
    pub fn is_enabled(self) -> bool {
        self != DetectionToggle::Disabled
    }
}

impl From<bool> for DetectionToggle {
    fn from(enabled: bool) -> Self {
        if enabled {
            DetectionToggle::Enabled
        } else {
            DetectionToggle::Disabled
        }
    }
}

impl From<Option<bool>> for DetectionToggle {
    fn from(enabled: Option<bool>) -> Self {
        enabled.map_or(DetectionToggle::Unset, DetectionToggle::from)
    }
}

#[cfg(test)]
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

#[cfg(test)]
/// Serial execution mutex for tests touching `LOG_BINDING_DETECT_MULTIPLE`.
static SERIAL_TEST: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

#[cfg(test)]
/// Execute test serially with environment variable restored afterwards.
pub(crate) struct EnvGuard<'a> {
    previous: Option<String>,
    _lock: MutexGuard<'a, ()>,
}

#[cfg(test)]
impl EnvGuard<'_> {
    pub(crate) fn set(value: Option<&str>) -> Self {
        let lock = SERIAL_TEST.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = std::env::var(DETECT_MULTIPLE_BINDINGS_ENV).ok();
        match value {
            Some(value) => std::env::set_var(DETECT_MULTIPLE_BINDINGS_ENV, value),
            None => std::env::remove_var(DETECT_MULTIPLE_BINDINGS_ENV),
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

#[cfg(test)]
impl Drop for EnvGuard<'_> {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => std::env::set_var(DETECT_MULTIPLE_BINDINGS_ENV, value),
            None => std::env::remove_var(DETECT_MULTIPLE_BINDINGS_ENV),
        }
    }
}
