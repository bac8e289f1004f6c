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

use crate::logger::{Level, Logger, LoggerFactory};
use core::fmt;
use std::sync::Arc;

/// Logger discarding all messages.
pub struct NopLogger;

impl Logger for NopLogger {
    fn name(&self) -> &str {
        "NOP"
    }

    fn is_enabled(&self, _level: Level) -> bool {
        false
    }

    fn log(&self, _level: Level, _args: &fmt::Arguments<'_>) {}
}

/// Factory returning single shared `NopLogger`.
/// Used when no binding could be loaded.
pub struct NopLoggerFactory {
    logger: Arc<NopLogger>,
}

impl Default for NopLoggerFactory {
    fn default() -> Self {
        Self {
            logger: Arc::new(NopLogger),
        }
    }
}

impl LoggerFactory for NopLoggerFactory {
    fn get_logger(&self, _name: &str) -> Arc<dyn Logger> {
        self.logger.clone()
    }
}
