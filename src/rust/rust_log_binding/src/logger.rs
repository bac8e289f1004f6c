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

use core::fmt;
use std::sync::Arc;

pub use ::log::Level;

/// Logger interface implemented by bindings.
pub trait Logger: Sync + Send {
    /// Name of the underlying logger.
    fn name(&self) -> &str;

    /// Check messages of given level are emitted.
    fn is_enabled(&self, level: Level) -> bool;

    /// Emit message.
    fn log(&self, level: Level, args: &fmt::Arguments<'_>);
}

/// Logger factory interface implemented by bindings.
pub trait LoggerFactory: Sync + Send {
    /// Get logger for given name.
    fn get_logger(&self, name: &str) -> Arc<dyn Logger>;
}

/// Named logger returned by the resolver.
#[derive(Clone)]
pub struct LoggerHandle {
    /// Requested identifier.
    name: String,

    /// Name of the binding providing the logger.
    binding: String,

    /// Logger provided by the binding.
    logger: Arc<dyn Logger>,
}

impl LoggerHandle {
    pub(crate) fn new(name: &str, binding: &str, logger: Arc<dyn Logger>) -> Self {
        Self {
            name: name.to_string(),
            binding: binding.to_string(),
            logger,
        }
    }

    /// Identifier the handle was resolved for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binding providing the logger.
    pub fn binding(&self) -> &str {
        &self.binding
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.logger.is_enabled(level)
    }

    /// Emit message, skipped if level is not enabled.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.logger.is_enabled(level) {
            self.logger.log(level, &args);
        }
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, format_args!("{msg}"));
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, format_args!("{msg}"));
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, format_args!("{msg}"));
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, format_args!("{msg}"));
    }

    pub fn trace(&self, msg: &str) {
        self.log(Level::Trace, format_args!("{msg}"));
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("name", &self.name)
            .field("binding", &self.binding)
            .finish()
    }
}
