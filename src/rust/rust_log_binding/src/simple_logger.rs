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
use crate::logger::{Level, Logger, LoggerFactory};
use ::log::LevelFilter;
use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Environment variable containing maximum level of `simple` binding.
pub const SIMPLE_LEVEL_ENV: &str = "LOG_BINDING_SIMPLE_LEVEL";

/// Level used if not configured.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Logger writing lines to stderr.
/// Line format: `[<thread>] <LEVEL> <name> - <message>`.
pub struct SimpleLogger {
    name: String,
    max_level: LevelFilter,
}

impl SimpleLogger {
    fn format_line(thread: &str, level: Level, name: &str, args: &fmt::Arguments<'_>) -> String {
        format!("[{thread}] {level} {name} - {args}")
    }
}

impl Logger for SimpleLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }

    fn log(&self, level: Level, args: &fmt::Arguments<'_>) {
        let thread = std::thread::current();
        let thread_name = thread.name().unwrap_or("unnamed");
        eprintln!(
            "{}",
            Self::format_line(thread_name, level, &self.name, args)
        );
    }
}

/// Factory of `SimpleLogger`.
/// Loggers are created once per name and shared afterwards.
pub struct SimpleLoggerFactory {
    max_level: LevelFilter,
    loggers: Mutex<HashMap<String, Arc<SimpleLogger>>>,
}

impl SimpleLoggerFactory {
    pub fn new(max_level: LevelFilter) -> Self {
        Self {
            max_level,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Create factory using level from `LOG_BINDING_SIMPLE_LEVEL`.
    pub fn from_env() -> Self {
        Self::new(Self::parse_level(
            std::env::var(SIMPLE_LEVEL_ENV).ok().as_deref(),
        ))
    }

    /// Parse level name, default level is used for missing or invalid values.
    fn parse_level(value: Option<&str>) -> LevelFilter {
        match value {
            Some(value) => LevelFilter::from_str(value.trim()).unwrap_or_else(|_| {
                warn!("invalid {SIMPLE_LEVEL_ENV} value {value:?}, using {DEFAULT_LEVEL}");
                DEFAULT_LEVEL
            }),
            None => DEFAULT_LEVEL,
        }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }
}

impl LoggerFactory for SimpleLoggerFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        // Map holds only fully constructed loggers, poisoned lock is safe to reuse.
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(SimpleLogger {
                name: name.to_string(),
                max_level: self.max_level,
            })
        });
        logger.clone()
    }
}
