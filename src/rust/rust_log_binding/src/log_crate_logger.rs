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

//! Binding forwarding to the `log` crate.
//! Logger name is used as record target.

use crate::logger::{Level, Logger, LoggerFactory};
use ::log::{Metadata, Record};
use core::fmt;
use std::sync::Arc;

pub struct LogCrateLogger {
    name: String,
}

impl Logger for LogCrateLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: Level) -> bool {
        level <= ::log::max_level()
            && ::log::logger().enabled(&Metadata::builder().level(level).target(&self.name).build())
    }

    fn log(&self, level: Level, args: &fmt::Arguments<'_>) {
        ::log::logger().log(
            &Record::builder()
                .args(*args)
                .level(level)
                .target(&self.name)
                .build(),
        );
    }
}

#[derive(Default)]
pub struct LogCrateLoggerFactory;

impl LoggerFactory for LogCrateLoggerFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(LogCrateLogger {
            name: name.to_string(),
        })
    }
}
