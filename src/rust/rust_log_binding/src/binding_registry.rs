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

use crate::binding_descriptor::BindingDescriptor;
use crate::error_code::ErrorCode;
use crate::log::debug;
use crate::logger::LoggerFactory;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

/// Function providing logger factory.
type LoggerFactoryFn = fn() -> Box<dyn LoggerFactory>;

/// Map containing names as strings and factory-creating functions as values.
type BindingMap = HashMap<String, LoggerFactoryFn>;

/// Provide map containing default bindings.
fn default_bindings() -> BindingMap {
    let mut bindings: BindingMap = HashMap::new();
    // Register NOP binding.
    {
        use crate::nop_logger::NopLoggerFactory;
        bindings.insert("nop".to_string(), || Box::new(NopLoggerFactory::default()));
    }
    // Register simple binding.
    {
        use crate::simple_logger::SimpleLoggerFactory;
        bindings.insert("simple".to_string(), || {
            Box::new(SimpleLoggerFactory::from_env())
        });
    }
    // Register `log` crate binding.
    {
        use crate::log_crate_logger::LogCrateLoggerFactory;
        bindings.insert("log".to_string(), || Box::new(LogCrateLoggerFactory));
    }

    bindings
}

/// Pool containing registered bindings.
static REGISTERED_BINDINGS: LazyLock<Mutex<BindingMap>> =
    LazyLock::new(|| Mutex::new(default_bindings()));

impl From<PoisonError<MutexGuard<'_, BindingMap>>> for ErrorCode {
    fn from(_cause: PoisonError<MutexGuard<'_, BindingMap>>) -> Self {
        ErrorCode::MutexLockFailed
    }
}

/// Logger binding registry.
pub struct BindingRegistry;

impl BindingRegistry {
    /// Get logger factory of registered binding using name.
    pub fn from_name(name: &str) -> Result<Box<dyn LoggerFactory>, ErrorCode> {
        let registered_bindings = REGISTERED_BINDINGS.lock()?;

        match registered_bindings.get(name) {
            Some(factory_fn) => {
                debug!("instantiating binding: {name}");
                Ok(factory_fn())
            }
            None => Err(ErrorCode::UnknownBinding(name.to_string())),
        }
    }

    /// Get logger factory of registered binding using 'binding' field from descriptor.
    pub fn from_descriptor(
        descriptor: &BindingDescriptor,
    ) -> Result<Box<dyn LoggerFactory>, ErrorCode> {
        Self::from_name(&descriptor.binding)
    }

    /// Check binding is registered.
    pub fn is_registered(name: &str) -> Result<bool, ErrorCode> {
        let registered_bindings = REGISTERED_BINDINGS.lock()?;
        Ok(registered_bindings.contains_key(name))
    }

    /// Register new binding.
    pub fn register(name: &str, factory_fn: LoggerFactoryFn) -> Result<(), ErrorCode> {
        let mut registered_bindings = REGISTERED_BINDINGS.lock()?;

        // Check binding already registered.
        if registered_bindings.contains_key(name) {
            return Err(ErrorCode::BindingAlreadyRegistered);
        }

        // Insert binding.
        registered_bindings.insert(name.to_string(), factory_fn);
        Ok(())
    }
}
