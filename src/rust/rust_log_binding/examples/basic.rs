// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************
//! Example for basic operations.
//! - Creating search path with two bindings.
//! - Resolving loggers with multiple-binding detection enabled and disabled.
//! - Logging through resolved handles.

use rust_log_binding::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Place marker resource for given binding in search path entry.
fn install_binding(entry: &Path, binding: &str) -> Result<PathBuf, ErrorCode> {
    let marker_path = SearchPathScanner::marker_path(entry, MARKER_RESOURCE);
    if let Some(parent) = marker_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let descriptor = BindingDescriptor::new(binding).with_api_version("0.1.0");
    std::fs::write(&marker_path, descriptor.to_json()?)?;
    Ok(marker_path)
}

fn main() -> Result<(), ErrorCode> {
    // Temporary directory.
    let dir = tempdir()?;

    // Two search path entries, both containing a binding.
    let app_lib = dir.path().join("app_lib");
    let vendor_lib = dir.path().join("vendor_lib");
    install_binding(&app_lib, "simple")?;
    install_binding(&vendor_lib, "nop")?;

    let scanner = SearchPathScannerBuilder::new()
        .path(app_lib)
        .path(vendor_lib)
        .build();

    {
        println!("-> detection enabled");

        let resolver = BindingResolverBuilder::new()
            .scanner(Box::new(scanner.clone()))
            .detect_multiple_bindings(DetectionToggle::Enabled)
            .build();

        // Diagnostic is written to stderr, `simple` binding is selected.
        let logger = resolver.resolve("example::basic");
        println!("{:?}", logger);
        logger.info("hello from simple binding");
        logger.debug("not printed, default level is info");

        // Type names can be used as logger names.
        let logger = resolver.resolve_type::<BindingResolver>();
        println!("{}", logger.name());

        println!();
    }

    {
        println!("-> detection disabled");

        let resolver = BindingResolverBuilder::new()
            .scanner(Box::new(scanner))
            .detect_multiple_bindings(DetectionToggle::Disabled)
            .build();

        // No diagnostic this time.
        let logger = resolver.resolve("example::quiet");
        logger.warn("multiple bindings not reported");

        println!();
    }

    Ok(())
}
