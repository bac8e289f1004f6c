//! Example for custom binding registration.
//! - Implementation of `Logger` and `LoggerFactory` traits.
//! - Registration of custom binding.
//! - Resolution of logger utilizing custom binding.

use core::fmt;
use rust_log_binding::prelude::*;
use std::sync::Arc;

/// Logger printing to stdout.
struct StdoutLogger {
    name: String,
}

impl Logger for StdoutLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn log(&self, level: Level, args: &fmt::Arguments<'_>) {
        println!("{level:<5} {}: {args}", self.name);
    }
}

/// Factory of `StdoutLogger`.
struct StdoutLoggerFactory;

impl LoggerFactory for StdoutLoggerFactory {
    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(StdoutLogger {
            name: name.to_string(),
        })
    }
}

fn main() -> Result<(), ErrorCode> {
    // Register `StdoutLoggerFactory`.
    BindingRegistry::register("stdout", || Box::new(StdoutLoggerFactory))?;

    // Marker resource naming custom binding.
    let scanner = MockScanner::with_bindings(&["stdout"]);

    let resolver = BindingResolverBuilder::new()
        .scanner(Box::new(scanner))
        .detect_multiple_bindings(DetectionToggle::Unset)
        .build();

    let logger = resolver.resolve("example::registration");
    logger.info("logged by custom binding");
    logger.trace("all levels enabled");

    println!(
        "bound binding: {}",
        resolver.bound_binding().unwrap_or_default()
    );

    Ok(())
}
