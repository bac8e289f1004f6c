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
use crate::binding_descriptor::BindingDescriptor;
use crate::binding_registry::BindingRegistry;
use crate::binding_scanner::{BindingScanner, ResourceLocation};
use crate::detection_toggle::{DetectionToggle, DETECT_MULTIPLE_BINDINGS_ENV};
use crate::error_code::ErrorCode;
use crate::log::{debug, error};
use crate::logger::{LoggerFactory, LoggerHandle};
use crate::nop_logger::NopLoggerFactory;
use crate::search_path_scanner::SearchPathScanner;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Marker resource indicating a candidate binding, relative to search path entry.
pub const MARKER_RESOURCE: &str = "log_binding/static_logger_binder.json";

/// API versions bindings may be built against.
pub const API_COMPATIBILITY_LIST: &[&str] = &["0.1"];

/// Prefix of every diagnostic line.
const DIAGNOSTIC_PREFIX: &str = "log-binding: ";

/// Name of the fallback binding.
const NOP_BINDING: &str = "nop";

/// Diagnostic stream.
type DiagnosticSink = Box<dyn Write + Send>;

/// Binding selected by the resolver.
#[derive(Clone)]
struct Binding {
    /// Binding name.
    name: String,

    /// Factory providing loggers.
    factory: Arc<dyn LoggerFactory>,
}

impl Binding {
    fn nop() -> Self {
        Self {
            name: NOP_BINDING.to_string(),
            factory: Arc::new(NopLoggerFactory::default()),
        }
    }
}

/// Binding resolver builder.
pub struct BindingResolverBuilder {
    /// Binding scanner.
    scanner: Option<Box<dyn BindingScanner>>,

    /// Multiple-binding detection setting.
    detection: Option<DetectionToggle>,

    /// Diagnostic stream.
    diagnostics: Option<DiagnosticSink>,

    /// Marker resource name.
    marker: Option<String>,
}

impl BindingResolverBuilder {
    /// Create a builder for the binding resolver.
    ///
    /// All settings are using default values until changed via the builder API.
    ///
    /// # Return Values
    ///   * BindingResolverBuilder instance
    pub fn new() -> Self {
        Self {
            scanner: None,
            detection: None,
            diagnostics: None,
            marker: None,
        }
    }

    /// Set binding scanner.
    ///
    /// # Parameters
    ///   * `scanner`: binding scanner (default: [`SearchPathScanner::from_env`])
    ///
    /// # Return Values
    ///   * BindingResolverBuilder instance
    pub fn scanner(mut self, scanner: Box<dyn BindingScanner>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// Configure multiple-binding detection.
    ///
    /// # Parameters
    ///   * `detection`: detection setting (default: [`DetectionToggle::from_env`])
    ///
    /// # Return Values
    ///   * BindingResolverBuilder instance
    pub fn detect_multiple_bindings(mut self, detection: DetectionToggle) -> Self {
        self.detection = Some(detection);
        self
    }

    /// Set diagnostic stream.
    ///
    /// # Parameters
    ///   * `diagnostics`: diagnostic stream (default: stderr)
    ///
    /// # Return Values
    ///   * BindingResolverBuilder instance
    pub fn diagnostics(mut self, diagnostics: DiagnosticSink) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Set marker resource name.
    ///
    /// # Parameters
    ///   * `marker`: marker resource name (default: [`MARKER_RESOURCE`])
    ///
    /// # Return Values
    ///   * BindingResolverBuilder instance
    pub fn marker(mut self, marker: &str) -> Self {
        self.marker = Some(marker.to_string());
        self
    }

    /// Finalize the builder.
    ///
    /// Environment is read here, not on every resolution.
    ///
    /// # Return Values
    ///   * BindingResolver instance
    pub fn build(self) -> BindingResolver {
        let scanner = self
            .scanner
            .unwrap_or_else(|| Box::new(SearchPathScanner::from_env()));
        let detection = self.detection.unwrap_or_else(DetectionToggle::from_env);
        let diagnostics = self
            .diagnostics
            .unwrap_or_else(|| Box::new(std::io::stderr()));
        let marker = self
            .marker
            .unwrap_or_else(|| MARKER_RESOURCE.to_string());

        BindingResolver {
            scanner,
            detection,
            marker,
            diagnostics: Mutex::new(diagnostics),
            binding: Mutex::new(None),
        }
    }
}

impl Default for BindingResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Binding resolver.
///
/// Binding is selected on first resolution and kept afterwards.
/// Search path is scanned on every resolution, so multiple bindings are reported for each call.
pub struct BindingResolver {
    /// Binding scanner.
    scanner: Box<dyn BindingScanner>,

    /// Multiple-binding detection setting.
    detection: DetectionToggle,

    /// Marker resource name.
    marker: String,

    /// Diagnostic stream.
    diagnostics: Mutex<DiagnosticSink>,

    /// Selected binding, `None` until first resolution.
    binding: Mutex<Option<Binding>>,
}

impl BindingResolver {
    /// Multiple-binding detection setting.
    pub fn detection(&self) -> DetectionToggle {
        self.detection
    }

    /// Marker resource name.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Name of the selected binding, `None` before first resolution.
    pub fn bound_binding(&self) -> Option<String> {
        self.binding
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|binding| binding.name.clone())
    }

    /// Resolve logger for given identifier.
    ///
    /// Never fails. Scan errors are reported to the diagnostic stream and the NOP binding
    /// is used if no binding could be loaded.
    ///
    /// # Parameters
    ///   * `identifier`: logger name
    ///
    /// # Return Values
    ///   * Logger handle named `identifier`
    pub fn resolve(&self, identifier: &str) -> LoggerHandle {
        let locations = self.find_bindings();

        let ambiguous = self.detection.is_enabled() && locations.len() > 1;
        if ambiguous {
            self.report_multiple_bindings(&locations);
        }

        let binding = self.bind(&locations, ambiguous);
        debug!("logger {identifier} resolved using binding {}", binding.name);
        LoggerHandle::new(
            identifier,
            &binding.name,
            binding.factory.get_logger(identifier),
        )
    }

    /// Resolve logger named after type `T`.
    pub fn resolve_type<T: ?Sized>(&self) -> LoggerHandle {
        self.resolve(core::any::type_name::<T>())
    }

    /// Scan for marker resources, errors result in empty list.
    fn find_bindings(&self) -> Vec<ResourceLocation> {
        match self.scanner.find_resources(&self.marker) {
            Ok(locations) => locations,
            Err(e) => {
                error!("scanning for {} failed: {e:?}", self.marker);
                self.report(&[format!("Error getting resources from path: {e:?}")]);
                Vec::new()
            }
        }
    }

    /// Get selected binding, select one from first location if not done yet.
    fn bind(&self, locations: &[ResourceLocation], ambiguous: bool) -> Binding {
        let mut selected = self.binding.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(binding) = selected.as_ref() {
            return binding.clone();
        }

        let binding = match locations.first() {
            Some(location) => self.instantiate(location).unwrap_or_else(|e| {
                self.report(&[
                    format!("Failed to instantiate logger binding from [{location}]: {e:?}"),
                    "Defaulting to no-operation (NOP) logger implementation".to_string(),
                ]);
                Binding::nop()
            }),
            None => {
                self.report(&[
                    "No logger binding found on the search path.".to_string(),
                    "Defaulting to no-operation (NOP) logger implementation".to_string(),
                ]);
                Binding::nop()
            }
        };

        if ambiguous {
            self.report(&[format!("Actual binding is of type [{}]", binding.name)]);
        }

        *selected = Some(binding.clone());
        binding
    }

    /// Load binding described by marker resource at given location.
    fn instantiate(&self, location: &ResourceLocation) -> Result<Binding, ErrorCode> {
        let content = self.scanner.read_resource(location)?;
        let descriptor = BindingDescriptor::parse(&content)?;

        if !descriptor.is_compatible(API_COMPATIBILITY_LIST) {
            self.report(&[format!(
                "The requested version {} by your binding is not compatible with {API_COMPATIBILITY_LIST:?}",
                descriptor.api_version.as_deref().unwrap_or_default()
            )]);
        }

        let factory = BindingRegistry::from_descriptor(&descriptor)?;
        Ok(Binding {
            name: descriptor.binding,
            factory: Arc::from(factory),
        })
    }

    /// Report every location beyond the first.
    fn report_multiple_bindings(&self, locations: &[ResourceLocation]) {
        let mut lines = vec!["Search path contains multiple logger bindings.".to_string()];
        lines.extend(
            locations
                .iter()
                .skip(1)
                .map(|location| format!("Found binding in [{location}]")),
        );
        lines.push(format!(
            "Set {DETECT_MULTIPLE_BINDINGS_ENV}=false to suppress this warning."
        ));
        self.report(&lines);
    }

    /// Write lines to diagnostic stream.
    /// Write errors are ignored.
    fn report(&self, lines: &[String]) {
        let mut diagnostics = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for line in lines {
            let _ = writeln!(diagnostics, "{DIAGNOSTIC_PREFIX}{line}");
        }
        let _ = diagnostics.flush();
    }
}
