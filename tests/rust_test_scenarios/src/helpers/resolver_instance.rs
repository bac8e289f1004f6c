//! Resolver instance test helpers.

use crate::helpers::resolver_parameters::ResolverParameters;
use rust_log_binding::prelude::*;
use std::path::Path;

/// Create marker resources in `entry_<idx>` subdirectories and return scanner over them.
fn search_path_scanner(dir: &Path, bindings: &[String]) -> Result<SearchPathScanner, ErrorCode> {
    let mut builder = SearchPathScannerBuilder::new();
    for (idx, binding) in bindings.iter().enumerate() {
        let entry = dir.join(format!("entry_{idx}"));
        let marker_path = SearchPathScanner::marker_path(&entry, MARKER_RESOURCE);
        if let Some(parent) = marker_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&marker_path, BindingDescriptor::new(binding).to_json()?)?;
        builder = builder.path(entry);
    }
    Ok(builder.build())
}

/// Create resolver based on provided parameters.
/// Diagnostics are captured instead of written to stderr.
pub fn resolver_instance(
    params: &ResolverParameters,
) -> Result<(BindingResolver, MockDiagnostics), ErrorCode> {
    let scanner: Box<dyn BindingScanner> = match &params.dir {
        Some(dir) => Box::new(search_path_scanner(dir, &params.bindings)?),
        None => {
            let bindings: Vec<&str> = params.bindings.iter().map(String::as_str).collect();
            Box::new(MockScanner::with_bindings(&bindings))
        }
    };

    let diagnostics = MockDiagnostics::default();
    let resolver = BindingResolverBuilder::new()
        .scanner(scanner)
        .detect_multiple_bindings(DetectionToggle::from(params.detect_multiple_bindings))
        .diagnostics(Box::new(diagnostics.clone()))
        .build();

    Ok((resolver, diagnostics))
}
