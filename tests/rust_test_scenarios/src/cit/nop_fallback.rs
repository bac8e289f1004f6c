use crate::helpers::resolver_instance::resolver_instance;
use crate::helpers::resolver_parameters::ResolverParameters;
use crate::helpers::to_str;
use rust_log_binding::prelude::Level;
use test_scenarios_rust::scenario::{Scenario, ScenarioGroup, ScenarioGroupImpl};
use tracing::info;

/// Resolution without usable binding, NOP logger is expected.
struct NoBinding;

impl Scenario for NoBinding {
    fn name(&self) -> &'static str {
        "no_binding"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        let params = ResolverParameters::from_json(input)?;
        let (resolver, diagnostics) = resolver_instance(&params).map_err(|e| to_str(&e))?;

        let logger = resolver.resolve(&params.identifier);

        info!(
            logger_name = logger.name(),
            binding = logger.binding(),
            error_enabled = logger.is_enabled(Level::Error),
            nop_fallback = diagnostics.contents().contains("no-operation (NOP)"),
        );

        Ok(())
    }
}

pub fn nop_fallback_group() -> Box<dyn ScenarioGroup> {
    Box::new(ScenarioGroupImpl::new(
        "nop_fallback",
        vec![Box::new(NoBinding)],
        vec![],
    ))
}
