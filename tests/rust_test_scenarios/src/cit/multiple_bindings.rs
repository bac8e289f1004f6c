use crate::helpers::resolver_instance::resolver_instance;
use crate::helpers::resolver_parameters::ResolverParameters;
use crate::helpers::{to_str, MULTIPLE_BINDINGS_STRING};
use test_scenarios_rust::scenario::{Scenario, ScenarioGroup, ScenarioGroupImpl};
use tracing::info;

/// Single resolution, detection outcome is traced.
struct Detection;

impl Scenario for Detection {
    fn name(&self) -> &'static str {
        "detection"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        let params = ResolverParameters::from_json(input)?;
        let (resolver, diagnostics) = resolver_instance(&params).map_err(|e| to_str(&e))?;

        let logger = resolver.resolve(&params.identifier);

        info!(
            logger_name = logger.name(),
            binding = logger.binding(),
            detection = to_str(&resolver.detection()),
            multiple_bindings_detected = diagnostics.contents().contains(MULTIPLE_BINDINGS_STRING),
            found_binding_count = diagnostics.count(MULTIPLE_BINDINGS_STRING),
        );

        Ok(())
    }
}

/// Repeated resolution, each one reports multiple bindings again.
struct RepeatedResolution;

impl Scenario for RepeatedResolution {
    fn name(&self) -> &'static str {
        "repeated_resolution"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        let params = ResolverParameters::from_json(input)?;
        let (resolver, diagnostics) = resolver_instance(&params).map_err(|e| to_str(&e))?;

        for attempt in 0..3 {
            diagnostics.clear();
            let logger = resolver.resolve(&params.identifier);
            info!(
                attempt,
                logger_name = logger.name(),
                binding = logger.binding(),
                found_binding_count = diagnostics.count(MULTIPLE_BINDINGS_STRING),
            );
        }

        Ok(())
    }
}

pub fn multiple_bindings_group() -> Box<dyn ScenarioGroup> {
    let scenarios: Vec<Box<dyn Scenario>> = vec![Box::new(Detection), Box::new(RepeatedResolution)];
    Box::new(ScenarioGroupImpl::new("multiple_bindings", scenarios, vec![]))
}
