use crate::helpers::resolver_instance::resolver_instance;
use crate::helpers::resolver_parameters::ResolverParameters;
use test_scenarios_rust::scenario::Scenario;
use tracing::info;

pub struct BasicScenario;

/// Resolves single logger and logs through it.
impl Scenario for BasicScenario {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn run(&self, input: &str) -> Result<(), String> {
        // Print and parse parameters.
        eprintln!("{input}");
        let params = ResolverParameters::from_json(input)?;

        // Create resolver.
        let (resolver, _diagnostics) =
            resolver_instance(&params).map_err(|e| format!("{e:?}"))?;

        // Resolve and use logger.
        let logger = resolver.resolve(&params.identifier);
        logger.info("basic scenario");

        // Trace.
        info!(logger_name = logger.name(), binding = logger.binding());

        Ok(())
    }
}
