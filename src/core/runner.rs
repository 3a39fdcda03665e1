use crate::core::{Comparator, Comparison, ConfigProvider, OutputFormat, Relation};
use crate::utils::error::Result;

pub struct ComparisonRunner<C: Comparator, P: ConfigProvider> {
    comparator: C,
    config: P,
}

impl<C: Comparator, P: ConfigProvider> ComparisonRunner<C, P> {
    pub fn new(comparator: C, config: P) -> Self {
        Self { comparator, config }
    }

    pub fn run(&self) -> Result<Comparison> {
        let left = self.config.left_operand()?;
        let right = self.config.right_operand()?;
        tracing::debug!("Comparing {} with {}", left, right);

        let result = self.comparator.compare(left, right);
        let relation = Relation::from_sign(result);
        tracing::info!("✅ {} is {:?} {}", left, relation, right);

        Ok(Comparison {
            left,
            right,
            result,
            relation,
        })
    }

    /// Runs and renders in the configured output format.
    pub fn run_and_render(&self) -> Result<String> {
        let comparison = self.run()?;
        render(&comparison, self.config.output_format())
    }
}

pub fn render(comparison: &Comparison, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Success: {}", comparison.result)),
        OutputFormat::Json => Ok(serde_json::to_string(comparison)?),
    }
}
