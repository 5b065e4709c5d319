//! Run a scenario file and print every outcome

use anyhow::{Context, Result};
use feebank_core::{Bank, BankConfig, Scenario, StepOutcome};
use feebank_reports::{account_summary, JsonExporter, OutcomeExporter, TextExporter};
use std::path::Path;
use tracing::info;

use crate::OutputFormat;

/// Load a scenario file and run it against a fresh bank
pub fn execute(config: BankConfig, path: &Path) -> Result<(Bank, Vec<StepOutcome>)> {
    let scenario = Scenario::load(path)
        .with_context(|| format!("Failed to load scenario {:?}", path))?;
    info!(
        accounts = scenario.accounts.len(),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let mut bank = Bank::new(config);
    let outcomes = bank.run(&scenario).context("Scenario aborted")?;
    Ok((bank, outcomes))
}

/// Render the outcomes of a run in the requested format
pub fn render(
    bank: &Bank,
    outcomes: &[StepOutcome],
    format: OutputFormat,
    summary: bool,
) -> Result<String> {
    let output = match format {
        OutputFormat::Text => {
            let mut text = TextExporter::new().export_all(outcomes);
            if summary {
                text.push_str("\n\n");
                text.push_str(&account_summary(bank.accounts()));
            }
            text
        }
        OutputFormat::Json => JsonExporter::new()
            .export_all(outcomes)
            .context("Failed to serialize outcomes")?,
    };
    Ok(output)
}

pub fn run(config: BankConfig, path: &Path, format: OutputFormat, summary: bool) -> Result<()> {
    let (bank, outcomes) = execute(config, path)?;
    println!("{}", render(&bank, &outcomes, format, summary)?);
    Ok(())
}
