use anyhow::{Context, Result};
use incident_lpp::log::init_logging;
use incident_lpp::process::parse_cli;
use incident_lpp::process_incidents;
use tracing::info;

fn main() -> Result<()> {
    let (csvin, csvout, verbose) = parse_cli();
    init_logging(verbose);
    info!(
        "summarize incidents from {} to {}",
        csvin.display(),
        csvout.display()
    );
    process_incidents(&csvin, &csvout)
        .with_context(|| format!("could not summarize {}", csvin.display()))?;
    Ok(())
}
