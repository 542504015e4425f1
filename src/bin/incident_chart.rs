use anyhow::{Context, Result};
use incident_lpp::log::init_logging;
use incident_lpp::report::parse_cli;
use incident_lpp::{plot_summary, process_incidents, show_chart};
use tracing::info;

fn main() -> Result<()> {
    let (csvin, summary, options) = parse_cli()?;
    init_logging(options.verbose);

    // aggregate
    info!(
        "summarize incidents from {} to {}",
        csvin.display(),
        summary.display()
    );
    process_incidents(&csvin, &summary)
        .with_context(|| format!("could not summarize {}", csvin.display()))?;

    // plot, reading the summary back from disk
    info!("plot {} to {}", summary.display(), options.svgout.display());
    plot_summary(&summary, &options.svgout, &options.config)
        .with_context(|| format!("could not plot {}", summary.display()))?;
    if options.show {
        show_chart(&options.svgout);
    }
    Ok(())
}
