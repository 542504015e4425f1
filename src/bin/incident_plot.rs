use anyhow::{Context, Result};
use incident_lpp::log::init_logging;
use incident_lpp::plot::parse_cli;
use incident_lpp::{plot_summary, show_chart};
use tracing::info;

fn main() -> Result<()> {
    let (csvin, options) = parse_cli()?;
    init_logging(options.verbose);
    info!(
        "read monthly summary from {} and plot to {}",
        csvin.display(),
        options.svgout.display()
    );
    plot_summary(&csvin, &options.svgout, &options.config)
        .with_context(|| format!("could not plot {}", csvin.display()))?;
    if options.show {
        show_chart(&options.svgout);
    }
    Ok(())
}
