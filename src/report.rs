use super::{DEFAULT_INCIDENTS_CSV, DEFAULT_SUMMARY_CSV, VERSION};
use crate::error::Result;
use crate::plot::{plot_args, plot_options, PlotOptions};
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments of the full run, aggregation then plotting.
pub fn parse_cli() -> Result<(PathBuf, PathBuf, PlotOptions)> {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name of the incidents csv file")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .default_value(DEFAULT_INCIDENTS_CSV);
    let arg_summary = Arg::with_name("summary_csvfile")
        .help("name of the monthly summary csv file, written then read back")
        .short("s")
        .long("summary")
        .takes_value(true)
        .default_value(DEFAULT_SUMMARY_CSV);
    let cli_args = App::new("incident_chart")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to summarize the incidents by month and plot them")
        .arg(arg_csvin)
        .arg(arg_summary)
        .args(&plot_args())
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let summary = PathBuf::from(cli_args.value_of("summary_csvfile").unwrap_or_default());
    let options = plot_options(&cli_args)?;
    Ok((csvin, summary, options))
}
