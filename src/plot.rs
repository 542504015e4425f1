use super::{DEFAULT_CHART_SVG, DEFAULT_SUMMARY_CSV, DEFAULT_WINDOW_FROM, DEFAULT_WINDOW_TO, VERSION};
use crate::chart::ChartConfig;
use crate::error::Result;
use crate::month::YearMonth;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

/// options shared by the plotting binaries
pub struct PlotOptions {
    pub svgout: PathBuf,
    pub config: ChartConfig,
    pub show: bool,
    pub verbose: bool,
}

pub fn plot_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("name of the output svg file")
        .short("o")
        .long("svgfile")
        .takes_value(true)
        .default_value(DEFAULT_CHART_SVG);
    let arg_from = Arg::with_name("from")
        .help("first month shown on the x axis, e.g. Jun-2021")
        .long("from")
        .takes_value(true)
        .default_value(DEFAULT_WINDOW_FROM);
    let arg_to = Arg::with_name("to")
        .help("last month shown on the x axis, e.g. Sep-2023")
        .long("to")
        .takes_value(true)
        .default_value(DEFAULT_WINDOW_TO);
    let arg_no_show = Arg::with_name("no_show")
        .help("only save the chart, do not open it")
        .long("no-show")
        .takes_value(false);
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false);
    vec![arg_svgout, arg_from, arg_to, arg_no_show, arg_verbose]
}

pub fn plot_options(cli_args: &ArgMatches) -> Result<PlotOptions> {
    let svgout = PathBuf::from(cli_args.value_of("output_svgfile").unwrap_or_default());
    let from = YearMonth::from_label(cli_args.value_of("from").unwrap_or(DEFAULT_WINDOW_FROM))?;
    let to = YearMonth::from_label(cli_args.value_of("to").unwrap_or(DEFAULT_WINDOW_TO))?;
    let config = ChartConfig {
        window: (from, to),
        ..ChartConfig::default()
    };
    Ok(PlotOptions {
        svgout,
        config,
        show: !cli_args.is_present("no_show"),
        verbose: cli_args.is_present("verbose"),
    })
}

/// Takes the CLI arguments that control the plotting of the monthly summary.
pub fn parse_cli() -> Result<(PathBuf, PlotOptions)> {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name of the monthly summary csv file")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .default_value(DEFAULT_SUMMARY_CSV);
    let cli_args = App::new("incident_plot")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to plot the monthly incidents and losses")
        .arg(arg_csvin)
        .args(&plot_args())
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let options = plot_options(&cli_args)?;
    Ok((csvin, options))
}
