use super::{DEFAULT_INCIDENTS_CSV, DEFAULT_SUMMARY_CSV, VERSION};
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the monthly aggregation.
pub fn parse_cli() -> (PathBuf, PathBuf, bool) {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name of the incidents csv file")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .default_value(DEFAULT_INCIDENTS_CSV);
    let arg_csvout = Arg::with_name("output_csvfile")
        .help("name of the output monthly summary csv file")
        .short("o")
        .long("summary")
        .takes_value(true)
        .default_value(DEFAULT_SUMMARY_CSV);
    let arg_verbose = Arg::with_name("verbose")
        .help("print the per-month detail")
        .short("v")
        .long("verbose")
        .takes_value(false);
    let cli_args = App::new("incident_process")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to summarize the incidents by month")
        .arg(arg_csvin)
        .arg(arg_csvout)
        .arg(arg_verbose)
        .get_matches();
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let csvout = PathBuf::from(cli_args.value_of("output_csvfile").unwrap_or_default());
    let verbose = cli_args.is_present("verbose");
    return (csvin, csvout, verbose);
}
