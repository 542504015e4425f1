use std::path::Path;

pub mod chart;
pub mod error;
pub mod incidents;
pub mod log;
pub mod month;
pub mod plot;
pub mod process;
pub mod report;
pub mod summary;

pub use chart::{show_chart, ChartConfig};
pub use error::{IncidentError, Result};
pub use incidents::IncidentLog;
pub use month::{MonthIterator, YearMonth};
pub use summary::MonthlySummary;

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DATE_FORMAT: &str = "%Y/%m/%d";

pub const DEFAULT_INCIDENTS_CSV: &str = "./data/Bridge_Real_Life_Attack_Incidents_Info_1017.csv";
pub const DEFAULT_SUMMARY_CSV: &str = "Data/Bridge_Attack_monthly_summary.csv";
pub const DEFAULT_CHART_SVG: &str = "figures/Fig_Incident_time_num_loss.svg";
pub const DEFAULT_WINDOW_FROM: &str = "Jun-2021";
pub const DEFAULT_WINDOW_TO: &str = "Sep-2023";

/// loss values read as missing, besides the empty field
pub const MISSING_MARKERS: [&str; 10] = [
    "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "-", "#N/A",
];

/// Aggregates the incidents csv into the monthly summary csv.
/// An input without incidents is an error and leaves no output.
pub fn process_incidents(csvin: &Path, csvout: &Path) -> Result<MonthlySummary> {
    let incidents = IncidentLog::from_csv(csvin)?;
    if incidents.is_empty() {
        return Err(IncidentError::EmptyInput(csvin.to_path_buf()));
    }
    let summary = incidents.monthly_summary();
    summary.to_csv(csvout)?;
    Ok(summary)
}

/// Reads the monthly summary csv and plots it.
pub fn plot_summary(csvin: &Path, svgout: &Path, config: &ChartConfig) -> Result<MonthlySummary> {
    let summary = MonthlySummary::from_csv(csvin)?;
    summary.plot_chart(svgout, config)?;
    Ok(summary)
}

pub fn min_and_max<T: std::cmp::PartialOrd + Copy>(s: &[T]) -> (T, T) {
    let mut self_iter = s.iter();
    let (mut min, mut max) = match self_iter.next() {
        Some(v) => (*v, *v),
        None => panic!("could not iterate over slice"),
    };
    for es in self_iter {
        if *es > max {
            max = *es
        }
        if *es < min {
            min = *es
        }
    }
    return (min, max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_and_max() {
        assert_eq!(min_and_max(&[3, 1, 4, 1, 5]), (1, 5));
        assert_eq!(min_and_max(&[2.5]), (2.5, 2.5));
    }

    #[test]
    #[should_panic]
    fn test_min_and_max_empty() {
        min_and_max::<i32>(&[]);
    }
}
