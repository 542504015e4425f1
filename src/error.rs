use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors of the aggregation and plotting stages.
#[derive(Error, Debug)]
pub enum IncidentError {
    #[error("could not access file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: date '{value}' does not match YYYY/MM/DD: {source}")]
    DateParse {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("row {row}: loss '{value}' is not a number")]
    LossParse { row: usize, value: String },

    #[error("invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("invalid month label '{0}', expected e.g. Jun-2021")]
    InvalidLabel(String),

    #[error("no incidents found in {0}")]
    EmptyInput(PathBuf),

    #[error("could not draw the chart: {0}")]
    Render(#[from] DrawingAreaErrorKind<std::io::Error>),
}

pub type Result<T> = std::result::Result<T, IncidentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_loss_parse() {
        let err = IncidentError::LossParse {
            row: 3,
            value: "lots".to_string(),
        };
        assert_eq!(err.to_string(), "row 3: loss 'lots' is not a number");
    }

    #[test]
    fn test_display_io_carries_path() {
        let err = IncidentError::Io {
            path: PathBuf::from("data/missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/missing.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_display_empty_input() {
        let err = IncidentError::EmptyInput(PathBuf::from("in.csv"));
        assert_eq!(err.to_string(), "no incidents found in in.csv");
    }
}
