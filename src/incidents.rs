use crate::error::{IncidentError, Result};
use crate::month::YearMonth;
use crate::{min_and_max, DATE_FORMAT, MISSING_MARKERS};
use chrono::prelude::*;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Raw csv row, only the two columns needed; others are ignored
#[derive(Debug, Deserialize)]
struct IncidentRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Amount lost (in Million USD)")]
    loss: String,
}

/// The raw incident records, one entry per event
#[derive(Debug, Clone, Default)]
pub struct IncidentLog {
    pub date: Vec<NaiveDate>,
    pub loss: Vec<Option<f64>>,
}

impl IncidentLog {
    pub fn new(capacity: usize) -> IncidentLog {
        IncidentLog {
            date: Vec::with_capacity(capacity),
            loss: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, date: NaiveDate, loss: Option<f64>) {
        self.date.push(date);
        self.loss.push(loss);
    }

    pub fn len(&self) -> usize {
        self.date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }

    /// Init an IncidentLog from csv.
    /// Any date not in YYYY/MM/DD or any non-numeric loss aborts the read;
    /// blank and NA-like losses are kept as missing.
    pub fn from_csv<P: AsRef<Path>>(fin: P) -> Result<IncidentLog> {
        let fin = fin.as_ref();
        let csv_err = |source| IncidentError::Csv {
            path: fin.to_path_buf(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(fin)
            .map_err(csv_err)?;
        let mut incidents = IncidentLog::new(256);
        for (i, result) in reader.deserialize().enumerate() {
            let row: IncidentRow = result.map_err(csv_err)?;
            let row_number = i + 1;
            let date = parse_date(&row.date, row_number)?;
            let loss = parse_loss(&row.loss, row_number)?;
            incidents.push(date, loss);
        }
        info!("read {} incidents from {}", incidents.len(), fin.display());
        debug!(
            "{} incidents without a loss value",
            incidents.loss.iter().filter(|l| l.is_none()).count()
        );
        Ok(incidents)
    }

    /// first and last month with at least one incident
    pub fn month_range(&self) -> Option<(YearMonth, YearMonth)> {
        if self.is_empty() {
            return None;
        }
        let months: Vec<YearMonth> = self.date.iter().map(|&d| YearMonth::from_date(d)).collect();
        Some(min_and_max(&months[..]))
    }
}

pub fn parse_date(s: &str, row: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|source| IncidentError::DateParse {
        row,
        value: s.to_string(),
        source,
    })
}

pub fn parse_loss(s: &str, row: usize) -> Result<Option<f64>> {
    if s.is_empty() || MISSING_MARKERS.contains(&s) {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(l) if l.is_nan() => Ok(None),
        Ok(l) => Ok(Some(l)),
        Err(_) => Err(IncidentError::LossParse {
            row,
            value: s.to_string(),
        }),
    }
}
