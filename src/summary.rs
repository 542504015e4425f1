use crate::error::{IncidentError, Result};
use crate::incidents::IncidentLog;
use crate::month::{MonthIterator, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// One row of the summary csv
#[derive(Debug, Serialize, Deserialize)]
struct SummaryRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Total Loss (Million USD)")]
    total_loss: f64,
    #[serde(rename = "Number of Incidents")]
    incidents: u64,
}

/// Incidents and losses per calendar month, in table order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    pub year: Vec<i32>,
    pub month: Vec<u32>,
    pub total_loss: Vec<f64>,
    pub incidents: Vec<u64>,
}

impl IncidentLog {
    /// Sum the losses and count the incidents of each month between the first and last
    /// incident; months without incidents are kept with zero loss and zero count.
    /// Missing losses add nothing to the total but still count as one incident.
    pub fn monthly_summary(&self) -> MonthlySummary {
        let (first, last) = match self.month_range() {
            Some(range) => range,
            None => return MonthlySummary::new(0),
        };
        let mut per_month: BTreeMap<YearMonth, (f64, u64)> = MonthIterator::new(first, last)
            .map(|d| (YearMonth::from_date(d), (0., 0)))
            .collect();
        for (&d, &l) in self.date.iter().zip(self.loss.iter()) {
            let entry = per_month
                .entry(YearMonth::from_date(d))
                .or_insert((0., 0));
            entry.0 += l.unwrap_or(0.);
            entry.1 += 1;
        }
        let mut summary = MonthlySummary::new(per_month.len());
        for (ym, (loss, count)) in per_month {
            debug!("{}: {} incidents, {} loss", ym, count, loss);
            summary.push(ym, loss, count);
        }
        info!(
            "summarized {} incidents over {} months, {} to {}",
            self.len(),
            summary.len(),
            first,
            last
        );
        summary
    }
}

impl MonthlySummary {
    pub fn new(capacity: usize) -> MonthlySummary {
        MonthlySummary {
            year: Vec::with_capacity(capacity),
            month: Vec::with_capacity(capacity),
            total_loss: Vec::with_capacity(capacity),
            incidents: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, ym: YearMonth, total_loss: f64, incidents: u64) {
        self.year.push(ym.year);
        self.month.push(ym.month);
        self.total_loss.push(total_loss);
        self.incidents.push(incidents);
    }

    pub fn len(&self) -> usize {
        self.year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_empty()
    }

    pub fn months(&self) -> Vec<YearMonth> {
        self.year
            .iter()
            .zip(self.month.iter())
            .map(|(&year, &month)| YearMonth { year, month })
            .collect()
    }

    /// "Jun-2021" style label for every row, in table order
    pub fn labels(&self) -> Vec<String> {
        self.months().iter().map(|ym| ym.label()).collect()
    }

    /// writes the summary as csv at the given path, replacing any previous file
    pub fn to_csv<P: AsRef<Path>>(&self, fout: P) -> Result<()> {
        let fout = fout.as_ref();
        create_parent_dir(fout)?;
        let csv_err = |source| IncidentError::Csv {
            path: fout.to_path_buf(),
            source,
        };
        let mut writer = csv::Writer::from_path(fout).map_err(csv_err)?;
        for i in 0..self.len() {
            writer
                .serialize(SummaryRow {
                    year: self.year[i],
                    month: self.month[i],
                    total_loss: self.total_loss[i],
                    incidents: self.incidents[i],
                })
                .map_err(csv_err)?;
        }
        writer.flush().map_err(|source| IncidentError::Io {
            path: fout.to_path_buf(),
            source,
        })?;
        info!("wrote {} months to {}", self.len(), fout.display());
        Ok(())
    }

    /// Init a MonthlySummary from the csv written by `to_csv`, keeping the row order
    pub fn from_csv<P: AsRef<Path>>(fin: P) -> Result<MonthlySummary> {
        let fin = fin.as_ref();
        let csv_err = |source| IncidentError::Csv {
            path: fin.to_path_buf(),
            source,
        };
        let mut reader = csv::Reader::from_path(fin).map_err(csv_err)?;
        let mut summary = MonthlySummary::new(64);
        for result in reader.deserialize() {
            let row: SummaryRow = result.map_err(csv_err)?;
            let ym = YearMonth::new(row.year, row.month)?;
            summary.push(ym, row.total_loss, row.incidents);
        }
        info!("read {} months from {}", summary.len(), fin.display());
        Ok(summary)
    }
}

impl std::fmt::Display for MonthlySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Year,Month,Total Loss (Million USD),Number of Incidents\n")?;
        for i in 0..self.len() {
            write!(
                f,
                "{},{},{:?},{}\n",
                self.year[i], self.month[i], self.total_loss[i], self.incidents[i]
            )?
        }
        Ok(())
    }
}

pub(crate) fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| IncidentError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
