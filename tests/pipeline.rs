use incident_lpp::{
    plot_summary, process_incidents, ChartConfig, IncidentError, IncidentLog, YearMonth,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "Date,Bridge,Amount lost (in Million USD)\n";

fn write_incidents(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("data").join("incidents.csv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut body = String::from(HEADER);
    for r in rows {
        body.push_str(r);
        body.push('\n');
    }
    fs::write(&path, body).unwrap();
    path
}

fn scattered_rows() -> Vec<&'static str> {
    vec![
        "2022/08/01,Nomad,190",
        "2021/08/10,Poly,611",
        "2022/02/02,Wormhole,326",
        "2021/07/11,Chainswap,0.8",
        "2022/03/23,Ronin,624",
        "2022/08/02,Nomad copy,",
        "2021/12/31,Unknown,N/A",
        "2023/01/15,Late,1.25",
    ]
}

#[test]
fn test_concrete_scenario() {
    let tmp = TempDir::new().unwrap();
    let csvin = write_incidents(
        &tmp,
        &["2021/06/15,a,2.5", "2021/08/01,b,1.0", "2021/08/20,c,3.0"],
    );
    let csvout = tmp.path().join("Data").join("summary.csv");
    process_incidents(&csvin, &csvout).unwrap();
    assert_eq!(
        fs::read_to_string(&csvout).unwrap(),
        "Year,Month,Total Loss (Million USD),Number of Incidents\n\
         2021,6,2.5,1\n\
         2021,7,0.0,0\n\
         2021,8,4.0,2\n"
    );
}

#[test]
fn test_blank_loss_counts_as_incident() {
    let tmp = TempDir::new().unwrap();
    let csvin = write_incidents(&tmp, &["2021/06/15,a,", "2021/06/16,b,2.0"]);
    let csvout = tmp.path().join("summary.csv");
    let summary = process_incidents(&csvin, &csvout).unwrap();
    assert_eq!(summary.total_loss, vec![2.0]);
    assert_eq!(summary.incidents, vec![2]);
}

#[test]
fn test_months_are_consecutive_and_totals_preserved() {
    let tmp = TempDir::new().unwrap();
    let rows = scattered_rows();
    let csvin = write_incidents(&tmp, &rows);
    let csvout = tmp.path().join("summary.csv");
    let summary = process_incidents(&csvin, &csvout).unwrap();

    let months = summary.months();
    assert_eq!(months.first(), Some(&YearMonth::new(2021, 7).unwrap()));
    assert_eq!(months.last(), Some(&YearMonth::new(2023, 1).unwrap()));
    for pair in months.windows(2) {
        assert_eq!(pair[0].succ(), pair[1]);
    }

    let incidents: u64 = summary.incidents.iter().sum();
    assert_eq!(incidents as usize, rows.len());
    let loss: f64 = summary.total_loss.iter().sum();
    let raw = IncidentLog::from_csv(&csvin).unwrap();
    let raw_loss: f64 = raw.loss.iter().map(|l| l.unwrap_or(0.)).sum();
    assert!((loss - raw_loss).abs() < 1e-9);

    for i in 0..summary.len() {
        if summary.incidents[i] == 0 {
            assert_eq!(summary.total_loss[i], 0.0);
        }
    }
    let sep_2021 = months
        .iter()
        .position(|&m| m == YearMonth::new(2021, 9).unwrap())
        .unwrap();
    assert_eq!(summary.incidents[sep_2021], 0);
}

#[test]
fn test_aggregation_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let csvin = write_incidents(&tmp, &scattered_rows());
    let csvout = tmp.path().join("summary.csv");
    process_incidents(&csvin, &csvout).unwrap();
    let first = fs::read(&csvout).unwrap();
    process_incidents(&csvin, &csvout).unwrap();
    assert_eq!(fs::read(&csvout).unwrap(), first);
}

#[test]
fn test_bad_date_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let csvin = write_incidents(&tmp, &["2021/06/15,a,2.5", "15/08/2021,b,1.0"]);
    let csvout = tmp.path().join("summary.csv");
    let result = process_incidents(&csvin, &csvout);
    assert!(matches!(result, Err(IncidentError::DateParse { row: 2, .. })));
    assert!(!csvout.exists());
}

#[test]
fn test_empty_input_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let csvin = write_incidents(&tmp, &[]);
    let csvout = tmp.path().join("summary.csv");
    let result = process_incidents(&csvin, &csvout);
    assert!(matches!(result, Err(IncidentError::EmptyInput(_))));
    assert!(!csvout.exists());
}

#[test]
fn test_missing_input_file() {
    let tmp = TempDir::new().unwrap();
    let result = process_incidents(
        &tmp.path().join("absent.csv"),
        &tmp.path().join("summary.csv"),
    );
    assert!(result.is_err());
}

#[test]
fn test_full_run_writes_chart() {
    let tmp = TempDir::new().unwrap();
    let csvin = write_incidents(&tmp, &scattered_rows());
    let csvout = tmp.path().join("Data").join("summary.csv");
    let svgout = tmp.path().join("figures").join("chart.svg");
    let written = process_incidents(&csvin, &csvout).unwrap();
    let plotted = plot_summary(&csvout, &svgout, &ChartConfig::default()).unwrap();
    assert_eq!(written, plotted);
    let svg = fs::read_to_string(&svgout).unwrap();
    assert!(svg.contains("Aug-2021"));
}

#[test]
fn test_plot_outside_window_does_not_fail() {
    let tmp = TempDir::new().unwrap();
    let csvin = tmp.path().join("summary.csv");
    let mut body = String::from("Year,Month,Total Loss (Million USD),Number of Incidents\n");
    for m in 1..=12 {
        body.push_str(&format!("2020,{},{}.0,{}\n", m, m * 10, m % 3));
    }
    fs::write(&csvin, body).unwrap();
    let svgout = tmp.path().join("chart.svg");
    let summary = plot_summary(&csvin, &svgout, &ChartConfig::default()).unwrap();
    assert_eq!(summary.labels().first().map(String::as_str), Some("Jan-2020"));
    assert_eq!(summary.labels().last().map(String::as_str), Some("Dec-2020"));
    assert_eq!(summary.len(), 12);
    assert!(svgout.exists());
}

#[test]
fn test_plot_missing_summary() {
    let tmp = TempDir::new().unwrap();
    let svgout = tmp.path().join("chart.svg");
    let result = plot_summary(
        &tmp.path().join("absent.csv"),
        &svgout,
        &ChartConfig::default(),
    );
    assert!(result.is_err());
    assert!(!svgout.exists());
}
