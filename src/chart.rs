use crate::error::Result;
use crate::month::YearMonth;
use crate::summary::{create_parent_dir, MonthlySummary};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};
use std::ops::Range;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

/// Fixed look of the incident chart
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub size: (u32, u32),
    pub title: String,
    pub x_desc: String,
    pub incidents_desc: String,
    pub loss_desc: String,
    pub incidents_range: Range<f64>,
    pub loss_range: Range<f64>,
    /// first and last month shown, independent of the data
    pub window: (YearMonth, YearMonth),
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            size: (1000, 500),
            title: String::from("Monthly Bridge Attack Incidents and Total Loss"),
            x_desc: String::from("Date"),
            incidents_desc: String::from("Frequency"),
            loss_desc: String::from("Total Loss (Million USD)"),
            incidents_range: 0f64..7f64,
            loss_range: 0f64..700f64,
            window: (
                YearMonth { year: 2021, month: 6 },
                YearMonth { year: 2023, month: 9 },
            ),
        }
    }
}

impl ChartConfig {
    /// table positions of the window bounds
    pub fn window_positions(&self, months: &[YearMonth]) -> (i64, i64) {
        let origin = months.first().copied().unwrap_or(self.window.0);
        let lo = position_of(months, origin, self.window.0);
        let hi = position_of(months, origin, self.window.1);
        (lo, hi.max(lo))
    }
}

/// row carrying the month, else its calendar distance from the origin
fn position_of(months: &[YearMonth], origin: YearMonth, ym: YearMonth) -> i64 {
    match months.iter().position(|&m| m == ym) {
        Some(i) => i as i64,
        None => origin.months_until(ym),
    }
}

/// rows whose position falls inside [lo, hi]
pub fn visible_rows(len: usize, lo: i64, hi: i64) -> Vec<usize> {
    (0..len)
        .filter(|&i| lo <= i as i64 && i as i64 <= hi)
        .collect()
}

fn label_at(labels: &[String], x: f64) -> String {
    let xr = x.round();
    if (x - xr).abs() > 1e-6 || xr < 0. {
        return String::new();
    }
    labels.get(xr as usize).cloned().unwrap_or_default()
}

enum Corner {
    UpperLeft,
    UpperRight,
}

enum LegendGlyph {
    DashedMarkerLine,
    Bar,
}

impl MonthlySummary {
    /// plots incidents (dashed line, left axis) and losses (bars, right axis) to svg
    pub fn plot_chart<P: AsRef<Path>>(&self, fout: P, config: &ChartConfig) -> Result<()> {
        let fout = fout.as_ref();
        create_parent_dir(fout)?;
        let labels = self.labels();
        let (xlo, xhi) = config.window_positions(&self.months());
        let visible = visible_rows(self.len(), xlo, xhi);
        info!(
            "plotting {} of {} months between {} and {} to {}",
            visible.len(),
            self.len(),
            config.window.0,
            config.window.1,
            fout.display()
        );
        let xrange = (xlo as f64 - 0.5)..(xhi as f64 + 0.5);
        let ymax_incidents = config.incidents_range.end;
        let ymax_loss = config.loss_range.end;

        let root = SVGBackend::new(fout, config.size).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(
                config.title.as_str(),
                ("sans-serif", 24).into_font().style(FontStyle::Bold),
            )
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(70)
            .right_y_label_area_size(80)
            .build_cartesian_2d(xrange.clone(), config.incidents_range.clone())?
            .set_secondary_coord(xrange, config.loss_range.clone());

        chart
            .configure_mesh()
            .light_line_style(&TRANSPARENT)
            .bold_line_style(BLACK.mix(0.2).stroke_width(1))
            .set_all_tick_mark_size(2)
            .x_labels((xhi - xlo + 2) as usize)
            .x_label_formatter(&|x: &f64| label_at(&labels, *x))
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_labels(8)
            .y_label_formatter(&|y: &f64| format!("{:.0}", y))
            .label_style(("sans-serif", 12))
            .x_desc(config.x_desc.as_str())
            .y_desc(config.incidents_desc.as_str())
            .axis_desc_style(("sans-serif", 16).into_font().style(FontStyle::Bold))
            .draw()?;

        chart
            .configure_secondary_axes()
            .y_labels(8)
            .y_label_formatter(&|y: &f64| format!("{:.0}", y))
            .label_style(("sans-serif", 12))
            .y_desc(config.loss_desc.as_str())
            .axis_desc_style(("sans-serif", 16))
            .draw()?;

        chart.draw_secondary_series(visible.iter().map(|&i| {
            let x = i as f64;
            let loss = self.total_loss[i].min(ymax_loss);
            Rectangle::new([(x - 0.4, 0.), (x + 0.4, loss)], RED.mix(0.4).filled())
        }))?;

        let points: Vec<(f64, f64)> = visible
            .iter()
            .map(|&i| (i as f64, (self.incidents[i] as f64).min(ymax_incidents)))
            .collect();
        let line_style = BLACK.mix(0.7).stroke_width(2);
        chart.draw_series(DashedLineSeries::new(points.clone(), 8, 5, line_style))?;
        chart.draw_series(points.iter().map(|&p| Circle::new(p, 4, line_style)))?;
        debug!("drew {} bars and {} markers", visible.len(), points.len());

        let (px, py) = chart.plotting_area().get_pixel_range();
        draw_legend(
            &root,
            (px.clone(), py.clone()),
            Corner::UpperLeft,
            "Number of Incidents",
            LegendGlyph::DashedMarkerLine,
        )?;
        draw_legend(
            &root,
            (px, py),
            Corner::UpperRight,
            config.loss_desc.as_str(),
            LegendGlyph::Bar,
        )?;
        root.present()?;
        info!("saved chart to {}", fout.display());
        Ok(())
    }
}

/// one boxed legend entry inside a corner of the plotting area
fn draw_legend(
    root: &DrawingArea<SVGBackend, Shift>,
    plot_area: (Range<i32>, Range<i32>),
    corner: Corner,
    label: &str,
    glyph: LegendGlyph,
) -> Result<()> {
    let pad = 8;
    let glyph_width = 30;
    let text_style = TextStyle::from(("sans-serif", 12).into_font());
    let (text_w, text_h) = root.estimate_text_size(label, &text_style)?;
    let width = pad * 3 + glyph_width + text_w as i32;
    let height = pad * 2 + (text_h as i32).max(12);
    let (px, py) = plot_area;
    let x0 = match corner {
        Corner::UpperLeft => px.start + pad,
        Corner::UpperRight => px.end - pad - width,
    };
    let y0 = py.start + pad;
    let cy = y0 + height / 2;
    let gx = x0 + pad;

    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + width, y0 + height)],
        WHITE.mix(0.8).filled(),
    ))?;
    root.draw(&Rectangle::new(
        [(x0, y0), (x0 + width, y0 + height)],
        BLACK.mix(0.3).stroke_width(1),
    ))?;
    match glyph {
        LegendGlyph::DashedMarkerLine => {
            let style = BLACK.mix(0.7).stroke_width(2);
            root.draw(&PathElement::new(vec![(gx, cy), (gx + 10, cy)], style))?;
            root.draw(&PathElement::new(
                vec![(gx + 20, cy), (gx + glyph_width, cy)],
                style,
            ))?;
            root.draw(&Circle::new((gx + glyph_width / 2, cy), 4, style))?;
        }
        LegendGlyph::Bar => {
            root.draw(&Rectangle::new(
                [(gx, cy - 6), (gx + glyph_width, cy + 6)],
                RED.mix(0.4).filled(),
            ))?;
        }
    }
    root.draw(&Text::new(
        label,
        (gx + glyph_width + pad, cy - text_h as i32 / 2),
        text_style,
    ))?;
    Ok(())
}

/// opens the chart with the desktop viewer and waits for the launcher;
/// a failing viewer is only reported
pub fn show_chart(path: &Path) {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg("start").arg("");
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path);
    match cmd.status() {
        Ok(status) if status.success() => info!("opened {}", path.display()),
        Ok(status) => warn!("viewer for {} exited with {}", path.display(), status),
        Err(e) => warn!("could not open {}: {}", path.display(), e),
    }
}
