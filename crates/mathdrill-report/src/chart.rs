//! SVG progress chart generator.
//!
//! Produces a self-contained SVG file with everything inlined.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::warn;

use mathdrill_core::ledger::ProgressRecord;

const WIDTH: u32 = 720;
const HEIGHT: u32 = 420;
const MARGIN_LEFT: u32 = 64;
const MARGIN_RIGHT: u32 = 24;
const MARGIN_TOP: u32 = 48;
const MARGIN_BOTTOM: u32 = 56;

const LINE_COLOR: &str = "#3b82f6";
const GRID_COLOR: &str = "#e5e7eb";
const TEXT_COLOR: &str = "#1a1a1a";

/// Escape a string for safe SVG text insertion.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render the progress chart for `records`, optionally titled for one quiz.
///
/// Records are plotted in timestamp order; rows whose timestamp does not
/// parse under the ledger format are skipped with a warning. A record with
/// zero questions plots at 0%.
pub fn render_progress_chart(records: &[ProgressRecord], quiz: Option<&str>) -> String {
    let title = match quiz {
        Some(quiz) => format!("Progress: {}", quiz),
        None => "Overall progress".to_string(),
    };

    let mut points: Vec<(NaiveDateTime, f64)> = records
        .iter()
        .filter_map(|record| match record.parsed_timestamp() {
            Some(ts) => Some((ts, record.percentage().unwrap_or(0.0))),
            None => {
                warn!(
                    "skipping record with unparseable timestamp: {}",
                    record.timestamp
                );
                None
            }
        })
        .collect();
    points.sort_by_key(|(ts, _)| *ts);

    let mut svg = format!(
        "<svg width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" \
         xmlns=\"http://www.w3.org/2000/svg\" font-family=\"sans-serif\">\n"
    );
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"28\" font-size=\"18\" fill=\"{TEXT_COLOR}\" \
         text-anchor=\"middle\">{}</text>\n",
        WIDTH / 2,
        xml_escape(&title)
    ));

    if points.is_empty() {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"{TEXT_COLOR}\" \
             text-anchor=\"middle\">No results to chart yet.</text>\n",
            WIDTH / 2,
            HEIGHT / 2
        ));
        svg.push_str("</svg>\n");
        return svg;
    }

    let plot_w = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    let plot_h = (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) as f64;

    let t0 = points.first().map(|(ts, _)| ts.and_utc().timestamp()).unwrap_or(0);
    let t1 = points.last().map(|(ts, _)| ts.and_utc().timestamp()).unwrap_or(0);
    let span = t1 - t0;

    let x_for = |idx: usize, ts: i64| -> f64 {
        if span == 0 {
            // All sessions share one timestamp; spread the points evenly.
            if points.len() == 1 {
                MARGIN_LEFT as f64 + plot_w / 2.0
            } else {
                MARGIN_LEFT as f64 + plot_w * idx as f64 / (points.len() - 1) as f64
            }
        } else {
            MARGIN_LEFT as f64 + plot_w * (ts - t0) as f64 / span as f64
        }
    };
    let y_for = |pct: f64| MARGIN_TOP as f64 + plot_h * (1.0 - pct / 100.0);

    // Horizontal gridlines with percentage labels.
    for step in [0u32, 25, 50, 75, 100] {
        let y = y_for(step as f64);
        svg.push_str(&format!(
            "  <line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{}\" y2=\"{y:.1}\" \
             stroke=\"{GRID_COLOR}\"/>\n",
            WIDTH - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{:.1}\" font-size=\"12\" fill=\"{TEXT_COLOR}\" \
             text-anchor=\"end\" dominant-baseline=\"middle\">{step}%</text>\n",
            MARGIN_LEFT - 8,
            y
        ));
    }

    // The progress line and its point markers.
    let polyline: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(idx, (ts, pct))| {
            format!("{:.1},{:.1}", x_for(idx, ts.and_utc().timestamp()), y_for(*pct))
        })
        .collect();
    svg.push_str(&format!(
        "  <polyline points=\"{}\" fill=\"none\" stroke=\"{LINE_COLOR}\" stroke-width=\"2\"/>\n",
        polyline.join(" ")
    ));
    for (idx, (ts, pct)) in points.iter().enumerate() {
        svg.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3.5\" fill=\"{LINE_COLOR}\"/>\n",
            x_for(idx, ts.and_utc().timestamp()),
            y_for(*pct)
        ));
    }

    // First and last timestamps label the time axis.
    let axis_y = HEIGHT - MARGIN_BOTTOM + 24;
    if let Some((first, _)) = points.first() {
        svg.push_str(&format!(
            "  <text x=\"{MARGIN_LEFT}\" y=\"{axis_y}\" font-size=\"12\" \
             fill=\"{TEXT_COLOR}\">{}</text>\n",
            first.format("%Y-%m-%d %H:%M")
        ));
    }
    if points.len() > 1 {
        if let Some((last, _)) = points.last() {
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{axis_y}\" font-size=\"12\" fill=\"{TEXT_COLOR}\" \
                 text-anchor=\"end\">{}</text>\n",
                WIDTH - MARGIN_RIGHT,
                last.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the progress chart to a file.
pub fn write_progress_chart(
    records: &[ProgressRecord],
    quiz: Option<&str>,
    path: &Path,
) -> Result<()> {
    let svg = render_progress_chart(records, quiz);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)
        .with_context(|| format!("failed to write chart to {}", path.display()))?;
    Ok(())
}
