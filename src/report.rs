use std::fmt::Write;

use crate::analysis::DashboardData;
use crate::filter::FilterSpec;

/// Render one filter pass as a terminal dashboard: metric row, the three
/// aggregate views, then the detail table sorted most-recent-first.
pub fn build_report(data: &DashboardData, spec: &FilterSpec) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Credit Rating Monitor ===");
    let _ = writeln!(out, "Window: {} to {}", spec.date_from, spec.date_to);
    let _ = writeln!(out);

    if data.is_empty() {
        let _ = writeln!(
            out,
            "No data matches the selected filters. Please adjust your filter criteria."
        );
        return out;
    }

    let s = &data.summary;
    let _ = writeln!(
        out,
        "Total changes: {}   Upgrades: {}   Downgrades: {}   Stable: {}",
        s.total, s.upgrades, s.downgrades, s.stable
    );
    let _ = writeln!(out, "Investment-grade crossings: {}", data.grade_crossings);

    let _ = writeln!(out, "\n--- Changes by agency ---");
    for row in &data.by_agency {
        let _ = writeln!(out, "{:<14} | {:>4}", row.agency.to_string(), row.count);
    }

    let _ = writeln!(out, "\n--- Change type distribution ---");
    for row in &data.by_change_type {
        let share = 100.0 * row.count as f64 / s.total as f64;
        let _ = writeln!(
            out,
            "{:<10} | {:>4} | {:>5.1}%",
            row.change_type.to_string(),
            row.count,
            share
        );
    }

    let _ = writeln!(out, "\n--- Timeline ---");
    for point in &data.timeline {
        let _ = writeln!(
            out,
            "{} | {:<10} | {:>4}",
            point.date,
            point.change_type.to_string(),
            point.count
        );
    }

    let _ = writeln!(out, "\n--- Rating changes (most recent first) ---");
    let _ = writeln!(
        out,
        "{:<10} | {:<24} | {:<13} | {:<12} | {:<12} | {:<9} | {:<8} | {:<14} | {:>7}",
        "Date", "Company", "Agency", "Old", "New", "Change", "Outlook", "Sector", "Notches"
    );

    let mut rows = data.events.clone();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    for event in &rows {
        let _ = writeln!(
            out,
            "{:<10} | {:<24} | {:<13} | {:<12} | {:<12} | {:<9} | {:<8} | {:<14} | {:>7}",
            event.date.to_string(),
            event.company,
            event.agency.to_string(),
            event.old_rating,
            event.new_rating,
            event.change_type.to_string(),
            event.outlook.to_string(),
            event.sector.to_string(),
            event.notch_delta,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::config::{GeneratorConfig, WINDOW_DAYS};
    use crate::generator;

    fn window() -> (NaiveDate, NaiveDate) {
        let anchor = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        (anchor - Duration::days(WINDOW_DAYS), anchor)
    }

    fn dashboard(count: usize) -> DashboardData {
        let (_, anchor) = window();
        DashboardData::from_events(generator::generate(&GeneratorConfig {
            count,
            seed: 42,
            anchor,
        }))
    }

    #[test]
    fn empty_result_renders_the_no_data_message() {
        let (from, to) = window();
        let report = build_report(&dashboard(0), &FilterSpec::select_all(from, to));
        assert!(report.contains("No data matches the selected filters"));
        assert!(!report.contains("Total changes"));
    }

    #[test]
    fn report_carries_metrics_and_sections() {
        let (from, to) = window();
        let data = dashboard(80);
        let report = build_report(&data, &FilterSpec::select_all(from, to));

        assert!(report.contains(&format!("Total changes: {}", data.summary.total)));
        assert!(report.contains("--- Changes by agency ---"));
        assert!(report.contains("--- Change type distribution ---"));
        assert!(report.contains("--- Timeline ---"));
        assert!(report.contains("--- Rating changes (most recent first) ---"));
    }

    #[test]
    fn detail_table_is_sorted_most_recent_first() {
        let (from, to) = window();
        let data = dashboard(80);
        let report = build_report(&data, &FilterSpec::select_all(from, to));

        let latest = data.events.iter().map(|e| e.date).max().unwrap();
        let first_row = report
            .lines()
            .skip_while(|l| !l.starts_with("Date"))
            .nth(1)
            .expect("detail table has rows");
        assert!(first_row.starts_with(&latest.to_string()));
    }
}
