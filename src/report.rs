use std::fmt::Write;

use crate::chart;
use crate::locale::{Locale, Phrase};
use crate::models::WeeklyPoint;
use crate::share;
use crate::source::DashboardData;
use crate::weekly;

/// Width of the longest text bar in the trend section.
const BAR_WIDTH: f64 = 30.0;

pub fn build_report(data: &DashboardData, locale: Locale) -> String {
    let series = weekly::aggregate_weekly(&data.applications, locale);
    render(data, &series, locale)
}

pub fn render(data: &DashboardData, series: &[WeeklyPoint], locale: Locale) -> String {
    let stats = data.stats();
    let mut output = String::new();

    let _ = writeln!(output, "# {}", locale.text(Phrase::Title));
    let _ = writeln!(output);
    let _ = writeln!(output, "## {}", locale.text(Phrase::Overview));
    for (title, value) in stats.widgets(locale) {
        let _ = writeln!(output, "- {title}: {value}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## {}", locale.text(Phrase::ApplicationsTrend));

    if series.is_empty() {
        let _ = writeln!(output, "{}", locale.no_data_message());
    } else {
        let max = chart::scale_max(series);
        let _ = writeln!(
            output,
            "| {} | {} | |",
            locale.text(Phrase::Week),
            locale.text(Phrase::Applications)
        );
        let _ = writeln!(output, "| --- | ---: | --- |");
        for point in series {
            let width = chart::bar_height(point.applications, max, BAR_WIDTH, 1.0).round() as usize;
            let _ = writeln!(
                output,
                "| {} | {} | {} |",
                point.label,
                point.applications,
                "#".repeat(width)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## {}", locale.text(Phrase::OverallDistribution));

    for segment in share::share_segments(&stats.share_items(locale)) {
        let _ = writeln!(
            output,
            "- {}: {} ({:.1}%, {:.1} to {:.1})",
            segment.label,
            segment.value,
            segment.percent(),
            segment.start,
            segment.end
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_dashboard_shows_placeholder() {
        let data = DashboardData::default();
        let report = render(&data, &[], Locale::En);

        assert!(report.contains("- Total Candidates: 0"));
        assert!(report.contains("No application data available"));
        assert!(report.contains("- Total Jobs: 0 (0.0%, 0.0 to 0.0)"));
    }

    #[test]
    fn german_report_has_no_english_captions() {
        let data = DashboardData {
            users: vec![json!({})],
            ..DashboardData::default()
        };
        let report = render(&data, &[], Locale::De);

        assert!(report.starts_with("# Recruiting-Dashboard\n"));
        assert!(report.contains("## Übersicht"));
        assert!(report.contains("- Kandidaten gesamt: 1\n"));
        assert!(report.contains("Keine Bewerbungsdaten verfügbar"));
        assert!(report.contains("## Gesamtverteilung"));
        assert!(report.contains("- Aktive Kunden: 0 (0.0%, 100.0 to 100.0)"));
        for english in ["Total", "Overview", "Trend", "Distribution", "Clients"] {
            assert!(!report.contains(english), "{english}");
        }
    }

    #[test]
    fn trend_rows_scale_against_busiest_week() {
        let data = DashboardData {
            users: vec![json!({}); 3],
            jobs: vec![json!({})],
            ..DashboardData::default()
        };
        let series = vec![
            WeeklyPoint {
                label: "Jan 7".to_string(),
                applications: 4,
            },
            WeeklyPoint {
                label: "Jan 14".to_string(),
                applications: 1,
            },
        ];
        let report = render(&data, &series, Locale::En);

        assert!(report.contains(&format!("| Jan 7 | 4 | {} |", "#".repeat(30))));
        assert!(report.contains("| Jan 14 | 1 | ######## |"));
        assert!(report.contains("- Total Candidates: 3 (75.0%, 0.0 to 75.0)"));
        assert!(report.contains("- Total Jobs: 1 (25.0%, 75.0 to 100.0)"));
    }
}
