use crate::models::{ShareItem, ShareSegment};

/// Splits `[0, 100]` into contiguous slices proportional to each item's value.
///
/// Slices follow input order. A non-positive total is treated as 1 so empty
/// dashboards produce zero-width slices instead of NaN.
pub fn share_segments(items: &[ShareItem]) -> Vec<ShareSegment> {
    let total: f64 = items.iter().map(|item| finite(item.value)).sum();
    let total = if total > 0.0 { total } else { 1.0 };

    let mut acc = 0.0;
    items
        .iter()
        .map(|item| {
            let start = acc * 100.0 / total;
            acc += finite(item.value);
            let end = acc * 100.0 / total;
            ShareSegment {
                label: item.label.clone(),
                value: item.value,
                start,
                end,
            }
        })
        .collect()
}

fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::models::DashboardStats;

    fn items(values: &[f64]) -> Vec<ShareItem> {
        values
            .iter()
            .enumerate()
            .map(|(idx, value)| ShareItem::new(format!("item-{idx}"), *value))
            .collect()
    }

    fn bounds(segments: &[ShareSegment]) -> Vec<(f64, f64)> {
        segments.iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn segments_partition_full_circle() {
        let segments = share_segments(&items(&[10.0, 20.0, 30.0, 40.0]));
        assert_eq!(
            bounds(&segments),
            vec![(0.0, 10.0), (10.0, 30.0), (30.0, 60.0), (60.0, 100.0)]
        );
        assert!(segments.windows(2).all(|pair| pair[0].end == pair[1].start));
    }

    #[test]
    fn zero_total_collapses_to_zero_width() {
        let segments = share_segments(&items(&[0.0, 0.0, 0.0, 0.0]));
        assert!(segments.iter().all(|s| s.start == 0.0 && s.end == 0.0));
    }

    #[test]
    fn non_finite_values_count_as_zero() {
        let segments = share_segments(&items(&[f64::NAN, 5.0, 5.0]));
        assert_eq!(bounds(&segments), vec![(0.0, 0.0), (0.0, 50.0), (50.0, 100.0)]);
    }

    #[test]
    fn uneven_totals_still_end_at_one_hundred() {
        let segments = share_segments(&items(&[1.0, 1.0, 1.0]));
        let last = segments.last().unwrap();
        assert!((last.end - 100.0).abs() < 1e-9);
        assert!((segments[0].percent() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn dashboard_items_keep_widget_order() {
        let stats = DashboardStats {
            total_candidates: 3,
            total_jobs: 1,
            active_clients: 0,
            total_applications: 4,
        };
        let segments = share_segments(&stats.share_items(Locale::En));
        let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Total Candidates", "Total Jobs", "Active Clients", "Total Applications"]
        );

        let german = share_segments(&stats.share_items(Locale::De));
        assert_eq!(german[0].label, "Kandidaten gesamt");
        assert_eq!(bounds(&segments)[3], (50.0, 100.0));
    }
}
