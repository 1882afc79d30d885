use crate::models::WeeklyPoint;

/// Bar area height of the trend chart, in pixels.
pub const BAR_AREA_HEIGHT: f64 = 220.0;
pub const MIN_BAR_HEIGHT: f64 = 10.0;

pub fn scale_max(series: &[WeeklyPoint]) -> u32 {
    match series.iter().map(|point| point.applications).max() {
        Some(max) => max.max(1),
        None => 100,
    }
}

pub fn axis_ticks(max: u32) -> [u32; 5] {
    let max = f64::from(max);
    [0.0, 0.25, 0.5, 0.75, 1.0].map(|fraction| (max * fraction).ceil() as u32)
}

pub fn bar_height(applications: u32, max: u32, full: f64, floor: f64) -> f64 {
    let max = f64::from(max.max(1));
    (f64::from(applications) / max * full).max(floor)
}
