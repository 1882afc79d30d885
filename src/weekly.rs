use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde_json::Value;
use tracing::debug;

use crate::locale::Locale;
use crate::models::{ApplicationRecord, WeekBucket, WeeklyPoint, TIMESTAMP_FIELDS};

pub const MAX_WEEKS: usize = 6;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn resolve_timestamp(record: &ApplicationRecord) -> Option<&Value> {
    TIMESTAMP_FIELDS
        .iter()
        .filter_map(|field| record.get(field))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.is_empty(),
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parses a timestamp value into wall-clock time in `tz`.
///
/// Offsets are converted into `tz`; naive values are already wall-clock time.
/// Numbers are epoch milliseconds and `true` is one millisecond past the epoch.
pub fn parse_wall_clock<Tz: TimeZone>(value: &Value, tz: &Tz) -> Option<NaiveDateTime> {
    let millis = match value {
        Value::String(text) => return parse_text(text.trim(), tz),
        Value::Number(number) => number.as_f64().filter(|n| n.is_finite())?.trunc() as i64,
        Value::Bool(true) => 1,
        _ => return None,
    };
    DateTime::from_timestamp_millis(millis).map(|moment| moment.with_timezone(tz).naive_local())
}

fn parse_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let with_offset = DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| DateTime::parse_from_rfc2822(text).ok())
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(text, format).ok())
        });
    if let Some(moment) = with_offset {
        return Some(moment.with_timezone(tz).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| parse_date(text).map(|date| date.and_time(NaiveTime::MIN)))
}

// `YYYY-MM-DD`, `YYYY-MM` and `YYYY`; missing parts default to the first.
fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    match text.split_once('-') {
        Some((year, month)) if year.len() == 4 && month.len() == 2 => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1)
        }
        _ => None,
    }
}

/// The Sunday on or before `date`, if the calendar reaches back that far.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset))
}

pub fn weekly_buckets_in<Tz: TimeZone>(
    records: &[ApplicationRecord],
    locale: Locale,
    tz: &Tz,
) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(start) = resolve_timestamp(record)
            .and_then(|value| parse_wall_clock(value, tz))
            .and_then(|moment| week_start(moment.date()))
        else {
            skipped += 1;
            continue;
        };

        let bucket = buckets.entry(start).or_insert_with(|| WeekBucket {
            week_start: start,
            label: locale.week_label(start),
            applications: 0,
        });
        bucket.applications += 1;
    }

    if skipped > 0 {
        debug!(skipped, "ignored applications without a usable timestamp");
    }

    let older = buckets.len().saturating_sub(MAX_WEEKS);
    buckets.into_values().skip(older).collect()
}

pub fn weekly_buckets(records: &[ApplicationRecord], locale: Locale) -> Vec<WeekBucket> {
    weekly_buckets_in(records, locale, &Local)
}

pub fn aggregate_weekly_in<Tz: TimeZone>(
    records: &[ApplicationRecord],
    locale: Locale,
    tz: &Tz,
) -> Vec<WeeklyPoint> {
    weekly_buckets_in(records, locale, tz)
        .into_iter()
        .map(WeeklyPoint::from)
        .collect()
}

pub fn aggregate_weekly(records: &[ApplicationRecord], locale: Locale) -> Vec<WeeklyPoint> {
    aggregate_weekly_in(records, locale, &Local)
}
