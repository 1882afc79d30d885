use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::locale::{Locale, Phrase};

/// Timestamp aliases checked on every application, highest priority first.
pub const TIMESTAMP_FIELDS: [&str; 4] = ["created_at", "applied_at", "application_date", "updated_at"];

/// An application as delivered by the backend. The shape is not owned here,
/// so fields are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationRecord {
    pub fields: Map<String, Value>,
}

impl ApplicationRecord {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn id(&self) -> Option<String> {
        match self.fields.get("id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for ApplicationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub label: String,
    pub applications: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub label: String,
    pub applications: u32,
}

impl From<WeekBucket> for WeeklyPoint {
    fn from(bucket: WeekBucket) -> Self {
        Self {
            label: bucket.label,
            applications: bucket.applications,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_candidates: usize,
    pub total_jobs: usize,
    pub active_clients: usize,
    pub total_applications: usize,
}

impl DashboardStats {
    /// Widget captions and values in the dashboard's fixed order.
    pub fn widgets(&self, locale: Locale) -> [(&'static str, usize); 4] {
        [
            (locale.text(Phrase::TotalCandidates), self.total_candidates),
            (locale.text(Phrase::TotalJobs), self.total_jobs),
            (locale.text(Phrase::ActiveClients), self.active_clients),
            (locale.text(Phrase::TotalApplications), self.total_applications),
        ]
    }

    pub fn share_items(&self, locale: Locale) -> Vec<ShareItem> {
        self.widgets(locale)
            .into_iter()
            .map(|(label, value)| ShareItem::new(label, value as f64))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareItem {
    pub label: String,
    pub value: f64,
}

impl ShareItem {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSegment {
    pub label: String,
    pub value: f64,
    pub start: f64,
    pub end: f64,
}

impl ShareSegment {
    pub fn percent(&self) -> f64 {
        self.end - self.start
    }
}
