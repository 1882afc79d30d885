pub mod chart;
pub mod locale;
pub mod models;
pub mod report;
pub mod share;
pub mod source;
pub mod weekly;

pub use locale::Locale;
pub use models::{ApplicationRecord, DashboardStats, ShareItem, ShareSegment, WeekBucket, WeeklyPoint};
pub use share::share_segments;
pub use weekly::{aggregate_weekly, aggregate_weekly_in};
