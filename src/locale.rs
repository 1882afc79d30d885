use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

/// Fixed dashboard captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    Title,
    Overview,
    ApplicationsTrend,
    OverallDistribution,
    Week,
    Applications,
    TotalCandidates,
    TotalJobs,
    ActiveClients,
    TotalApplications,
    NoData,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    De,
    #[default]
    En,
}

impl Locale {
    /// `de` and `de-*` select German; every other tag falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag == "de" || tag.starts_with("de-") || tag.starts_with("de_") {
            Locale::De
        } else {
            Locale::En
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// Abbreviated month plus day, e.g. `Jan 7` or `7. Jan.`.
    pub fn week_label(self, date: NaiveDate) -> String {
        let month = date.month0() as usize;
        match self {
            Locale::De => format!("{}. {}", date.day(), MONTHS_DE[month]),
            Locale::En => format!("{} {}", MONTHS_EN[month], date.day()),
        }
    }

    pub fn text(self, phrase: Phrase) -> &'static str {
        match (self, phrase) {
            (Locale::De, Phrase::Title) => "Recruiting-Dashboard",
            (Locale::En, Phrase::Title) => "Recruitment Dashboard",
            (Locale::De, Phrase::Overview) => "Übersicht",
            (Locale::En, Phrase::Overview) => "Overview",
            (Locale::De, Phrase::ApplicationsTrend) => "Bewerbungstrend",
            (Locale::En, Phrase::ApplicationsTrend) => "Applications Trend",
            (Locale::De, Phrase::OverallDistribution) => "Gesamtverteilung",
            (Locale::En, Phrase::OverallDistribution) => "Overall Distribution",
            (Locale::De, Phrase::Week) => "Woche",
            (Locale::En, Phrase::Week) => "Week",
            (Locale::De, Phrase::Applications) => "Bewerbungen",
            (Locale::En, Phrase::Applications) => "Applications",
            (Locale::De, Phrase::TotalCandidates) => "Kandidaten gesamt",
            (Locale::En, Phrase::TotalCandidates) => "Total Candidates",
            (Locale::De, Phrase::TotalJobs) => "Jobs gesamt",
            (Locale::En, Phrase::TotalJobs) => "Total Jobs",
            (Locale::De, Phrase::ActiveClients) => "Aktive Kunden",
            (Locale::En, Phrase::ActiveClients) => "Active Clients",
            (Locale::De, Phrase::TotalApplications) => "Bewerbungen gesamt",
            (Locale::En, Phrase::TotalApplications) => "Total Applications",
            (Locale::De, Phrase::NoData) => "Keine Bewerbungsdaten verfügbar",
            (Locale::En, Phrase::NoData) => "No application data available",
        }
    }

    pub fn no_data_message(self) -> &'static str {
        self.text(Phrase::NoData)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_tag(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn tags_fall_back_to_english() {
        assert_eq!(Locale::from_tag("de"), Locale::De);
        assert_eq!(Locale::from_tag("DE"), Locale::De);
        assert_eq!(Locale::from_tag("de-DE"), Locale::De);
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::De);
    }

    #[test]
    fn english_labels_put_month_first() {
        assert_eq!(Locale::En.week_label(date(2024, 1, 7)), "Jan 7");
        assert_eq!(Locale::En.week_label(date(2023, 12, 31)), "Dec 31");
    }

    #[test]
    fn german_labels_put_day_first() {
        assert_eq!(Locale::De.week_label(date(2024, 1, 7)), "7. Jan.");
        assert_eq!(Locale::De.week_label(date(2024, 3, 10)), "10. März");
        assert_eq!(Locale::De.week_label(date(2024, 9, 1)), "1. Sept.");
    }

    #[test]
    fn every_phrase_is_translated() {
        let phrases = [
            Phrase::Title,
            Phrase::Overview,
            Phrase::ApplicationsTrend,
            Phrase::OverallDistribution,
            Phrase::Week,
            Phrase::Applications,
            Phrase::TotalCandidates,
            Phrase::TotalJobs,
            Phrase::ActiveClients,
            Phrase::TotalApplications,
            Phrase::NoData,
        ];
        for phrase in phrases {
            assert_ne!(Locale::De.text(phrase), Locale::En.text(phrase), "{phrase:?}");
        }
        assert_eq!(Locale::De.no_data_message(), "Keine Bewerbungsdaten verfügbar");
    }
}
