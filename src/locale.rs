use chrono::{Datelike, NaiveDate};

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Output locale for rendered meeting dates.
///
/// Pages are distinguished by file name only: the German page is served
/// as `de.html`, every other page uses the British English default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeetingLocale {
    #[default]
    EnGb,
    DeDe,
}

impl MeetingLocale {
    /// Locale for a page path such as `/de.html` or `/en/index.html`:
    /// the final path segment, stripped of its `.html` extension, selects
    /// the language.
    pub fn from_page_path(path: &str) -> Self {
        let file = path.rsplit('/').next().unwrap_or("");
        let slug = file.strip_suffix(".html").unwrap_or(file);
        match slug {
            "de" => MeetingLocale::DeDe,
            _ => MeetingLocale::EnGb,
        }
    }

    /// The language-region tag, e.g. `en-GB`.
    pub fn tag(self) -> &'static str {
        match self {
            MeetingLocale::EnGb => "en-GB",
            MeetingLocale::DeDe => "de-DE",
        }
    }

    /// Long-form date rendering: `22 August 2025` / `22. August 2025`.
    pub fn format_long(self, date: NaiveDate) -> String {
        let month = date.month0() as usize;
        match self {
            MeetingLocale::EnGb => {
                format!("{} {} {}", date.day(), MONTHS_EN[month], date.year())
            }
            MeetingLocale::DeDe => {
                format!("{}. {} {}", date.day(), MONTHS_DE[month], date.year())
            }
        }
    }
}
