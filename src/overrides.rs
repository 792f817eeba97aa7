use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A one-off schedule correction: while the current date lies in
/// `starts..=ends`, the recurring rule is superseded and `meeting` is the
/// next meeting date, whether or not it matches the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideWindow {
    pub starts: NaiveDate,
    pub ends: NaiveDate,
    pub meeting: NaiveDate,
}

impl OverrideWindow {
    pub fn new(starts: NaiveDate, ends: NaiveDate, meeting: NaiveDate) -> Self {
        Self {
            starts,
            ends,
            meeting,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.starts <= date && date <= self.ends
    }
}

/// Ordered table of override windows; the first window containing a date
/// wins. Future one-off corrections are new table rows, not new code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideTable {
    windows: Vec<OverrideWindow>,
}

impl Default for OverrideTable {
    /// The one-time August 2025 correction that moved the meeting to the
    /// 22nd.
    fn default() -> Self {
        let starts = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let ends = NaiveDate::from_ymd_opt(2025, 8, 21).unwrap();
        let meeting = NaiveDate::from_ymd_opt(2025, 8, 22).unwrap();
        Self::new([OverrideWindow::new(starts, ends, meeting)])
    }
}

impl OverrideTable {
    pub fn new<I>(windows: I) -> Self
    where
        I: IntoIterator<Item = OverrideWindow>,
    {
        Self {
            windows: windows.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }

    pub fn windows(&self) -> &[OverrideWindow] {
        &self.windows
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn push(&mut self, window: OverrideWindow) {
        self.windows.push(window);
    }

    /// Fixed meeting date for `date`, if an override window covers it.
    pub fn fixed_meeting_for(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.windows
            .iter()
            .find(|window| window.contains(date))
            .map(|window| window.meeting)
    }
}
