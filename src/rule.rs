use crate::calendar::{self, CalendarResult};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A recurring meeting rule: selected occurrences of one weekday per month
/// (e.g. the 2nd and 4th Friday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRule {
    weekday: Weekday,
    occurrences: Vec<u32>,
}

impl Default for MeetingRule {
    /// The 2nd and 4th Friday of every month.
    fn default() -> Self {
        Self::new(Weekday::Fri, [2, 4])
    }
}

impl MeetingRule {
    /// Build a rule from a weekday and 1-based occurrence ordinals.
    /// Ordinals are sorted and deduplicated; each must be in 1..=5.
    pub fn new<I>(weekday: Weekday, occurrences: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut occurrences: Vec<u32> = occurrences.into_iter().collect();
        if occurrences.is_empty() {
            panic!("MeetingRule requires at least one occurrence");
        }
        occurrences.sort_unstable();
        occurrences.dedup();
        for &nth in &occurrences {
            if !(1..=5).contains(&nth) {
                panic!("MeetingRule occurrence {nth} is outside 1..=5");
            }
        }

        Self {
            weekday,
            occurrences,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn occurrences(&self) -> &[u32] {
        &self.occurrences
    }

    /// The rule's meeting dates within one month, ascending.
    pub fn dates_in_month(&self, year: i32, month: u32) -> CalendarResult<Vec<NaiveDate>> {
        self.occurrences
            .iter()
            .map(|&nth| calendar::nth_weekday(year, month, self.weekday, nth))
            .collect()
    }
}
