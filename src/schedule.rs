use crate::calendar::{self, CalendarResult};
use crate::overrides::OverrideTable;
use crate::rule::MeetingRule;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The meeting plan: a recurring rule plus a table of one-off override
/// windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingSchedule {
    rule: MeetingRule,
    overrides: OverrideTable,
}

impl MeetingSchedule {
    pub fn new(rule: MeetingRule, overrides: OverrideTable) -> Self {
        Self { rule, overrides }
    }

    pub fn rule(&self) -> &MeetingRule {
        &self.rule
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn set_overrides(&mut self, overrides: OverrideTable) {
        self.overrides = overrides;
    }

    /// Next meeting on or after `today`.
    ///
    /// Override windows win over the recurring rule. Otherwise the first
    /// rule occurrence of the current month whose date is on or after
    /// `today` is returned, falling back to the earliest occurrence of
    /// the following month (with year rollover past December).
    pub fn next_meeting(&self, today: NaiveDate) -> CalendarResult<NaiveDate> {
        if let Some(meeting) = self.overrides.fixed_meeting_for(today) {
            return Ok(meeting);
        }

        for candidate in self.rule.dates_in_month(today.year(), today.month())? {
            if candidate >= today {
                return Ok(candidate);
            }
        }

        let (year, month) = calendar::next_month(today.year(), today.month());
        let upcoming = self.rule.dates_in_month(year, month)?;
        // rule construction guarantees at least one occurrence
        Ok(upcoming[0])
    }

    /// The rule's meeting dates within one month, ignoring overrides.
    pub fn meetings_in_month(&self, year: i32, month: u32) -> CalendarResult<Vec<NaiveDate>> {
        self.rule.dates_in_month(year, month)
    }
}
