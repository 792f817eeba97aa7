use crate::calendar::CalendarError;
use crate::display::{DisplayError, DisplaySink};
use crate::locale::MeetingLocale;
use crate::schedule::MeetingSchedule;
use chrono::NaiveDate;
use std::fmt;

/// Id of the output element the next meeting date is written into.
pub const NEXT_MEETING_ELEMENT_ID: &str = "next-meeting";

#[derive(Debug)]
pub enum RenderError {
    Calendar(CalendarError),
    Display(DisplayError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Calendar(err) => write!(f, "calendar error: {err}"),
            RenderError::Display(err) => write!(f, "display error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<CalendarError> for RenderError {
    fn from(value: CalendarError) -> Self {
        Self::Calendar(value)
    }
}

impl From<DisplayError> for RenderError {
    fn from(value: DisplayError) -> Self {
        Self::Display(value)
    }
}

/// Localized long-form rendering of the next meeting after `today`, in
/// the locale of the given page.
pub fn localized_next_meeting(
    schedule: &MeetingSchedule,
    today: NaiveDate,
    page_path: &str,
) -> Result<String, CalendarError> {
    let meeting = schedule.next_meeting(today)?;
    Ok(MeetingLocale::from_page_path(page_path).format_long(meeting))
}

/// Resolve, format and write the next meeting date into the page's
/// `next-meeting` element. Returns the rendered string.
pub fn insert_next_meeting(
    schedule: &MeetingSchedule,
    today: NaiveDate,
    page_path: &str,
    page: &mut dyn DisplaySink,
) -> Result<String, RenderError> {
    let rendered = localized_next_meeting(schedule, today, page_path)?;
    page.replace_text(NEXT_MEETING_ELEMENT_ID, &rendered)?;
    Ok(rendered)
}
