pub mod calendar;
pub mod display;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod locale;
pub mod overrides;
pub mod render;
pub mod rule;
pub mod schedule;

pub use calendar::{CalendarError, CalendarResult};
pub use display::{DisplayError, DisplaySink, MemoryPage};
pub use locale::MeetingLocale;
pub use overrides::{OverrideTable, OverrideWindow};
pub use render::{
    NEXT_MEETING_ELEMENT_ID, RenderError, insert_next_meeting, localized_next_meeting,
};
pub use rule::MeetingRule;
pub use schedule::MeetingSchedule;
