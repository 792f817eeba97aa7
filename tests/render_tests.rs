use chrono::NaiveDate;
use meeting_tool::{
    DisplayError, MemoryPage, MeetingSchedule, NEXT_MEETING_ELEMENT_ID, RenderError,
    insert_next_meeting, localized_next_meeting,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn renders_into_the_next_meeting_element() {
    let schedule = MeetingSchedule::default();
    let mut page = MemoryPage::new().with_element(NEXT_MEETING_ELEMENT_ID);

    let rendered =
        insert_next_meeting(&schedule, date(2025, 8, 10), "/index.html", &mut page).unwrap();
    assert_eq!(rendered, "22 August 2025");
    assert_eq!(page.text(NEXT_MEETING_ELEMENT_ID), Some("22 August 2025"));
}

#[test]
fn renders_german_for_the_german_page() {
    let schedule = MeetingSchedule::default();
    let mut page = MemoryPage::new().with_element(NEXT_MEETING_ELEMENT_ID);

    let rendered = insert_next_meeting(&schedule, date(2025, 8, 10), "/de.html", &mut page).unwrap();
    assert_eq!(rendered, "22. August 2025");
    assert_eq!(page.text(NEXT_MEETING_ELEMENT_ID), Some("22. August 2025"));
}

#[test]
fn missing_output_element_is_an_error() {
    let schedule = MeetingSchedule::default();
    let mut page = MemoryPage::new().with_element("unrelated");

    let err = insert_next_meeting(&schedule, date(2025, 8, 10), "/index.html", &mut page)
        .unwrap_err();
    match err {
        RenderError::Display(DisplayError::ElementMissing { element_id }) => {
            assert_eq!(element_id, NEXT_MEETING_ELEMENT_ID);
        }
        other => panic!("expected ElementMissing, got {other:?}"),
    }
    assert_eq!(page.text("unrelated"), Some(""));
}

#[test]
fn localized_next_meeting_formats_without_a_sink() {
    let schedule = MeetingSchedule::default();
    let rendered = localized_next_meeting(&schedule, date(2025, 8, 25), "/de.html").unwrap();
    assert_eq!(rendered, "12. September 2025");
}
