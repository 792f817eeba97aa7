use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{CalendarError, MeetingLocale, MeetingRule, MeetingSchedule, OverrideTable};

#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RwLock<MeetingSchedule>>,
}

impl AppState {
    pub fn new(schedule: MeetingSchedule) -> Self {
        Self {
            schedule: Arc::new(RwLock::new(schedule)),
        }
    }

    pub fn with_shared(schedule: Arc<RwLock<MeetingSchedule>>) -> Self {
        Self { schedule }
    }

    fn schedule(&self) -> Arc<RwLock<MeetingSchedule>> {
        self.schedule.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl From<CalendarError> for ApiError {
    fn from(value: CalendarError) -> Self {
        match value {
            CalendarError::InvalidMonth { .. } => ApiError::Invalid(value.to_string()),
            CalendarError::NoSuchOccurrence { .. } => ApiError::NotFound(value.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rule", get(get_rule))
        .route("/overrides", get(get_overrides))
        .route("/next-meeting", get(next_meeting))
        .route("/meetings/:year/:month", get(meetings_in_month))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, schedule: MeetingSchedule) -> std::io::Result<()> {
    let state = AppState::new(schedule);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_rule(State(state): State<AppState>) -> Json<MeetingRule> {
    let schedule = state.schedule();
    let rule = {
        let guard = schedule.read();
        guard.rule().clone()
    };
    Json(rule)
}

async fn get_overrides(State(state): State<AppState>) -> Json<OverrideTable> {
    let schedule = state.schedule();
    let overrides = {
        let guard = schedule.read();
        guard.overrides().clone()
    };
    Json(overrides)
}

#[derive(Debug, Deserialize)]
struct NextMeetingQuery {
    /// Resolution date; defaults to the host's current local date.
    date: Option<NaiveDate>,
    /// Page path used for locale selection, e.g. `/de.html`.
    page: Option<String>,
}

#[derive(Debug, Serialize)]
struct NextMeetingBody {
    date: NaiveDate,
    formatted: String,
    locale: &'static str,
}

async fn next_meeting(
    State(state): State<AppState>,
    Query(query): Query<NextMeetingQuery>,
) -> Result<Json<NextMeetingBody>, ApiError> {
    let today = query.date.unwrap_or_else(|| Local::now().date_naive());
    let locale = MeetingLocale::from_page_path(query.page.as_deref().unwrap_or(""));
    let schedule = state.schedule();
    let date = {
        let guard = schedule.read();
        guard.next_meeting(today)?
    };
    Ok(Json(NextMeetingBody {
        date,
        formatted: locale.format_long(date),
        locale: locale.tag(),
    }))
}

#[derive(Debug, Serialize)]
struct MeetingsBody {
    dates: Vec<NaiveDate>,
}

async fn meetings_in_month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MeetingsBody>, ApiError> {
    let schedule = state.schedule();
    let dates = {
        let guard = schedule.read();
        guard.meetings_in_month(year, month)?
    };
    Ok(Json(MeetingsBody { dates }))
}
