use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One scheduled class: a single atomic slot in the weekly timetable.
///
/// Invariant: `start_time < end_time`; both lie inside the teaching window;
/// `[start_time, end_time)` is disjoint from every applicable break window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Period {
    #[serde(rename = "day_of_week")]
    pub weekday: u8,
    pub period_number: u32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    pub section_id: String,
}
