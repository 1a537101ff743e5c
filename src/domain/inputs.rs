//! Read-only input documents for a single generation/optimize/analyze run.

use serde::{Deserialize, Serialize};

use crate::domain::time::{decode_days, parse_time, DEFAULT_SCHOOL_DAYS_MASK};
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Subject ids this section takes. Empty means "all subjects permitted".
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    /// Subject ids this teacher may teach.
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub can_teach_all: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_school_days_mask() -> u8 {
    DEFAULT_SCHOOL_DAYS_MASK
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolTiming {
    #[serde(default = "default_school_days_mask")]
    pub school_days: u8,
    pub period_duration_minutes: i64,
    pub total_periods: u32,
    pub start_time: String,
    pub end_time: String,
}

impl Default for SchoolTiming {
    fn default() -> Self {
        SchoolTiming {
            school_days: default_school_days_mask(),
            period_duration_minutes: 45,
            total_periods: 8,
            start_time: "08:00:00".to_string(),
            end_time: "15:00:00".to_string(),
        }
    }
}

impl SchoolTiming {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.period_duration_minutes <= 0 {
            return Err(AppError::validation(
                "school_timing.period_duration_minutes must be positive",
            ));
        }
        if self.total_periods == 0 {
            return Err(AppError::validation(
                "school_timing.total_periods must be positive",
            ));
        }
        let start = self.start()?;
        let end = self.end()?;
        if start >= end {
            return Err(AppError::validation(
                "school_timing.start_time must be before end_time",
            ));
        }
        Ok(())
    }

    pub fn days(&self) -> Vec<u8> {
        decode_days(self.school_days)
    }

    pub fn start(&self) -> Result<chrono::NaiveTime, AppError> {
        parse_time(&self.start_time)
    }

    pub fn end(&self) -> Result<chrono::NaiveTime, AppError> {
        parse_time(&self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakSchedule {
    #[serde(default)]
    pub days: u8,
    pub start_time: String,
    pub end_time: String,
}

impl BreakSchedule {
    pub fn validate(&self) -> Result<(), AppError> {
        let start = parse_time(&self.start_time)?;
        let end = parse_time(&self.end_time)?;
        if start >= end {
            return Err(AppError::validation(
                "break_schedule.start_time must be before end_time",
            ));
        }
        Ok(())
    }

    pub fn applies_on(&self, weekday: u8) -> bool {
        decode_days(self.days).contains(&weekday)
    }
}

/// True iff `time` on `weekday` falls inside any configured break window.
/// Ties at the exact break end are not in-break; overlapping break windows
/// are tolerated — a time inside any one of them counts as break.
pub fn is_break(weekday: u8, time: chrono::NaiveTime, breaks: &[BreakSchedule]) -> bool {
    breaks.iter().any(|b| {
        if !b.applies_on(weekday) {
            return false;
        }
        match (parse_time(&b.start_time), parse_time(&b.end_time)) {
            (Ok(start), Ok(end)) => start <= time && time < end,
            _ => false,
        }
    })
}

fn default_max_periods_per_day() -> u32 {
    8
}
fn default_max_teacher_periods_per_day() -> u32 {
    6
}
fn default_max_teacher_periods_per_week() -> u32 {
    25
}
fn default_avoid_back_to_back_subjects() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default = "default_max_periods_per_day")]
    pub max_periods_per_day: u32,
    /// Accepted but not enforced by the evaluator (see DESIGN.md).
    #[serde(default)]
    pub max_consecutive_periods: Option<u32>,
    #[serde(default = "default_avoid_back_to_back_subjects")]
    pub avoid_back_to_back_subjects: bool,
    #[serde(default = "default_max_teacher_periods_per_day")]
    pub max_teacher_periods_per_day: u32,
    #[serde(default = "default_max_teacher_periods_per_week")]
    pub max_teacher_periods_per_week: u32,
    /// Accepted but not enforced by the evaluator (see DESIGN.md).
    #[serde(default)]
    pub lunch_break_required: bool,
    /// Accepted but not enforced by the evaluator (see DESIGN.md).
    #[serde(default)]
    pub min_free_periods_per_teacher: Option<u32>,
}

impl Default for Constraints {
    fn default() -> Self {
        Constraints {
            max_periods_per_day: default_max_periods_per_day(),
            max_consecutive_periods: None,
            avoid_back_to_back_subjects: default_avoid_back_to_back_subjects(),
            max_teacher_periods_per_day: default_max_teacher_periods_per_day(),
            max_teacher_periods_per_week: default_max_teacher_periods_per_week(),
            lunch_break_required: false,
            min_free_periods_per_teacher: None,
        }
    }
}
