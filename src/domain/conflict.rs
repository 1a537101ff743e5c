use serde::{Deserialize, Serialize};

use crate::domain::period::Period;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverworkScope {
    Daily,
    Weekly,
}

/// A detected hard (`error`) or soft (`warning`) violation in a solution.
/// Modeled as a sum type — never collapse the per-variant payload into one
/// loosely-typed dictionary shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Conflict {
    TeacherOverlap {
        teacher_id: String,
        period_a: Period,
        period_b: Period,
        severity: Severity,
        message: String,
    },
    RoomDoubleBooking {
        room_id: String,
        period_a: Period,
        period_b: Period,
        severity: Severity,
        message: String,
    },
    MaxPeriodsViolation {
        section_id: String,
        weekday: u8,
        count: u32,
        max_allowed: u32,
        severity: Severity,
        message: String,
    },
    TeacherOverwork {
        teacher_id: String,
        scope: OverworkScope,
        weekday: Option<u8>,
        count: u32,
        max_allowed: u32,
        severity: Severity,
        message: String,
    },
}

impl Conflict {
    pub fn type_name(&self) -> &'static str {
        match self {
            Conflict::TeacherOverlap { .. } => "teacher_overlap",
            Conflict::RoomDoubleBooking { .. } => "room_double_booking",
            Conflict::MaxPeriodsViolation { .. } => "max_periods_violation",
            Conflict::TeacherOverwork { .. } => "teacher_overwork",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Conflict::TeacherOverlap { severity, .. } => *severity,
            Conflict::RoomDoubleBooking { severity, .. } => *severity,
            Conflict::MaxPeriodsViolation { severity, .. } => *severity,
            Conflict::TeacherOverwork { severity, .. } => *severity,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn message(&self) -> &str {
        match self {
            Conflict::TeacherOverlap { message, .. } => message,
            Conflict::RoomDoubleBooking { message, .. } => message,
            Conflict::MaxPeriodsViolation { message, .. } => message,
            Conflict::TeacherOverwork { message, .. } => message,
        }
    }
}
