//! Scores a solution on `[0,1]`: conflict detection plus two soft
//! objectives, combined into one fitness value.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::domain::conflict::{Conflict, OverworkScope, Severity};
use crate::domain::inputs::Constraints;
use crate::domain::period::Period;
use crate::index::DomainIndex;

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub fitness: f64,
    pub conflicts: Vec<Conflict>,
    pub distribution_score: f64,
    pub workload_balance_score: f64,
}

/// Evaluates `periods` in one pass: three conflict-detection sub-passes plus
/// the distribution and workload-balance soft scores.
pub fn evaluate(periods: &[Period], index: &DomainIndex, constraints: &Constraints) -> Evaluation {
    if periods.is_empty() {
        return Evaluation {
            fitness: 1.0,
            conflicts: Vec::new(),
            distribution_score: 1.0,
            workload_balance_score: 1.0,
        };
    }

    let mut conflicts = Vec::new();
    detect_teacher_overlaps(periods, &mut conflicts);
    detect_room_double_bookings(periods, &mut conflicts);
    detect_constraint_violations(periods, constraints, &mut conflicts);
    conflicts.sort_by(|a, b| a.type_name().cmp(b.type_name()).then(a.message().cmp(b.message())));

    let distribution_score = distribution_score(periods, constraints);
    let workload_balance_score = workload_balance_score(periods, index);

    let mut base = 1.0;
    base -= 0.10 * conflicts.len() as f64;
    base += 0.20 * distribution_score;
    base += 0.10 * workload_balance_score;
    let fitness = base.clamp(0.0, 1.0);

    Evaluation {
        fitness,
        conflicts,
        distribution_score,
        workload_balance_score,
    }
}

/// Keys on exact `(day, start, end)` equality, not interval intersection.
/// Accurate for slot-aligned periods (the common case after initialization);
/// misaligned intervals produced by an unusual mutation are not caught.
fn detect_teacher_overlaps(periods: &[Period], conflicts: &mut Vec<Conflict>) {
    let mut groups: HashMap<(&str, u8, NaiveTime, NaiveTime), Vec<usize>> = HashMap::new();
    for (i, p) in periods.iter().enumerate() {
        if let Some(teacher_id) = &p.teacher_id {
            groups
                .entry((teacher_id.as_str(), p.weekday, p.start_time, p.end_time))
                .or_default()
                .push(i);
        }
    }

    for ((teacher_id, weekday, start, end), idxs) in groups {
        if idxs.len() > 1 {
            conflicts.push(Conflict::TeacherOverlap {
                teacher_id: teacher_id.to_string(),
                period_a: periods[idxs[0]].clone(),
                period_b: periods[idxs[1]].clone(),
                severity: Severity::Error,
                message: format!(
                    "teacher {teacher_id} double-booked on weekday {weekday} at {start}-{end}"
                ),
            });
        }
    }
}

fn detect_room_double_bookings(periods: &[Period], conflicts: &mut Vec<Conflict>) {
    let mut groups: HashMap<(&str, u8, NaiveTime, NaiveTime), Vec<usize>> = HashMap::new();
    for (i, p) in periods.iter().enumerate() {
        if let Some(room_id) = &p.room_id {
            groups
                .entry((room_id.as_str(), p.weekday, p.start_time, p.end_time))
                .or_default()
                .push(i);
        }
    }

    for ((room_id, weekday, start, end), idxs) in groups {
        if idxs.len() > 1 {
            conflicts.push(Conflict::RoomDoubleBooking {
                room_id: room_id.to_string(),
                period_a: periods[idxs[0]].clone(),
                period_b: periods[idxs[1]].clone(),
                severity: Severity::Error,
                message: format!(
                    "room {room_id} double-booked on weekday {weekday} at {start}-{end}"
                ),
            });
        }
    }
}

fn detect_constraint_violations(
    periods: &[Period],
    constraints: &Constraints,
    conflicts: &mut Vec<Conflict>,
) {
    let mut per_section_day: HashMap<(&str, u8), u32> = HashMap::new();
    let mut per_teacher_day: HashMap<(&str, u8), u32> = HashMap::new();
    let mut per_teacher_week: HashMap<&str, u32> = HashMap::new();

    for p in periods {
        *per_section_day.entry((p.section_id.as_str(), p.weekday)).or_insert(0) += 1;
        if let Some(teacher_id) = &p.teacher_id {
            *per_teacher_day.entry((teacher_id.as_str(), p.weekday)).or_insert(0) += 1;
            *per_teacher_week.entry(teacher_id.as_str()).or_insert(0) += 1;
        }
    }

    for ((section_id, weekday), count) in per_section_day {
        if count > constraints.max_periods_per_day {
            conflicts.push(Conflict::MaxPeriodsViolation {
                section_id: section_id.to_string(),
                weekday,
                count,
                max_allowed: constraints.max_periods_per_day,
                severity: Severity::Warning,
                message: format!(
                    "section {section_id} has {count} periods on weekday {weekday}, exceeding max_periods_per_day {}",
                    constraints.max_periods_per_day
                ),
            });
        }
    }

    for ((teacher_id, weekday), count) in per_teacher_day {
        if count > constraints.max_teacher_periods_per_day {
            conflicts.push(Conflict::TeacherOverwork {
                teacher_id: teacher_id.to_string(),
                scope: OverworkScope::Daily,
                weekday: Some(weekday),
                count,
                max_allowed: constraints.max_teacher_periods_per_day,
                severity: Severity::Warning,
                message: format!(
                    "teacher {teacher_id} has {count} periods on weekday {weekday}, exceeding max_teacher_periods_per_day {}",
                    constraints.max_teacher_periods_per_day
                ),
            });
        }
    }

    for (teacher_id, count) in per_teacher_week {
        if count > constraints.max_teacher_periods_per_week {
            conflicts.push(Conflict::TeacherOverwork {
                teacher_id: teacher_id.to_string(),
                scope: OverworkScope::Weekly,
                weekday: None,
                count,
                max_allowed: constraints.max_teacher_periods_per_week,
                severity: Severity::Warning,
                message: format!(
                    "teacher {teacher_id} has {count} periods this week, exceeding max_teacher_periods_per_week {}",
                    constraints.max_teacher_periods_per_week
                ),
            });
        }
    }
}

/// Starts at 1.0; for every (section, subject) pair, subtracts 0.05 per
/// adjacent pair of scheduled weekdays when `avoid_back_to_back_subjects` is
/// set. Clamped at 0.
fn distribution_score(periods: &[Period], constraints: &Constraints) -> f64 {
    if !constraints.avoid_back_to_back_subjects {
        return 1.0;
    }

    let mut by_section_subject: HashMap<(&str, &str), Vec<u8>> = HashMap::new();
    for p in periods {
        by_section_subject
            .entry((p.section_id.as_str(), p.subject_id.as_str()))
            .or_default()
            .push(p.weekday);
    }

    let mut score = 1.0f64;
    for (_, mut days) in by_section_subject {
        days.sort_unstable();
        days.dedup();
        for pair in days.windows(2) {
            if pair[1] - pair[0] == 1 {
                score -= 0.05;
            }
        }
    }
    score.max(0.0)
}

/// `1 / (1 + var(w) / 100)` over each teacher's weekly period count. Built
/// only from periods that actually carry a `teacher_id` — a teacher with no
/// assigned periods is simply absent from the count, not recorded as a zero
/// entry. 1.0 if no period is assigned to any teacher (including the
/// single-teacher case, where variance is trivially zero).
fn workload_balance_score(periods: &[Period], _index: &DomainIndex) -> f64 {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for p in periods {
        if let Some(teacher_id) = &p.teacher_id {
            *counts.entry(teacher_id.as_str()).or_insert(0) += 1;
        }
    }

    if counts.is_empty() {
        return 1.0;
    }

    let values: Vec<f64> = counts.values().map(|&c| c as f64).collect();
    if values.len() <= 1 {
        return 1.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    1.0 / (1.0 + variance / 100.0)
}
