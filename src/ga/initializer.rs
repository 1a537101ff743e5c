//! Builds a random but structurally valid starting solution: one that
//! respects break windows but otherwise leaves feasibility to the fitness
//! landscape.

use rand::Rng;

use crate::domain::inputs::{is_break, BreakSchedule, SchoolTiming, Section};
use crate::domain::period::Period;
use crate::domain::solution::Solution;
use crate::domain::time::add_minutes;
use crate::errors::AppError;
use crate::index::DomainIndex;

/// For each section, for each school day, walks a cursor from
/// `timing.start_time`, skipping break windows in fixed 15-minute steps and
/// otherwise emitting periods until `timing.total_periods` have been laid
/// down for that section/day.
pub fn initialize_solution<R: Rng>(
    index: &DomainIndex,
    sections: &[Section],
    timing: &SchoolTiming,
    breaks: &[BreakSchedule],
    rng: &mut R,
) -> Result<Solution, AppError> {
    let start = timing.start()?;
    let mut periods = Vec::new();

    for section in sections {
        let subjects = index.subjects_for_section(section);
        if subjects.is_empty() {
            continue;
        }

        for &weekday in index.school_days() {
            let mut cursor = start;
            let mut period_number = 1u32;
            // Guards against pathological break configurations (e.g. a break
            // spanning the whole day) looping forever.
            let safety_cap = timing.total_periods.saturating_mul(20).max(50);
            let mut attempts = 0u32;

            while period_number <= timing.total_periods && attempts < safety_cap {
                attempts += 1;

                if is_break(weekday, cursor, breaks) {
                    cursor = add_minutes(cursor, 15);
                    continue;
                }

                let subject = subjects[rng.gen_range(0..subjects.len())];
                let eligible = index.eligible_teachers(&subject.id);
                let teacher_id = if eligible.is_empty() {
                    None
                } else {
                    Some(eligible[rng.gen_range(0..eligible.len())].id.clone())
                };

                let rooms = index.available_rooms();
                let room_id = if rooms.is_empty() {
                    None
                } else {
                    Some(rooms[rng.gen_range(0..rooms.len())].id.clone())
                };

                let end_time = add_minutes(cursor, timing.period_duration_minutes);
                periods.push(Period {
                    weekday,
                    period_number,
                    start_time: cursor,
                    end_time,
                    subject_id: subject.id.clone(),
                    teacher_id,
                    room_id,
                    section_id: section.id.clone(),
                });

                cursor = end_time;
                period_number += 1;
            }
        }
    }

    Ok(Solution::new(periods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inputs::{Room, Subject, Teacher};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn minimal_feasible() -> (Vec<Section>, Vec<Teacher>, Vec<Subject>, Vec<Room>, SchoolTiming) {
        let sections = vec![Section {
            id: "S1".into(),
            subjects: vec!["MATH".into()],
        }];
        let teachers = vec![Teacher {
            id: "T1".into(),
            subjects: vec!["MATH".into()],
            can_teach_all: false,
        }];
        let subjects = vec![Subject {
            id: "MATH".into(),
            name: None,
        }];
        let rooms = vec![Room {
            id: "R1".into(),
            is_available: true,
        }];
        let timing = SchoolTiming {
            school_days: 0b0000010, // Monday only
            period_duration_minutes: 45,
            total_periods: 1,
            start_time: "08:00:00".into(),
            end_time: "09:00:00".into(),
        };
        (sections, teachers, subjects, rooms, timing)
    }

    #[test]
    fn scenario_minimal_feasible_produces_one_period() {
        let (sections, teachers, subjects, rooms, timing) = minimal_feasible();
        let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);
        let mut rng = SmallRng::seed_from_u64(1);
        let solution = initialize_solution(&index, &sections, &timing, &[], &mut rng).unwrap();

        assert_eq!(solution.periods.len(), 1);
        let p = &solution.periods[0];
        assert_eq!(p.weekday, 1);
        assert_eq!(p.period_number, 1);
        assert_eq!(p.start_time.to_string(), "08:00:00");
        assert_eq!(p.end_time.to_string(), "08:45:00");
        assert_eq!(p.subject_id, "MATH");
        assert_eq!(p.teacher_id.as_deref(), Some("T1"));
        assert_eq!(p.room_id.as_deref(), Some("R1"));
        assert_eq!(p.section_id, "S1");
    }

    #[test]
    fn scenario_break_skip_advances_fifteen_minutes() {
        let (sections, teachers, subjects, rooms, mut timing) = minimal_feasible();
        timing.total_periods = 3;
        let breaks = vec![BreakSchedule {
            days: 0b0000010,
            start_time: "08:45".into(),
            end_time: "09:00".into(),
        }];
        let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);
        let mut rng = SmallRng::seed_from_u64(7);
        let solution = initialize_solution(&index, &sections, &timing, &breaks, &mut rng).unwrap();

        assert_eq!(solution.periods.len(), 3);
        assert_eq!(solution.periods[0].start_time.to_string(), "08:00:00");
        assert_eq!(solution.periods[0].end_time.to_string(), "08:45:00");
        assert_eq!(solution.periods[1].start_time.to_string(), "09:00:00");
        assert_eq!(solution.periods[1].end_time.to_string(), "09:45:00");
        assert_eq!(solution.periods[2].start_time.to_string(), "09:45:00");
        assert_eq!(solution.periods[2].end_time.to_string(), "10:30:00");
    }

    #[test]
    fn unstaffed_subject_yields_null_teacher() {
        let (sections, _teachers, subjects, rooms, timing) = minimal_feasible();
        let teachers: Vec<Teacher> = vec![]; // no eligible teacher for MATH
        let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);
        let mut rng = SmallRng::seed_from_u64(3);
        let solution = initialize_solution(&index, &sections, &timing, &[], &mut rng).unwrap();

        assert_eq!(solution.periods.len(), 1);
        assert_eq!(solution.periods[0].teacher_id, None);
    }
}
