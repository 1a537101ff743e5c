//! Black-box scenario coverage mirroring the numbered scenarios used to
//! design this engine: minimal feasibility, forced conflicts, break-skip
//! layout, workload balance preference, and the generate/analyze/optimize
//! round trip.

use timetable_ga_engine::domain::inputs::{BreakSchedule, Constraints, Room, SchoolTiming, Section, Subject, Teacher};
use timetable_ga_engine::ga::controller::{run, CancellationToken, GaParams};
use timetable_ga_engine::ga::fitness::evaluate;
use timetable_ga_engine::index::DomainIndex;

fn small_params(seed: u64) -> GaParams {
    GaParams {
        population_size: 10,
        generations: 20,
        elite_size: 2,
        seed: Some(seed),
        ..GaParams::default()
    }
}

#[test]
fn scenario_1_minimal_feasible() {
    let sections = vec![Section { id: "S1".into(), subjects: vec!["MATH".into()] }];
    let teachers = vec![Teacher { id: "T1".into(), subjects: vec!["MATH".into()], can_teach_all: false }];
    let subjects = vec![Subject { id: "MATH".into(), name: None }];
    let rooms = vec![Room { id: "R1".into(), is_available: true }];
    let timing = SchoolTiming {
        school_days: 0b0000010,
        period_duration_minutes: 45,
        total_periods: 1,
        start_time: "08:00:00".into(),
        end_time: "09:00:00".into(),
    };
    let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);

    let outcome = run(
        &index,
        &sections,
        &timing,
        &[],
        &Constraints::default(),
        &small_params(1),
        &CancellationToken::new(),
        None,
    )
    .unwrap();

    assert_eq!(outcome.best.periods.len(), 1);
    let period = &outcome.best.periods[0];
    assert_eq!(period.weekday, 1);
    assert_eq!(period.period_number, 1);
    assert_eq!(period.start_time.to_string(), "08:00:00");
    assert_eq!(period.end_time.to_string(), "08:45:00");
    assert_eq!(period.subject_id, "MATH");
    assert_eq!(period.teacher_id.as_deref(), Some("T1"));
    assert_eq!(period.room_id.as_deref(), Some("R1"));
    assert_eq!(period.section_id, "S1");
    assert_eq!(outcome.best.fitness_score, 1.0);
    assert!(outcome.best.conflicts.is_empty());
}

#[test]
fn scenario_2_forced_teacher_overlap_never_resolves() {
    let sections = vec![
        Section { id: "S1".into(), subjects: vec!["ENG".into()] },
        Section { id: "S2".into(), subjects: vec!["ENG".into()] },
    ];
    let teachers = vec![Teacher { id: "T1".into(), subjects: vec!["ENG".into()], can_teach_all: false }];
    let subjects = vec![Subject { id: "ENG".into(), name: None }];
    let rooms = vec![Room { id: "R1".into(), is_available: true }];
    let timing = SchoolTiming {
        school_days: 0b0000010,
        period_duration_minutes: 45,
        total_periods: 1,
        start_time: "08:00:00".into(),
        end_time: "09:00:00".into(),
    };
    let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);

    let outcome = run(
        &index,
        &sections,
        &timing,
        &[],
        &Constraints::default(),
        &small_params(7),
        &CancellationToken::new(),
        None,
    )
    .unwrap();

    let overlaps = outcome
        .best
        .conflicts
        .iter()
        .filter(|c| c.type_name() == "teacher_overlap")
        .count();
    assert_eq!(overlaps, 1);
    assert!(outcome.best.fitness_score <= 0.9);
}

#[test]
fn scenario_3_break_skip_layout() {
    let sections = vec![Section { id: "S1".into(), subjects: vec!["MATH".into()] }];
    let teachers = vec![Teacher { id: "T1".into(), subjects: vec!["MATH".into()], can_teach_all: false }];
    let subjects = vec![Subject { id: "MATH".into(), name: None }];
    let rooms = vec![Room { id: "R1".into(), is_available: true }];
    let timing = SchoolTiming {
        school_days: 0b0000010,
        period_duration_minutes: 45,
        total_periods: 3,
        start_time: "08:00:00".into(),
        end_time: "11:00:00".into(),
    };
    let breaks = vec![BreakSchedule {
        days: 0b0000010,
        start_time: "08:45".into(),
        end_time: "09:00".into(),
    }];
    let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use timetable_ga_engine::ga::initializer::initialize_solution;

    let mut rng = SmallRng::seed_from_u64(1);
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
fn scenario_4_workload_balance_prefers_even_split() {
    use timetable_ga_engine::domain::period::Period;
    use timetable_ga_engine::domain::time::parse_time;

    let teachers = vec![
        Teacher { id: "T1".into(), subjects: vec![], can_teach_all: true },
        Teacher { id: "T2".into(), subjects: vec![], can_teach_all: true },
    ];
    let sections = vec![Section { id: "S1".into(), subjects: vec![] }];
    let subjects = vec![];
    let rooms = vec![];
    let timing = SchoolTiming {
        school_days: 0,
        period_duration_minutes: 45,
        total_periods: 10,
        start_time: "08:00".into(),
        end_time: "15:00".into(),
    };
    let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);

    let make_period = |weekday: u8, n: u32, teacher: &str| Period {
        weekday,
        period_number: n,
        start_time: parse_time("08:00:00").unwrap(),
        end_time: parse_time("08:45:00").unwrap(),
        subject_id: "SUBJ".into(),
        teacher_id: Some(teacher.into()),
        room_id: None,
        section_id: "S1".into(),
    };

    let skewed: Vec<Period> = (0..8)
        .map(|i| make_period((i % 6) + 1, i as u32, "T1"))
        .chain((0..2).map(|i| make_period((i % 6) + 1, 8 + i as u32, "T2")))
        .collect();
    let balanced: Vec<Period> = (0..5)
        .map(|i| make_period((i % 6) + 1, i as u32, "T1"))
        .chain((0..5).map(|i| make_period((i % 6) + 1, 5 + i as u32, "T2")))
        .collect();

    let eval_skewed = evaluate(&skewed, &index, &Constraints::default());
    let eval_balanced = evaluate(&balanced, &index, &Constraints::default());
    assert!(eval_balanced.fitness > eval_skewed.fitness);
}

#[test]
fn scenario_5_analyze_reproduces_generate_state() {
    let sections = vec![Section { id: "S1".into(), subjects: vec!["MATH".into()] }];
    let teachers = vec![Teacher { id: "T1".into(), subjects: vec!["MATH".into()], can_teach_all: false }];
    let subjects = vec![Subject { id: "MATH".into(), name: None }];
    let rooms = vec![Room { id: "R1".into(), is_available: true }];
    let timing = SchoolTiming {
        school_days: 0b0000010,
        period_duration_minutes: 45,
        total_periods: 1,
        start_time: "08:00:00".into(),
        end_time: "09:00:00".into(),
    };
    let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);

    let outcome = run(
        &index,
        &sections,
        &timing,
        &[],
        &Constraints::default(),
        &small_params(1),
        &CancellationToken::new(),
        None,
    )
    .unwrap();

    // Re-running evaluate() over generate's own output is exactly what the
    // analyze operation does internally.
    let reanalyzed = evaluate(&outcome.best.periods, &index, &Constraints::default());
    assert_eq!(reanalyzed.fitness, outcome.best.fitness_score);
    assert_eq!(reanalyzed.conflicts, outcome.best.conflicts);
    assert_eq!(reanalyzed.conflicts.len(), 0);
    assert_eq!(reanalyzed.fitness, 1.0);

    let total_sections = sections.len();
    let total_teachers = teachers.len();
    assert_eq!(total_sections, 1);
    assert_eq!(total_teachers, 1);
}

#[test]
fn scenario_6_optimize_never_regresses_a_corrupted_timetable() {
    use timetable_ga_engine::domain::period::Period;
    use timetable_ga_engine::domain::time::parse_time;

    let sections = vec![
        Section { id: "S1".into(), subjects: vec!["ENG".into()] },
        Section { id: "S2".into(), subjects: vec!["ENG".into()] },
        Section { id: "S3".into(), subjects: vec!["ENG".into()] },
    ];
    let teachers = vec![
        Teacher { id: "T1".into(), subjects: vec!["ENG".into()], can_teach_all: false },
        Teacher { id: "T2".into(), subjects: vec!["ENG".into()], can_teach_all: false },
        Teacher { id: "T3".into(), subjects: vec!["ENG".into()], can_teach_all: false },
    ];
    let subjects = vec![Subject { id: "ENG".into(), name: None }];
    let rooms = vec![
        Room { id: "R1".into(), is_available: true },
        Room { id: "R2".into(), is_available: true },
        Room { id: "R3".into(), is_available: true },
    ];
    let timing = SchoolTiming {
        school_days: 0b0000010,
        period_duration_minutes: 45,
        total_periods: 1,
        start_time: "08:00:00".into(),
        end_time: "09:00:00".into(),
    };
    let index = DomainIndex::build(&sections, &teachers, &subjects, &rooms, &timing);

    // Deliberately corrupted: every section crammed onto the same teacher
    // and room at the same slot.
    let corrupted: Vec<Period> = sections
        .iter()
        .map(|section| Period {
            weekday: 1,
            period_number: 1,
            start_time: parse_time("08:00:00").unwrap(),
            end_time: parse_time("08:45:00").unwrap(),
            subject_id: "ENG".into(),
            teacher_id: Some("T1".into()),
            room_id: Some("R1".into()),
            section_id: section.id.clone(),
        })
        .collect();

    let baseline = evaluate(&corrupted, &index, &Constraints::default());

    let optimize_params = GaParams {
        population_size: 30,
        generations: 60,
        mutation_rate: 0.15,
        elite_size: 4,
        seed: Some(11),
        ..GaParams::default()
    };
    let outcome = run(
        &index,
        &sections,
        &timing,
        &[],
        &Constraints::default(),
        &optimize_params,
        &CancellationToken::new(),
        None,
    )
    .unwrap();

    assert!(outcome.best.conflicts.len() <= baseline.conflicts.len());
    assert!(outcome.best.fitness_score >= baseline.fitness);
}
