//! Immutable lookup tables built once from the run's inputs and shared by
//! reference among the initializer, evaluator, and variation operators.
//! Never mutated for the lifetime of a run.

use std::collections::HashMap;

use crate::domain::inputs::{Room, SchoolTiming, Section, Subject, Teacher};

pub struct DomainIndex<'a> {
    teachers_by_id: HashMap<&'a str, &'a Teacher>,
    subjects_by_id: HashMap<&'a str, &'a Subject>,
    rooms_by_id: HashMap<&'a str, &'a Room>,
    sections_by_id: HashMap<&'a str, &'a Section>,
    eligible_teachers: HashMap<&'a str, Vec<&'a Teacher>>,
    available_rooms: Vec<&'a Room>,
    school_days: Vec<u8>,
    subjects: &'a [Subject],
}

impl<'a> DomainIndex<'a> {
    pub fn build(
        sections: &'a [Section],
        teachers: &'a [Teacher],
        subjects: &'a [Subject],
        rooms: &'a [Room],
        timing: &'a SchoolTiming,
    ) -> Self {
        let teachers_by_id = teachers.iter().map(|t| (t.id.as_str(), t)).collect();
        let subjects_by_id = subjects.iter().map(|s| (s.id.as_str(), s)).collect();
        let rooms_by_id = rooms.iter().map(|r| (r.id.as_str(), r)).collect();
        let sections_by_id = sections.iter().map(|s| (s.id.as_str(), s)).collect();

        let eligible_teachers = subjects
            .iter()
            .map(|subject| {
                let eligible: Vec<&Teacher> = teachers
                    .iter()
                    .filter(|t| t.can_teach_all || t.subjects.iter().any(|s| s == &subject.id))
                    .collect();
                (subject.id.as_str(), eligible)
            })
            .collect();

        let available_rooms = rooms.iter().filter(|r| r.is_available).collect();

        Self {
            teachers_by_id,
            subjects_by_id,
            rooms_by_id,
            sections_by_id,
            eligible_teachers,
            available_rooms,
            school_days: timing.days(),
            subjects,
        }
    }

    pub fn eligible_teachers(&self, subject_id: &str) -> &[&'a Teacher] {
        self.eligible_teachers
            .get(subject_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn available_rooms(&self) -> &[&'a Room] {
        &self.available_rooms
    }

    pub fn school_days(&self) -> &[u8] {
        &self.school_days
    }

    /// Subjects required for `section`: its own list if non-empty, else all
    /// subjects in the run.
    pub fn subjects_for_section(&self, section: &Section) -> Vec<&'a Subject> {
        if section.subjects.is_empty() {
            self.subjects.iter().collect()
        } else {
            self.subjects
                .iter()
                .filter(|s| section.subjects.contains(&s.id))
                .collect()
        }
    }

    pub fn teacher(&self, id: &str) -> Option<&'a Teacher> {
        self.teachers_by_id.get(id).copied()
    }

    pub fn subject(&self, id: &str) -> Option<&'a Subject> {
        self.subjects_by_id.get(id).copied()
    }

    pub fn room(&self, id: &str) -> Option<&'a Room> {
        self.rooms_by_id.get(id).copied()
    }

    pub fn section(&self, id: &str) -> Option<&'a Section> {
        self.sections_by_id.get(id).copied()
    }

    pub fn teachers(&self) -> impl Iterator<Item = &'a Teacher> + '_ {
        self.teachers_by_id.values().copied()
    }
}
