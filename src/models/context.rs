use serde::Deserialize;

use crate::domain::inputs::{BreakSchedule, Constraints, Room, SchoolTiming, Section, Subject, Teacher};

/// The run context shared by all three endpoints: the population of
/// sections/teachers/subjects/rooms, the school's daily timing, break
/// windows, and soft constraints. Flattened into each request body so a
/// caller sends one flat JSON document per call.
#[derive(Debug, Deserialize)]
pub struct RunContext {
    /// Required for `generate`; `optimize`/`analyze` accept an empty list
    /// since they only need `periods` to be non-empty.
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub school_timing: SchoolTiming,
    #[serde(default)]
    pub break_schedules: Vec<BreakSchedule>,
    #[serde(default)]
    pub constraints: Constraints,
}
