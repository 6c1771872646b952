//! Schedule (solution) model.
//!
//! An [`ExamSlot`] records one placed exam. A [`ScheduleGrid`] buckets exam
//! slots by day and time slot in timetable order, and may be checked for
//! invariant violations after the fact (see [`crate::validation::audit_schedule`]).

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::{Course, Day, Instructor, Program, Room, TimeSlot, DAYS};

/// Fixed exam length in minutes.
pub const DEFAULT_EXAM_DURATION_MIN: u32 = 60;

/// A placed exam: course × instructor × room × program at (day, slot).
///
/// Identity is the 4-tuple (day, slot, room, course); see [`ExamSlot::key`].
/// Serialized records carry that key as `id`; it is recomputed on output and
/// ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSlot {
    /// Examined course.
    pub course: Course,
    /// Invigilating instructor.
    pub instructor: Instructor,
    /// Hosting room.
    pub room: Room,
    /// Program the sitting is booked under.
    pub program: Program,
    /// Time slot within the day.
    pub time_slot: TimeSlot,
    /// Exam day (1 or 2).
    pub day: Day,
    /// Length in minutes.
    pub duration: u32,
}

impl ExamSlot {
    /// Creates an exam slot with the default 60 minute duration.
    pub fn new(
        course: Course,
        instructor: Instructor,
        room: Room,
        program: Program,
        day: Day,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            course,
            instructor,
            room,
            program,
            time_slot,
            day,
            duration: DEFAULT_EXAM_DURATION_MIN,
        }
    }

    /// Identity key: `"{day}-{slot}-{room id}-{course id}"`.
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.day,
            self.time_slot.label(),
            self.room.id,
            self.course.id
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExamSlotRecord<'a> {
    id: String,
    course: &'a Course,
    instructor: &'a Instructor,
    room: &'a Room,
    program: &'a Program,
    time_slot: TimeSlot,
    day: Day,
    duration: u32,
}

impl Serialize for ExamSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ExamSlotRecord {
            id: self.key(),
            course: &self.course,
            instructor: &self.instructor,
            room: &self.room,
            program: &self.program,
            time_slot: self.time_slot,
            day: self.day,
            duration: self.duration,
        }
        .serialize(serializer)
    }
}

/// Exams bucketed by day, then by time slot.
///
/// Iteration is ordered: days ascending, slots chronologically, and exams
/// within a bucket in insertion order. The break slot is never a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleGrid {
    days: BTreeMap<Day, BTreeMap<TimeSlot, Vec<ExamSlot>>>,
}

impl ScheduleGrid {
    /// Creates a grid with no day keys (nothing generated yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a two-day grid with every assignable slot present and empty.
    pub fn empty_two_day() -> Self {
        let days = DAYS
            .iter()
            .map(|&day| {
                let slots: BTreeMap<TimeSlot, Vec<ExamSlot>> =
                    TimeSlot::assignable().map(|s| (s, Vec::new())).collect();
                (day, slots)
            })
            .collect();
        Self { days }
    }

    /// Appends an exam to its (day, slot) bucket.
    ///
    /// Creates the bucket if absent. Break-slot exams are rejected and
    /// returned as `Err`.
    pub fn push(&mut self, exam: ExamSlot) -> Result<(), ExamSlot> {
        if exam.time_slot.is_break() {
            return Err(exam);
        }
        self.bucket_mut(exam.day, exam.time_slot).push(exam);
        Ok(())
    }

    /// Whether the grid has no day keys at all.
    ///
    /// A generated grid with zero exams is *not* empty in this sense.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day keys in ascending order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.keys().copied()
    }

    /// Slot keys present for a day, chronologically.
    pub fn slots(&self, day: Day) -> impl Iterator<Item = TimeSlot> + '_ {
        self.days.get(&day).into_iter().flat_map(|s| s.keys().copied())
    }

    /// Exams in a (day, slot) bucket; empty if the bucket does not exist.
    pub fn bucket(&self, day: Day, slot: TimeSlot) -> &[ExamSlot] {
        self.days
            .get(&day)
            .and_then(|slots| slots.get(&slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All exams in grid order.
    pub fn exams(&self) -> impl Iterator<Item = &ExamSlot> {
        self.days.values().flat_map(|s| s.values()).flatten()
    }

    /// Total number of exams.
    pub fn exam_count(&self) -> usize {
        self.exams().count()
    }

    /// Exams invigilated by an instructor.
    pub fn exams_for_instructor(&self, instructor_id: &str) -> Vec<&ExamSlot> {
        self.exams()
            .filter(|e| e.instructor.id == instructor_id)
            .collect()
    }

    /// Exams hosted in a room.
    pub fn exams_for_room(&self, room_id: &str) -> Vec<&ExamSlot> {
        self.exams().filter(|e| e.room.id == room_id).collect()
    }

    /// The exam for a course, if it was placed.
    pub fn exam_for_course(&self, course_id: &str) -> Option<&ExamSlot> {
        self.exams().find(|e| e.course.id == course_id)
    }
}

/// An invariant violation found in a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (room, instructor, or course).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of grid violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two exams share a room in the same (day, slot).
    RoomDoubleBooked,
    /// An instructor appears twice in the same (day, slot).
    InstructorDoubleBooked,
    /// An instructor invigilates a course in their own specialty.
    OwnSubjectConflict,
    /// An exam is stored under a bucket that does not match its own day/slot,
    /// or under a day outside the session.
    MisplacedExam,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl ScheduleGrid {
    pub(crate) fn bucket_mut(&mut self, day: Day, slot: TimeSlot) -> &mut Vec<ExamSlot> {
        self.days.entry(day).or_default().entry(slot).or_default()
    }

    /// Raw bucket iteration including the stored keys, for auditing.
    pub(crate) fn buckets(&self) -> impl Iterator<Item = (Day, TimeSlot, &[ExamSlot])> {
        self.days.iter().flat_map(|(&day, slots)| {
            slots
                .iter()
                .map(move |(&slot, exams)| (day, slot, exams.as_slice()))
        })
    }
}
