//! Greedy two-day exam generator.
//!
//! # Algorithm
//!
//! 1. Shuffle the courses with the injected random source.
//! 2. Walk every (day, slot, room) triple in fixed order: day 1 before
//!    day 2, slots chronologically (break skipped), rooms in the order the
//!    caller supplied them.
//! 3. At each triple, take the course under the cursor and collect the
//!    eligible instructors: no own-subject overlap, and not already
//!    invigilating in this (day, slot).
//! 4. If nobody is eligible, leave the triple empty and keep the cursor
//!    where it is; the same course is retried at the next triple.
//! 5. Otherwise pick the least-loaded eligible instructor (first supplied
//!    wins ties), draw a program at random, place the exam and advance
//!    the cursor.
//!
//! This is first-fit with skip: no backtracking, and courses may remain
//! unplaced once the triples run out.
//!
//! # Complexity
//! O(D * S * R * I) where D=2 days, S=8 slots, R=rooms, I=instructors.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::conflict::is_own_subject;
use super::ScheduleStats;
use crate::dataset::Dataset;
use crate::error::{Result, ScheduleError};
use crate::models::{
    Course, Day, ExamSlot, Instructor, Program, Room, ScheduleGrid, TimeSlot, DAYS,
};

/// Per-instructor record of occupied `"day-slot"` keys.
///
/// Serves both the availability check (one exam per instructor per slot)
/// and load balancing (fewest entries first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentLedger {
    entries: BTreeMap<String, Vec<String>>,
}

impl AssignmentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of exams assigned to an instructor.
    pub fn load(&self, instructor_id: &str) -> usize {
        self.entries.get(instructor_id).map_or(0, Vec::len)
    }

    /// Whether the instructor has nothing at `key`.
    pub fn is_free(&self, instructor_id: &str, key: &str) -> bool {
        !self
            .entries
            .get(instructor_id)
            .is_some_and(|keys| keys.iter().any(|k| k == key))
    }

    /// Records an assignment.
    pub fn record(&mut self, instructor_id: &str, key: String) {
        self.entries
            .entry(instructor_id.to_string())
            .or_default()
            .push(key);
    }

    /// Keys assigned to an instructor, in assignment order.
    pub fn keys_for(&self, instructor_id: &str) -> &[String] {
        self.entries
            .get(instructor_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of instructors with at least one assignment.
    pub fn instructor_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterates (instructor id, keys) in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, keys)| (id.as_str(), keys.as_slice()))
    }
}

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSchedule {
    /// Exams bucketed by day and slot.
    pub grid: ScheduleGrid,
    /// Placed exams in placement order.
    pub exams: Vec<ExamSlot>,
    /// Instructor assignment ledger.
    pub assignments: AssignmentLedger,
}

impl GeneratedSchedule {
    /// Number of placed exams.
    pub fn exam_count(&self) -> usize {
        self.exams.len()
    }

    /// Courses from `courses` that did not receive an exam.
    pub fn unplaced_courses<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses
            .iter()
            .filter(|c| !self.exams.iter().any(|e| e.course.id == c.id))
            .collect()
    }

    /// Statistics over this run for the given room set.
    pub fn stats(&self, rooms: &[Room]) -> ScheduleStats {
        ScheduleStats::calculate(&self.exams, rooms)
    }
}

/// Greedy two-day exam scheduler.
///
/// # Example
///
/// ```
/// use exam_schedule::models::{Course, Instructor, Room};
/// use exam_schedule::scheduler::ExamScheduler;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let instructors = vec![Instructor::new("I1", "Dr. Ada", "History")];
/// let courses = vec![Course::new("C1", "Linear Algebra", "MATH201")];
/// let rooms = vec![Room::new("R1", "Hall A")];
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let run = ExamScheduler::new()
///     .generate(&instructors, &courses, &rooms, &[], &mut rng)
///     .unwrap();
/// assert_eq!(run.exam_count(), 1);
/// assert_eq!(run.exams[0].program.id, "general");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExamScheduler;

impl ExamScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Generates a two-day exam grid.
    ///
    /// # Errors
    /// [`ScheduleError::InsufficientData`] when `instructors`, `courses` or
    /// `rooms` is empty. An empty `programs` is allowed; every exam then
    /// carries the sentinel "General" program.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        instructors: &[Instructor],
        courses: &[Course],
        rooms: &[Room],
        programs: &[Program],
        rng: &mut R,
    ) -> Result<GeneratedSchedule> {
        let mut missing = Vec::new();
        if instructors.is_empty() {
            missing.push("instructors");
        }
        if courses.is_empty() {
            missing.push("courses");
        }
        if rooms.is_empty() {
            missing.push("rooms");
        }
        if !missing.is_empty() {
            return Err(ScheduleError::InsufficientData { missing });
        }

        let mut grid = ScheduleGrid::empty_two_day();
        let mut exams = Vec::new();
        let mut ledger = AssignmentLedger::new();

        let mut order: Vec<&Course> = courses.iter().collect();
        order.shuffle(rng);
        let mut cursor = 0;

        for &day in &DAYS {
            for slot in TimeSlot::assignable() {
                let key = slot.key_on(day);
                for room in rooms {
                    let Some(&course) = order.get(cursor) else {
                        continue;
                    };

                    let Some(instructor) = select_instructor(instructors, course, &ledger, &key)
                    else {
                        debug!(
                            day,
                            slot = slot.label(),
                            room = %room.id,
                            course = %course.id,
                            "no eligible instructor, skipping"
                        );
                        continue;
                    };

                    let program = programs.choose(rng).cloned().unwrap_or_else(Program::general);
                    let exam = place(course, instructor, room, program, day, slot);
                    debug!(key = %exam.key(), instructor = %instructor.id, "exam placed");

                    ledger.record(&instructor.id, key.clone());
                    grid.bucket_mut(day, slot).push(exam.clone());
                    exams.push(exam);
                    cursor += 1;
                }
            }
        }

        if cursor < order.len() {
            warn!(
                unplaced = order.len() - cursor,
                total = order.len(),
                "courses left unplaced"
            );
        }
        info!(
            exams = exams.len(),
            instructors = ledger.instructor_count(),
            "exam schedule generated"
        );

        Ok(GeneratedSchedule {
            grid,
            exams,
            assignments: ledger,
        })
    }

    /// Generates from a dataset.
    pub fn generate_dataset<R: Rng + ?Sized>(
        &self,
        dataset: &Dataset,
        rng: &mut R,
    ) -> Result<GeneratedSchedule> {
        self.generate(
            &dataset.instructors,
            &dataset.courses,
            &dataset.rooms,
            &dataset.programs,
            rng,
        )
    }
}

/// Least-loaded eligible instructor; earlier entries win ties.
fn select_instructor<'a>(
    instructors: &'a [Instructor],
    course: &Course,
    ledger: &AssignmentLedger,
    key: &str,
) -> Option<&'a Instructor> {
    instructors
        .iter()
        .filter(|i| !is_own_subject(i, course) && ledger.is_free(&i.id, key))
        .fold(None, |best: Option<&Instructor>, candidate| match best {
            Some(b) if ledger.load(&b.id) <= ledger.load(&candidate.id) => Some(b),
            _ => Some(candidate),
        })
}

fn place(
    course: &Course,
    instructor: &Instructor,
    room: &Room,
    program: Program,
    day: Day,
    slot: TimeSlot,
) -> ExamSlot {
    ExamSlot::new(
        course.clone(),
        instructor.clone(),
        room.clone(),
        program,
        day,
        slot,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::{SmallRng, StdRng};
    use rand::SeedableRng;

    fn instructors() -> Vec<Instructor> {
        vec![
            Instructor::new("I1", "Dr. Euler", "Mathematics"),
            Instructor::new("I2", "Dr. Curie", "Physics"),
            Instructor::new("I3", "Dr. Darwin", "Biology"),
        ]
    }

    fn courses(n: usize) -> Vec<Course> {
        (0..n)
            .map(|i| Course::new(format!("C{i}"), format!("History {i}"), format!("HIS{i}")))
            .collect()
    }

    fn rooms(n: usize) -> Vec<Room> {
        (0..n)
            .map(|i| Room::new(format!("R{i}"), format!("Room {i}")))
            .collect()
    }

    #[test]
    fn test_insufficient_data() {
        let mut rng = SmallRng::seed_from_u64(1);
        let s = ExamScheduler::new();

        let err = s
            .generate(&instructors(), &courses(2), &[], &[], &mut rng)
            .unwrap_err();
        match err {
            ScheduleError::InsufficientData { missing } => assert_eq!(missing, vec!["rooms"]),
            other => panic!("unexpected error: {other}"),
        }

        let err = s.generate(&[], &[], &rooms(1), &[], &mut rng).unwrap_err();
        match err {
            ScheduleError::InsufficientData { missing } => {
                assert_eq!(missing, vec!["instructors", "courses"])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rooms_fill_in_supplied_order() {
        let mut rng = SmallRng::seed_from_u64(3);
        let run = ExamScheduler::new()
            .generate(&instructors(), &courses(2), &rooms(3), &[], &mut rng)
            .unwrap();

        let first = TimeSlot::assignable().next().unwrap();
        let bucket = run.grid.bucket(1, first);
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].room.id, "R0");
        assert_eq!(bucket[1].room.id, "R1");
    }

    #[test]
    fn test_load_balancing_prefers_first_on_tie() {
        let mut rng = SmallRng::seed_from_u64(5);
        let run = ExamScheduler::new()
            .generate(&instructors(), &courses(3), &rooms(1), &[], &mut rng)
            .unwrap();

        // One room: each exam lands in a new slot and rotates through the
        // instructors by load, ties going to the earliest supplied.
        let order: Vec<&str> = run.exams.iter().map(|e| e.instructor.id.as_str()).collect();
        assert_eq!(order, vec!["I1", "I2", "I3"]);
        assert_eq!(run.assignments.load("I1"), 1);
        assert_eq!(run.assignments.keys_for("I2"), &["1-9:00-10:00 AM".to_string()]);
    }

    #[test]
    fn test_instructor_not_reused_within_slot() {
        let mut rng = SmallRng::seed_from_u64(9);
        let solo = vec![Instructor::new("I1", "Dr. Solo", "Art")];
        let run = ExamScheduler::new()
            .generate(&solo, &courses(4), &rooms(3), &[], &mut rng)
            .unwrap();

        // A single instructor can take only one room per slot.
        assert_eq!(run.exam_count(), 4);
        for (i, exam) in run.exams.iter().enumerate() {
            assert_eq!(exam.room.id, "R0");
            assert_eq!(exam.time_slot, TimeSlot::assignable().nth(i).unwrap());
        }
    }

    #[test]
    fn test_blocked_course_holds_cursor() {
        let mut rng = SmallRng::seed_from_u64(11);
        let only_math = vec![Instructor::new("I1", "Dr. Euler", "Mathematics")];
        let blocked = vec![Course::new("C1", "Mathematics I", "MATH101")];
        let run = ExamScheduler::new()
            .generate(&only_math, &blocked, &rooms(2), &[], &mut rng)
            .unwrap();

        assert_eq!(run.exam_count(), 0);
        assert_eq!(run.grid.days().count(), 2);
        assert_eq!(run.unplaced_courses(&blocked).len(), 1);
        assert_eq!(run.assignments.instructor_count(), 0);
    }

    #[test]
    fn test_leading_space_course_never_placed() {
        let mut rng = SmallRng::seed_from_u64(13);
        let odd = vec![Course::new("C1", " Statistics", "STAT201")];
        let run = ExamScheduler::new()
            .generate(&instructors(), &odd, &rooms(2), &[], &mut rng)
            .unwrap();
        assert_eq!(run.exam_count(), 0);
        assert_eq!(run.unplaced_courses(&odd).len(), 1);
    }

    #[test]
    fn test_programs_drawn_from_supplied() {
        let mut rng = StdRng::seed_from_u64(21);
        let programs = vec![Program::new("P1", "BSc"), Program::new("P2", "MSc")];
        let run = ExamScheduler::new()
            .generate(&instructors(), &courses(6), &rooms(2), &programs, &mut rng)
            .unwrap();

        assert_eq!(run.exam_count(), 6);
        assert!(run
            .exams
            .iter()
            .all(|e| e.program.id == "P1" || e.program.id == "P2"));
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let programs = vec![Program::new("P1", "BSc"), Program::new("P2", "MSc")];
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            ExamScheduler::new()
                .generate(&instructors(), &courses(10), &rooms(3), &programs, &mut rng)
                .unwrap()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_capacity_bound() {
        let mut rng = SmallRng::seed_from_u64(2);
        let many: Vec<Instructor> = (0..10)
            .map(|i| Instructor::new(format!("I{i}"), format!("Dr. {i}"), "Music"))
            .collect();
        let run = ExamScheduler::new()
            .generate(&many, &courses(40), &rooms(2), &[], &mut rng)
            .unwrap();

        // 2 days * 8 slots * 2 rooms
        assert_eq!(run.exam_count(), 32);
        assert_eq!(run.unplaced_courses(&courses(40)).len(), 8);
    }
}
