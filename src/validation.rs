//! Input and output integrity checks.
//!
//! [`validate_input`] checks the entity collections before generation:
//! - Duplicate IDs within a collection
//! - Blank IDs or names (presence only; content is never inspected)
//!
//! The generator does not call it: duplicate or blank entities are the
//! input provider's responsibility, and callers opt in to the check.
//!
//! [`audit_schedule`] re-checks the placement invariants of any grid, for
//! example one loaded back from a saved record:
//! - One exam per room per (day, slot)
//! - One exam per instructor per (day, slot)
//! - No own-subject invigilation
//! - Every exam stored under its own (day, slot) within the session days,
//!   never under the break

use std::collections::HashSet;

use crate::models::{
    Course, Instructor, Program, Room, ScheduleGrid, Violation, ViolationType, DAYS,
};
use crate::scheduler::is_own_subject;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A required field is blank.
    MissingField,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the four entity collections.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    instructors: &[Instructor],
    courses: &[Course],
    rooms: &[Room],
    programs: &[Program],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_collection(
        "instructor",
        instructors.iter().map(|i| (i.id.as_str(), i.name.as_str())),
        &mut errors,
    );
    check_collection(
        "course",
        courses.iter().map(|c| (c.id.as_str(), c.name.as_str())),
        &mut errors,
    );
    check_collection(
        "room",
        rooms.iter().map(|r| (r.id.as_str(), r.name.as_str())),
        &mut errors,
    );
    check_collection(
        "program",
        programs.iter().map(|p| (p.id.as_str(), p.name.as_str())),
        &mut errors,
    );

    for c in courses {
        if c.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Course '{}' has no code", c.id),
            ));
        }
    }
    for i in instructors {
        if i.subject.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Instructor '{}' has no subject", i.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_collection<'a>(
    kind: &str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for (id, name) in entries {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("A {kind} has a blank ID"),
            ));
            continue;
        }
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {kind} ID: {id}"),
            ));
        }
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("{kind} '{id}' has no name"),
            ));
        }
    }
}

/// Re-checks the placement invariants of a grid.
///
/// Returns every violation found; an empty vector means the grid is sound.
pub fn audit_schedule(grid: &ScheduleGrid) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (day, slot, exams) in grid.buckets() {
        if !DAYS.contains(&day) {
            violations.push(Violation::new(
                ViolationType::MisplacedExam,
                day.to_string(),
                format!("Day {day} is outside the exam session"),
            ));
        }

        if slot.is_break() {
            for exam in exams {
                violations.push(Violation::new(
                    ViolationType::MisplacedExam,
                    &exam.course.id,
                    format!("Exam {} stored under the {} on day {day}", exam.key(), slot.label()),
                ));
            }
        }

        let mut rooms = HashSet::new();
        let mut instructors = HashSet::new();
        for exam in exams {
            if exam.day != day || exam.time_slot != slot {
                violations.push(Violation::new(
                    ViolationType::MisplacedExam,
                    &exam.course.id,
                    format!(
                        "Exam {} stored under day {day} at {}",
                        exam.key(),
                        slot.label()
                    ),
                ));
            }
            if !rooms.insert(exam.room.id.as_str()) {
                violations.push(Violation::new(
                    ViolationType::RoomDoubleBooked,
                    &exam.room.id,
                    format!("Room '{}' hosts two exams on day {day} at {}", exam.room.id, slot.label()),
                ));
            }
            if !instructors.insert(exam.instructor.id.as_str()) {
                violations.push(Violation::new(
                    ViolationType::InstructorDoubleBooked,
                    &exam.instructor.id,
                    format!(
                        "Instructor '{}' invigilates two exams on day {day} at {}",
                        exam.instructor.id,
                        slot.label()
                    ),
                ));
            }
            if is_own_subject(&exam.instructor, &exam.course) {
                violations.push(Violation::new(
                    ViolationType::OwnSubjectConflict,
                    &exam.instructor.id,
                    format!(
                        "Instructor '{}' ({}) invigilates own-subject course {}",
                        exam.instructor.id, exam.instructor.subject, exam.course.code
                    ),
                ));
            }
        }
    }

    violations
}
