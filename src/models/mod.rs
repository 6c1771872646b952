//! Exam timetabling domain models.
//!
//! Provides the input entities and the generated solution types.
//!
//! # Domain Mappings
//!
//! | exam-schedule | Role in a timetable |
//! |---------------|---------------------|
//! | Course | The work item: one exam sitting per course |
//! | Room | Spatial resource: one exam per room per slot |
//! | Instructor | Human resource: invigilates at most one exam per slot |
//! | Program | Booking label attached to each sitting |
//! | ScheduleGrid | The solution, bucketed by day and slot |

mod entity;
mod schedule;
mod slot;

pub use entity::{Course, Instructor, Program, Room};
pub use schedule::{ExamSlot, ScheduleGrid, Violation, ViolationType, DEFAULT_EXAM_DURATION_MIN};
pub use slot::{Day, TimeSlot, ASSIGNABLE_SLOTS_PER_DAY, DAYS, TIME_SLOT_LABELS};
