//! Plain-text schedule export.
//!
//! Renders a grid into the downloadable text artifact. The layout is a
//! fixed contract: days ascending, all nine slots in chronological order
//! (the break rendered as a bare label), exams in stored bucket order.
//! Rendering never re-sorts, so the same grid always yields the same text.
//!
//! ```text
//! EXAM SCHEDULE EXPORT
//!
//! DAY 1
//! ==================================================
//! 8:00-9:00 AM:
//!   • MATH301 - Linear Algebra
//!     Instructor: Dr. Curie
//!     Room: Hall A
//!     Program: BSc Physics
//!
//! 9:00-10:00 AM:
//!   No exams scheduled
//!
//! ...
//!
//! LUNCH BREAK
//!
//! 1:00-2:00 PM:
//! ...
//! ```

use crate::error::{Result, ScheduleError};
use crate::models::{ExamSlot, ScheduleGrid, TimeSlot};

/// Suggested file name for the exported artifact.
pub const EXPORT_FILE_NAME: &str = "exam_schedule.txt";

const EXPORT_TITLE: &str = "EXAM SCHEDULE EXPORT";
const DAY_RULE_WIDTH: usize = 50;

/// Renders a grid as the text export.
///
/// # Errors
/// [`ScheduleError::EmptySchedule`] if the grid has no day keys, i.e.
/// nothing has been generated. A generated grid with zero exams renders
/// normally.
pub fn export_text(grid: &ScheduleGrid) -> Result<String> {
    if grid.is_empty() {
        return Err(ScheduleError::EmptySchedule);
    }

    let mut out = format!("{EXPORT_TITLE}\n\n");
    for day in grid.days() {
        out.push_str(&format!("DAY {day}\n{}\n", "=".repeat(DAY_RULE_WIDTH)));

        for slot in TimeSlot::all() {
            if slot.is_break() {
                out.push_str(&format!("\n{}\n\n", slot.label()));
                continue;
            }

            out.push_str(&format!("{}:\n", slot.label()));
            let exams = grid.bucket(day, slot);
            if exams.is_empty() {
                out.push_str("  No exams scheduled\n\n");
            } else {
                for exam in exams {
                    push_exam(&mut out, exam);
                }
            }
        }
        out.push('\n');
    }

    Ok(out)
}

fn push_exam(out: &mut String, exam: &ExamSlot) {
    out.push_str(&format!("  • {} - {}\n", exam.course.code, exam.course.name));
    out.push_str(&format!("    Instructor: {}\n", exam.instructor.name));
    out.push_str(&format!("    Room: {}\n", exam.room.name));
    out.push_str(&format!("    Program: {}\n\n", exam.program.name));
}
