//! Time grid: days and time slots.
//!
//! An exam session spans exactly two days. Each day is divided into nine
//! one-hour labelled intervals, the fifth of which is a lunch break that
//! never receives exams. The remaining eight slots form a four-slot morning
//! and a four-slot afternoon.
//!
//! | Index | Label | Assignable |
//! |-------|-------|------------|
//! | 0-3 | 8:00 AM .. 12:00 PM | yes |
//! | 4 | LUNCH BREAK | no |
//! | 5-8 | 1:00 PM .. 5:00 PM | yes |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exam day number (1-based).
pub type Day = u8;

/// The days of an exam session, in order.
pub const DAYS: [Day; 2] = [1, 2];

/// Slot labels in chronological order.
pub const TIME_SLOT_LABELS: [&str; 9] = [
    "8:00-9:00 AM",
    "9:00-10:00 AM",
    "10:00-11:00 AM",
    "11:00-12:00 PM",
    "LUNCH BREAK",
    "1:00-2:00 PM",
    "2:00-3:00 PM",
    "3:00-4:00 PM",
    "4:00-5:00 PM",
];

const LUNCH_BREAK_INDEX: usize = 4;

/// Number of slots per day that can hold exams.
pub const ASSIGNABLE_SLOTS_PER_DAY: usize = TIME_SLOT_LABELS.len() - 1;

/// One of the nine fixed daily time slots.
///
/// Ordered chronologically, so a `BTreeMap<TimeSlot, _>` iterates in
/// timetable order. Serializes as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeSlot(usize);

impl TimeSlot {
    /// The non-assignable break slot.
    pub const LUNCH_BREAK: TimeSlot = TimeSlot(LUNCH_BREAK_INDEX);

    /// All nine slots in chronological order, break included.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..TIME_SLOT_LABELS.len()).map(TimeSlot)
    }

    /// The eight slots that can hold exams, in chronological order.
    pub fn assignable() -> impl Iterator<Item = TimeSlot> {
        Self::all().filter(|s| !s.is_break())
    }

    /// Looks a slot up by its exact label.
    pub fn from_label(label: &str) -> Option<TimeSlot> {
        TIME_SLOT_LABELS
            .iter()
            .position(|l| *l == label)
            .map(TimeSlot)
    }

    /// Position in the day (0..9).
    pub fn index(self) -> usize {
        self.0
    }

    /// Display label, e.g. `"8:00-9:00 AM"`.
    pub fn label(self) -> &'static str {
        TIME_SLOT_LABELS[self.0]
    }

    /// Whether this is the lunch break.
    pub fn is_break(self) -> bool {
        self.0 == LUNCH_BREAK_INDEX
    }

    /// Whether this slot falls before the break.
    pub fn is_morning(self) -> bool {
        self.0 < LUNCH_BREAK_INDEX
    }

    /// Availability key used by the instructor ledger: `"{day}-{label}"`.
    pub fn key_on(self, day: Day) -> String {
        format!("{day}-{}", self.label())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label().to_string()
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        TimeSlot::from_label(&label).ok_or_else(|| format!("unknown time slot '{label}'"))
    }
}
