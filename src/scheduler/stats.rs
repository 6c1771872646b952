//! Schedule utilization statistics.
//!
//! Derived from the placed exams and the room set the run was given.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total exams | Number of placed exams |
//! | Capacity slots | 8 assignable slots × 2 days × rooms |
//! | Utilization rate | exams / capacity × 100, one decimal |
//! | Assigned instructors | Distinct instructors used |
//! | Assigned rooms | Distinct rooms used |
//! | Instructor load | Exams per instructor |

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ExamSlot, Room, ASSIGNABLE_SLOTS_PER_DAY, DAYS};

/// Summary statistics for a generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    /// Number of placed exams.
    pub total_exams: usize,
    /// Total (day, slot, room) cells available.
    pub total_capacity_slots: usize,
    /// Percentage of capacity filled, rounded to one decimal (0.0..=100.0).
    pub utilization_rate: f64,
    /// Distinct instructors with at least one exam.
    pub assigned_instructor_count: usize,
    /// Distinct rooms with at least one exam.
    pub assigned_room_count: usize,
    /// Exams per instructor id.
    pub load_by_instructor: BTreeMap<String, usize>,
}

impl ScheduleStats {
    /// Computes statistics from placed exams.
    ///
    /// # Arguments
    /// * `exams` - The placed exams.
    /// * `rooms` - The rooms the run was given (sets total capacity).
    pub fn calculate(exams: &[ExamSlot], rooms: &[Room]) -> Self {
        let total_exams = exams.len();
        let total_capacity_slots = ASSIGNABLE_SLOTS_PER_DAY * DAYS.len() * rooms.len();

        let utilization_rate = if total_capacity_slots == 0 {
            0.0
        } else {
            round_one_decimal(total_exams as f64 / total_capacity_slots as f64 * 100.0)
        };

        let mut load_by_instructor: BTreeMap<String, usize> = BTreeMap::new();
        for exam in exams {
            *load_by_instructor
                .entry(exam.instructor.id.clone())
                .or_insert(0) += 1;
        }
        let assigned_rooms: BTreeSet<&str> = exams.iter().map(|e| e.room.id.as_str()).collect();

        Self {
            total_exams,
            total_capacity_slots,
            utilization_rate,
            assigned_instructor_count: load_by_instructor.len(),
            assigned_room_count: assigned_rooms.len(),
            load_by_instructor,
        }
    }

    /// Difference between the busiest and least busy assigned instructor.
    ///
    /// Zero when fewer than two instructors were used.
    pub fn load_spread(&self) -> usize {
        let max = self.load_by_instructor.values().max().copied().unwrap_or(0);
        let min = self.load_by_instructor.values().min().copied().unwrap_or(0);
        max - min
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
