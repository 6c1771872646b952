//! Greedy exam generation and schedule statistics.
//!
//! # Algorithm
//!
//! `ExamScheduler` is a single-pass, first-fit-with-skip heuristic over
//! (day, slot, room) triples. It favors a predictable, fast result over
//! completeness: a course that finds no eligible instructor is retried at
//! the next triple, and courses still waiting when the triples run out are
//! left unplaced.
//!
//! # Rules
//!
//! - One exam per room per (day, slot).
//! - One exam per instructor per (day, slot).
//! - No instructor invigilates their own subject (see [`is_own_subject`]).
//! - Load balancing: the least-loaded eligible instructor is chosen.
//!
//! # Statistics
//!
//! `ScheduleStats` reports placed exams, capacity utilization and the
//! distinct instructors and rooms used.

mod conflict;
mod generator;
mod stats;

pub use conflict::is_own_subject;
pub use generator::{AssignmentLedger, ExamScheduler, GeneratedSchedule};
pub use stats::ScheduleStats;
