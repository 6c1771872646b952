//! Exam timetable generation.
//!
//! Assigns each course an exam sitting over a two-day session: a
//! (day, slot, room, instructor, program) combination such that no room or
//! instructor is double-booked, no instructor invigilates their own
//! subject, and invigilation load is spread evenly.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Instructor`, `Course`, `Room`, `Program`,
//!   `TimeSlot`, `ExamSlot`, `ScheduleGrid`, `Violation`
//! - **`scheduler`**: Greedy generator (`ExamScheduler`) and `ScheduleStats`
//! - **`export`**: Plain-text export of a grid
//! - **`validation`**: Input integrity checks and grid audits
//! - **`dataset`**: Entity collection container and file loading
//! - **`config`**: TOML configuration for the command-line tool
//!
//! # Randomness
//!
//! The course shuffle and program draw use a caller-supplied `rand::Rng`.
//! The same seed and inputs reproduce the same grid under a given `rand`
//! release; `StdRng` output may change between `rand` versions.
//!
//! # Example
//!
//! ```
//! use exam_schedule::export::export_text;
//! use exam_schedule::models::{Course, Instructor, Program, Room};
//! use exam_schedule::scheduler::ExamScheduler;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let instructors = vec![
//!     Instructor::new("I1", "Dr. Euler", "Mathematics"),
//!     Instructor::new("I2", "Dr. Curie", "Physics"),
//! ];
//! let courses = vec![
//!     Course::new("C1", "Mathematics I", "MATH101"),
//!     Course::new("C2", "Physics I", "PHYS101"),
//! ];
//! let rooms = vec![Room::new("R1", "Hall A"), Room::new("R2", "Hall B")];
//! let programs = vec![Program::new("P1", "BSc Science")];
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let run = ExamScheduler::new()
//!     .generate(&instructors, &courses, &rooms, &programs, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(run.exam_count(), 2);
//! let stats = run.stats(&rooms);
//! assert!((stats.utilization_rate - 6.3).abs() < 1e-10);
//! assert!(export_text(&run.grid).unwrap().starts_with("EXAM SCHEDULE EXPORT"));
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
