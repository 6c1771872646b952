//! Input dataset container.
//!
//! Bundles the four entity collections as the input provider hands them
//! over, and loads them from a TOML or JSON file for the command-line tool.
//!
//! ```toml
//! [[instructors]]
//! id = "I1"
//! name = "Dr. Euler"
//! subject = "Mathematics"
//!
//! [[courses]]
//! id = "C1"
//! name = "Classical Mechanics"
//! code = "PHYS101"
//!
//! [[rooms]]
//! id = "R1"
//! name = "Hall A"
//! capacity = 120
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ScheduleError};
use crate::models::{Course, Instructor, Program, Room};
use crate::validation::{validate_input, ValidationResult};

/// The entity collections for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub programs: Vec<Program>,
}

/// Entity counts, as shown on the overview dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub instructors: usize,
    pub courses: usize,
    pub rooms: usize,
    pub programs: usize,
}

impl Dataset {
    /// Creates a dataset from its collections.
    pub fn new(
        instructors: Vec<Instructor>,
        courses: Vec<Course>,
        rooms: Vec<Room>,
        programs: Vec<Program>,
    ) -> Self {
        Self {
            instructors,
            courses,
            rooms,
            programs,
        }
    }

    /// Loads a dataset file. `.json` files are read as JSON, anything else
    /// as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::dataset(format!("{}: {e}", path.display())))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parses a TOML dataset.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScheduleError::dataset(e.to_string()))
    }

    /// Parses a JSON dataset.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ScheduleError::dataset(e.to_string()))
    }

    /// Entity counts.
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            instructors: self.instructors.len(),
            courses: self.courses.len(),
            rooms: self.rooms.len(),
            programs: self.programs.len(),
        }
    }

    /// Runs [`validate_input`] over the collections.
    pub fn validate(&self) -> ValidationResult {
        validate_input(&self.instructors, &self.courses, &self.rooms, &self.programs)
    }
}
