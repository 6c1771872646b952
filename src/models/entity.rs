//! Input entities.
//!
//! The four flat collections an exam timetable is built from. Identifiers
//! are opaque strings owned by whatever layer persists the data; the engine
//! treats every entity as an immutable key for the duration of a run.

use serde::{Deserialize, Serialize};

/// A member of staff who can invigilate exams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text specialty label (e.g. "Mathematics").
    ///
    /// Used by the own-subject conflict rule: an instructor never
    /// invigilates a course that lexically overlaps this label.
    pub subject: String,
    /// Contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Instructor {
    /// Creates an instructor with the given specialty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject: subject.into(),
            email: None,
        }
    }

    /// Sets the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A course that needs an exam sitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Course title (e.g. "Linear Algebra").
    pub name: String,
    /// Short catalogue code (e.g. "MATH301").
    pub code: String,
    /// Credit count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
}

impl Course {
    /// Creates a course.
    pub fn new(id: impl Into<String>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            credits: None,
        }
    }

    /// Sets the credit count.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Course name up to the first space.
    ///
    /// Empty when the name is empty or starts with a space.
    pub fn leading_word(&self) -> &str {
        self.name.split(' ').next().unwrap_or("")
    }
}

/// An examination room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name (e.g. "Hall A").
    pub name: String,
    /// Seat count. Informational only; placement ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Room type label (e.g. "Lecture Hall", "Lab").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity: None,
            room_type: None,
        }
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the room type label.
    pub fn with_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = Some(room_type.into());
        self
    }
}

/// A study program an exam sitting is booked under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Unique program identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Program {
    /// Id of the fallback program used when no programs are supplied.
    pub const GENERAL_ID: &'static str = "general";

    /// Creates a program.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: None,
        }
    }

    /// Sets the owning department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// The sentinel "General" program.
    pub fn general() -> Self {
        Self::new(Self::GENERAL_ID, "General")
    }

    /// Whether this is the sentinel program.
    pub fn is_general(&self) -> bool {
        self.id == Self::GENERAL_ID
    }
}
