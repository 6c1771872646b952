//! Own-subject conflict rule.
//!
//! An instructor may not invigilate an exam in their own specialty. The
//! specialty is a free-text label, so the check is lexical: a
//! case-insensitive substring comparison between the label and the course
//! name and code.
//!
//! The instructor's subject *overlaps* the course when any of:
//! 1. the course name contains the subject,
//! 2. the course code contains the subject,
//! 3. the subject contains the course name up to its first space.
//!
//! Short labels can over- or under-match (e.g. "Art" inside "Martial
//! Studies"). The rule is kept literal; there is no taxonomy behind it.

use crate::models::{Course, Instructor};

/// Whether `instructor`'s specialty lexically overlaps `course`.
pub fn is_own_subject(instructor: &Instructor, course: &Course) -> bool {
    let subject = instructor.subject.to_lowercase();
    let name = course.name.to_lowercase();
    let code = course.code.to_lowercase();
    let leading = course.leading_word().to_lowercase();

    name.contains(&subject) || code.contains(&subject) || subject.contains(&leading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(subject: &str) -> Instructor {
        Instructor::new("I1", "Dr. Test", subject)
    }

    #[test]
    fn test_name_contains_subject() {
        let c = Course::new("C1", "Applied Mathematics II", "AM202");
        assert!(is_own_subject(&teacher("Mathematics"), &c));
        assert!(is_own_subject(&teacher("MATHEMATICS"), &c));
        assert!(!is_own_subject(&teacher("Physics"), &c));
    }

    #[test]
    fn test_code_contains_subject() {
        let c = Course::new("C1", "Quantum Mechanics", "PHYS101");
        assert!(is_own_subject(&teacher("phys"), &c));
        assert!(!is_own_subject(&teacher("Physics"), &c));
    }

    #[test]
    fn test_subject_contains_leading_word() {
        let c = Course::new("C1", "Computer Networks", "NET310");
        assert!(is_own_subject(&teacher("Computer Science"), &c));
        // Only the first word counts.
        let d = Course::new("C2", "Intro to Computer Science", "CS100");
        assert!(!is_own_subject(&teacher("Computer Engineering"), &d));
    }

    #[test]
    fn test_short_label_false_positive_is_preserved() {
        let c = Course::new("C1", "Martial Studies", "MS100");
        assert!(is_own_subject(&teacher("Art"), &c));
    }

    #[test]
    fn test_empty_subject_overlaps_everything() {
        let c = Course::new("C1", "Biology", "BIO301");
        assert!(is_own_subject(&teacher(""), &c));
    }

    #[test]
    fn test_leading_space_overlaps_everything() {
        // The first space-delimited token of " Statistics" is empty.
        let c = Course::new("C1", " Statistics", "STAT201");
        for s in ["Mathematics", "Physics", "History"] {
            assert!(is_own_subject(&teacher(s), &c), "{s} should overlap");
        }
    }

    #[test]
    fn test_unrelated_subject() {
        let c = Course::new("C1", "Statistics", "STAT201");
        for s in ["Mathematics", "Physics", "Chemistry", "Computer Science", "Biology"] {
            assert!(!is_own_subject(&teacher(s), &c), "{s} should not overlap");
        }
    }
}
