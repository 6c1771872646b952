use std::collections::HashSet;

use exam_schedule::export::export_text;
use exam_schedule::models::{Course, Instructor, Program, Room, TimeSlot, DAYS};
use exam_schedule::scheduler::{is_own_subject, ExamScheduler, GeneratedSchedule};
use exam_schedule::validation::audit_schedule;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SUBJECTS: [&str; 8] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Computer Science",
    "Biology",
    "History",
    "Art",
    "Statistics",
];

const COURSE_WORDS: [&str; 10] = [
    "Mathematics",
    "Physics",
    "Organic",
    "Computer",
    "Data",
    "Molecular",
    "Modern",
    "Applied",
    "Statistics",
    "Chemistry",
];

fn arb_instructors() -> impl Strategy<Value = Vec<Instructor>> {
    prop::collection::vec(0..SUBJECTS.len(), 1..8).prop_map(|subjects| {
        subjects
            .into_iter()
            .enumerate()
            .map(|(i, s)| Instructor::new(format!("I{i}"), format!("Dr. {i}"), SUBJECTS[s]))
            .collect()
    })
}

fn arb_courses() -> impl Strategy<Value = Vec<Course>> {
    prop::collection::vec((0..COURSE_WORDS.len(), 0..COURSE_WORDS.len()), 1..40).prop_map(
        |words| {
            words
                .into_iter()
                .enumerate()
                .map(|(i, (a, b))| {
                    Course::new(
                        format!("C{i}"),
                        format!("{} {}", COURSE_WORDS[a], COURSE_WORDS[b]),
                        format!("{}{}", &COURSE_WORDS[a][..3].to_uppercase(), 100 + i),
                    )
                })
                .collect()
        },
    )
}

fn arb_rooms() -> impl Strategy<Value = Vec<Room>> {
    (1usize..6).prop_map(|n| {
        (0..n)
            .map(|i| Room::new(format!("R{i}"), format!("Room {i}")))
            .collect()
    })
}

fn arb_programs() -> impl Strategy<Value = Vec<Program>> {
    (0usize..4).prop_map(|n| {
        (0..n)
            .map(|i| Program::new(format!("P{i}"), format!("Program {i}")))
            .collect()
    })
}

fn run(
    instructors: &[Instructor],
    courses: &[Course],
    rooms: &[Room],
    programs: &[Program],
    seed: u64,
) -> GeneratedSchedule {
    let mut rng = StdRng::seed_from_u64(seed);
    ExamScheduler::new()
        .generate(instructors, courses, rooms, programs, &mut rng)
        .expect("non-empty inputs always generate")
}

proptest! {
    #[test]
    fn grid_has_fixed_shape(
        instructors in arb_instructors(),
        courses in arb_courses(),
        rooms in arb_rooms(),
        programs in arb_programs(),
        seed in any::<u64>(),
    ) {
        let out = run(&instructors, &courses, &rooms, &programs, seed);
        prop_assert_eq!(out.grid.days().collect::<Vec<_>>(), DAYS.to_vec());
        for day in DAYS {
            let slots: Vec<TimeSlot> = out.grid.slots(day).collect();
            prop_assert_eq!(slots, TimeSlot::assignable().collect::<Vec<_>>());
        }
    }

    #[test]
    fn no_double_booking_or_own_subject(
        instructors in arb_instructors(),
        courses in arb_courses(),
        rooms in arb_rooms(),
        programs in arb_programs(),
        seed in any::<u64>(),
    ) {
        let out = run(&instructors, &courses, &rooms, &programs, seed);
        for day in DAYS {
            for slot in TimeSlot::assignable() {
                let bucket = out.grid.bucket(day, slot);
                let rooms_used: HashSet<&str> = bucket.iter().map(|e| e.room.id.as_str()).collect();
                let staff_used: HashSet<&str> = bucket.iter().map(|e| e.instructor.id.as_str()).collect();
                prop_assert_eq!(rooms_used.len(), bucket.len());
                prop_assert_eq!(staff_used.len(), bucket.len());
            }
        }
        for exam in &out.exams {
            prop_assert!(!is_own_subject(&exam.instructor, &exam.course));
        }
        prop_assert!(audit_schedule(&out.grid).is_empty());
    }

    #[test]
    fn same_seed_same_grid(
        instructors in arb_instructors(),
        courses in arb_courses(),
        rooms in arb_rooms(),
        programs in arb_programs(),
        seed in any::<u64>(),
    ) {
        let a = run(&instructors, &courses, &rooms, &programs, seed);
        let b = run(&instructors, &courses, &rooms, &programs, seed);
        prop_assert_eq!(
            serde_json::to_string(&a.grid).unwrap(),
            serde_json::to_string(&b.grid).unwrap()
        );
        prop_assert_eq!(a, b);
    }

    #[test]
    fn exam_count_is_bounded(
        instructors in arb_instructors(),
        courses in arb_courses(),
        rooms in arb_rooms(),
        programs in arb_programs(),
        seed in any::<u64>(),
    ) {
        let out = run(&instructors, &courses, &rooms, &programs, seed);
        let stats = out.stats(&rooms);
        prop_assert!(stats.total_exams <= courses.len().min(2 * 8 * rooms.len()));
        prop_assert_eq!(stats.total_exams, out.grid.exam_count());
        prop_assert!(stats.utilization_rate >= 0.0 && stats.utilization_rate <= 100.0);

        // Each course is examined at most once.
        let placed: HashSet<&str> = out.exams.iter().map(|e| e.course.id.as_str()).collect();
        prop_assert_eq!(placed.len(), out.exams.len());
    }

    #[test]
    fn ledger_matches_exams(
        instructors in arb_instructors(),
        courses in arb_courses(),
        rooms in arb_rooms(),
        seed in any::<u64>(),
    ) {
        let out = run(&instructors, &courses, &rooms, &[], seed);
        let stats = out.stats(&rooms);
        prop_assert_eq!(out.assignments.instructor_count(), stats.assigned_instructor_count);
        for (id, keys) in out.assignments.iter() {
            prop_assert_eq!(keys.len(), stats.load_by_instructor[id]);
        }
        prop_assert!(out.exams.iter().all(|e| e.program.is_general()));
    }

    #[test]
    fn export_is_idempotent(
        instructors in arb_instructors(),
        courses in arb_courses(),
        rooms in arb_rooms(),
        programs in arb_programs(),
        seed in any::<u64>(),
    ) {
        let out = run(&instructors, &courses, &rooms, &programs, seed);
        let first = export_text(&out.grid).unwrap();
        let second = export_text(&out.grid).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.matches("  • ").count(), out.exam_count());
    }
}
