//! Demo dataset used by the demo binary and tests.
//!
//! Mirrors the seed data the product ships for its demo accounts: one
//! learner, one instructor, one administrator, and a small catalog wired to
//! them.

use chrono::{DateTime, Duration, Utc};

use tutorhub_core::{CourseId, HomeworkId, LessonId, PaymentId, TicketId, UserId};

use crate::{
    Course, Feedback, Homework, HomeworkStatus, Lesson, LessonStatus, Payment, PaymentStatus,
    SupportTicket, TicketMessage, TicketPriority, TicketStatus,
};

/// A consistent in-memory dataset: every cross-reference resolves.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub learner_id: UserId,
    pub instructor_id: UserId,
    pub admin_id: UserId,
    pub courses: Vec<Course>,
    pub lessons: Vec<Lesson>,
    pub homework: Vec<Homework>,
    pub payments: Vec<Payment>,
    pub tickets: Vec<SupportTicket>,
}

impl DemoData {
    /// Build the dataset relative to `now` so "upcoming"/"past" fixtures stay
    /// meaningful regardless of wall-clock time.
    pub fn seed(now: DateTime<Utc>) -> Self {
        let learner_id = UserId::new();
        let instructor_id = UserId::new();
        let admin_id = UserId::new();

        let math_id = CourseId::new();
        let physics_id = CourseId::new();

        let courses = vec![
            Course {
                id: math_id,
                title: "Advanced Mathematics".to_string(),
                description: "Covers calculus, linear algebra, and statistics".to_string(),
                subjects: vec!["Mathematics".to_string()],
                grades: vec!["9", "10", "11", "12"].into_iter().map(String::from).collect(),
                price_cents: 29_900,
                duration: "3 months".to_string(),
                enrolled_count: 42,
            },
            Course {
                id: physics_id,
                title: "Physics Fundamentals".to_string(),
                description: "Learn mechanics, thermodynamics, and electromagnetism".to_string(),
                subjects: vec!["Physics".to_string()],
                grades: vec!["11", "12"].into_iter().map(String::from).collect(),
                price_cents: 27_900,
                duration: "3 months".to_string(),
                enrolled_count: 38,
            },
            Course {
                id: CourseId::new(),
                title: "Computer Science Basics".to_string(),
                description: "Introduction to programming, algorithms, and data structures"
                    .to_string(),
                subjects: vec!["Computer Science".to_string()],
                grades: vec!["10", "11", "12"].into_iter().map(String::from).collect(),
                price_cents: 34_900,
                duration: "4 months".to_string(),
                enrolled_count: 65,
            },
        ];

        let upcoming_lesson_id = LessonId::new();
        let completed_lesson_id = LessonId::new();
        let practice_hw_id = HomeworkId::new();
        let submitted_hw_id = HomeworkId::new();

        let lessons = vec![
            Lesson {
                id: upcoming_lesson_id,
                course_id: math_id,
                student_id: learner_id,
                teacher_id: instructor_id,
                title: "Calculus Introduction".to_string(),
                scheduled_at: now + Duration::days(2),
                duration_minutes: 60,
                status: LessonStatus::Scheduled,
                meeting_link: "https://meet.example.com/calc-1".to_string(),
                homework_id: Some(practice_hw_id),
                feedback: None,
            },
            Lesson {
                id: completed_lesson_id,
                course_id: math_id,
                student_id: learner_id,
                teacher_id: instructor_id,
                title: "Linear Algebra Basics".to_string(),
                scheduled_at: now - Duration::days(3),
                duration_minutes: 60,
                status: LessonStatus::Completed,
                meeting_link: "https://meet.example.com/la-1".to_string(),
                homework_id: Some(submitted_hw_id),
                feedback: Some(Feedback {
                    rating: 4.5,
                    comment: "Great session, very informative!".to_string(),
                }),
            },
            Lesson {
                id: LessonId::new(),
                course_id: physics_id,
                student_id: learner_id,
                teacher_id: instructor_id,
                title: "Mechanics: Force and Motion".to_string(),
                scheduled_at: now + Duration::days(5),
                duration_minutes: 60,
                status: LessonStatus::Scheduled,
                meeting_link: "https://meet.example.com/mech-1".to_string(),
                homework_id: None,
                feedback: None,
            },
        ];

        let homework = vec![
            Homework {
                id: practice_hw_id,
                lesson_id: upcoming_lesson_id,
                student_id: learner_id,
                title: "Calculus Practice Problems".to_string(),
                description: "Complete problems 1-20 from Chapter 3".to_string(),
                assigned_at: now,
                due_at: now + Duration::days(7),
                file_url: "/placeholder.svg".to_string(),
                status: HomeworkStatus::Assigned,
                submission: None,
            },
            Homework {
                id: submitted_hw_id,
                lesson_id: completed_lesson_id,
                student_id: learner_id,
                title: "Linear Algebra Worksheet".to_string(),
                description: "Matrix operations worksheet".to_string(),
                assigned_at: now - Duration::days(5),
                due_at: now - Duration::days(1),
                file_url: "/placeholder.svg".to_string(),
                status: HomeworkStatus::Submitted,
                submission: Some(crate::Submission {
                    submitted_at: now - Duration::days(3),
                    file_url: "/placeholder.svg".to_string(),
                }),
            },
        ];

        let payments = vec![
            Payment {
                id: PaymentId::new(),
                student_id: learner_id,
                month: "April 2025".to_string(),
                amount_cents: 59_900,
                status: PaymentStatus::Paid,
                due_at: now - Duration::days(15),
                paid_at: Some(now - Duration::days(17)),
            },
            Payment {
                id: PaymentId::new(),
                student_id: learner_id,
                month: "May 2025".to_string(),
                amount_cents: 59_900,
                status: PaymentStatus::Pending,
                due_at: now + Duration::days(10),
                paid_at: None,
            },
        ];

        let tickets = vec![SupportTicket {
            id: TicketId::new(),
            title: "Homework clarification".to_string(),
            description: "Need help understanding question 5 in homework 1".to_string(),
            created_by: learner_id,
            assigned_to: Some(instructor_id),
            created_at: now - Duration::days(2),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            messages: vec![TicketMessage {
                sender_id: learner_id,
                body: "I'm having trouble understanding question 5 in the homework. Could you \
                       please clarify?"
                    .to_string(),
                sent_at: now - Duration::days(2),
            }],
        }];

        Self {
            learner_id,
            instructor_id,
            admin_id,
            courses,
            lessons,
            homework,
            payments,
            tickets,
        }
    }
}
