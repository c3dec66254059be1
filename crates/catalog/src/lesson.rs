use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutorhub_core::{CourseId, HomeworkId, LessonId, UserId};

/// Lifecycle of a booked lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// Student feedback left after a completed lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub rating: f32,
    pub comment: String,
}

/// A one-on-one tutoring lesson booked between a student and a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub course_id: CourseId,
    pub student_id: UserId,
    pub teacher_id: UserId,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: LessonStatus,
    pub meeting_link: String,
    pub homework_id: Option<HomeworkId>,
    pub feedback: Option<Feedback>,
}

impl Lesson {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == LessonStatus::Scheduled && self.scheduled_at > now
    }
}

/// Lessons involving the given student, soonest first.
pub fn for_student(lessons: &[Lesson], student_id: UserId) -> Vec<&Lesson> {
    let mut hits: Vec<&Lesson> = lessons.iter().filter(|l| l.student_id == student_id).collect();
    hits.sort_by_key(|l| l.scheduled_at);
    hits
}

/// Lessons taught by the given teacher, soonest first.
pub fn for_teacher(lessons: &[Lesson], teacher_id: UserId) -> Vec<&Lesson> {
    let mut hits: Vec<&Lesson> = lessons.iter().filter(|l| l.teacher_id == teacher_id).collect();
    hits.sort_by_key(|l| l.scheduled_at);
    hits
}

/// Split into (upcoming, past) relative to `now`. Cancelled lessons count as
/// past.
pub fn partition_by_time(lessons: &[Lesson], now: DateTime<Utc>) -> (Vec<&Lesson>, Vec<&Lesson>) {
    lessons.iter().partition(|l| l.is_upcoming(now))
}
