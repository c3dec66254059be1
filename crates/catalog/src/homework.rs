use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutorhub_core::{HomeworkId, LessonId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Assigned,
    Submitted,
    Graded,
}

/// A student's uploaded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub submitted_at: DateTime<Utc>,
    pub file_url: String,
}

/// Homework assigned out of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    pub id: HomeworkId,
    pub lesson_id: LessonId,
    pub student_id: UserId,
    pub title: String,
    pub description: String,
    pub assigned_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub file_url: String,
    pub status: HomeworkStatus,
    pub submission: Option<Submission>,
}

impl Homework {
    /// Assigned-and-unsubmitted past its due date.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == HomeworkStatus::Assigned && now > self.due_at
    }

    /// Record a submission. Plain record mutation: late and repeat
    /// submissions overwrite, matching the source behavior.
    pub fn submit(&mut self, now: DateTime<Utc>, file_url: impl Into<String>) {
        self.submission = Some(Submission {
            submitted_at: now,
            file_url: file_url.into(),
        });
        self.status = HomeworkStatus::Submitted;
    }
}

/// Assignments for the given student, earliest due date first.
pub fn for_student(homework: &[Homework], student_id: UserId) -> Vec<&Homework> {
    let mut hits: Vec<&Homework> = homework
        .iter()
        .filter(|h| h.student_id == student_id)
        .collect();
    hits.sort_by_key(|h| h.due_at);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn homework(due_offset_days: i64) -> Homework {
        Homework {
            id: HomeworkId::new(),
            lesson_id: LessonId::new(),
            student_id: UserId::new(),
            title: "Calculus Practice Problems".to_string(),
            description: "Complete problems 1-20 from Chapter 3".to_string(),
            assigned_at: Utc::now(),
            due_at: Utc::now() + Duration::days(due_offset_days),
            file_url: "/placeholder.svg".to_string(),
            status: HomeworkStatus::Assigned,
            submission: None,
        }
    }

    #[test]
    fn submit_sets_status_and_submission() {
        let mut hw = homework(7);
        hw.submit(Utc::now(), "/uploads/answer.pdf");
        assert_eq!(hw.status, HomeworkStatus::Submitted);
        assert_eq!(hw.submission.as_ref().unwrap().file_url, "/uploads/answer.pdf");
    }

    #[test]
    fn overdue_only_when_assigned_and_past_due() {
        let mut hw = homework(-1);
        assert!(hw.is_overdue(Utc::now()));
        hw.submit(Utc::now(), "/uploads/late.pdf");
        assert!(!hw.is_overdue(Utc::now()));
    }
}
