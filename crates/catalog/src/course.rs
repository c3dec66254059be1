use serde::{Deserialize, Serialize};

use tutorhub_core::CourseId;

/// A course offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub subjects: Vec<String>,
    /// Grade levels the course targets (e.g. "9" through "12").
    pub grades: Vec<String>,
    pub price_cents: i64,
    pub duration: String,
    pub enrolled_count: u32,
}

impl Course {
    /// Case-insensitive keyword match over title and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    pub fn covers_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s.eq_ignore_ascii_case(subject))
    }

    pub fn offered_for_grade(&self, grade: &str) -> bool {
        self.grades.iter().any(|g| g == grade)
    }
}

/// Filter a course list by free-text query; an empty query keeps everything.
pub fn search<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    if query.trim().is_empty() {
        return courses.iter().collect();
    }
    courses.iter().filter(|c| c.matches(query)).collect()
}

/// Filter a course list by subject.
pub fn by_subject<'a>(courses: &'a [Course], subject: &str) -> Vec<&'a Course> {
    courses.iter().filter(|c| c.covers_subject(subject)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, subjects: &[&str]) -> Course {
        Course {
            id: CourseId::new(),
            title: title.to_string(),
            description: String::new(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            grades: vec!["10".to_string()],
            price_cents: 29_900,
            duration: "3 months".to_string(),
            enrolled_count: 0,
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let courses = vec![
            course("Advanced Mathematics", &["Mathematics"]),
            course("Physics Fundamentals", &["Physics"]),
        ];
        let hits = search(&courses, "physics");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Physics Fundamentals");
    }

    #[test]
    fn empty_query_keeps_everything() {
        let courses = vec![course("A", &[]), course("B", &[])];
        assert_eq!(search(&courses, "  ").len(), 2);
    }

    #[test]
    fn subject_filter() {
        let courses = vec![
            course("Advanced Mathematics", &["Mathematics"]),
            course("Physics Fundamentals", &["Physics"]),
        ];
        assert_eq!(by_subject(&courses, "mathematics").len(), 1);
    }
}
