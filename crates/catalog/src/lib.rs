//! `tutorhub-catalog` — marketplace records.
//!
//! Plain records the dashboards list and filter: courses, booked lessons,
//! homework, payments, support tickets. These carry no enforced lifecycle;
//! consistency lives with the backing service, not here.

pub mod billing;
pub mod course;
pub mod fixtures;
pub mod homework;
pub mod lesson;
pub mod ticket;

pub use billing::{Payment, PaymentStatus};
pub use course::Course;
pub use fixtures::DemoData;
pub use homework::{Homework, HomeworkStatus, Submission};
pub use lesson::{Feedback, Lesson, LessonStatus};
pub use ticket::{SupportTicket, TicketMessage, TicketPriority, TicketStatus};
