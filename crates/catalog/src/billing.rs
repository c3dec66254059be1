use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutorhub_core::{PaymentId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

/// A monthly tuition invoice for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub student_id: UserId,
    /// Billing period label, e.g. "May 2025".
    pub month: String,
    pub amount_cents: i64,
    pub status: PaymentStatus,
    pub due_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn is_outstanding(&self) -> bool {
        self.status == PaymentStatus::Pending
    }
}

/// Sum of outstanding amounts for the given student.
pub fn outstanding_total(payments: &[Payment], student_id: UserId) -> i64 {
    payments
        .iter()
        .filter(|p| p.student_id == student_id && p.is_outstanding())
        .map(|p| p.amount_cents)
        .sum()
}
