use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutorhub_core::{TicketId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

/// One message in a ticket thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketMessage {
    pub sender_id: UserId,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// A support ticket with its message thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub created_by: UserId,
    pub assigned_to: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub messages: Vec<TicketMessage>,
}

impl SupportTicket {
    /// Append a reply. Replying to a resolved ticket reopens it, matching the
    /// source behavior.
    pub fn reply(&mut self, sender_id: UserId, body: impl Into<String>, now: DateTime<Utc>) {
        self.messages.push(TicketMessage {
            sender_id,
            body: body.into(),
            sent_at: now,
        });
        if self.status == TicketStatus::Resolved {
            self.status = TicketStatus::Open;
        }
    }

    pub fn resolve(&mut self) {
        self.status = TicketStatus::Resolved;
    }

    pub fn is_open(&self) -> bool {
        self.status != TicketStatus::Resolved
    }
}

/// Tickets visible to a user: authored by them or assigned to them.
pub fn visible_to(tickets: &[SupportTicket], user_id: UserId) -> Vec<&SupportTicket> {
    tickets
        .iter()
        .filter(|t| t.created_by == user_id || t.assigned_to == Some(user_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(created_by: UserId, assigned_to: Option<UserId>) -> SupportTicket {
        SupportTicket {
            id: TicketId::new(),
            title: "Homework clarification".to_string(),
            description: "Need help understanding question 5".to_string(),
            created_by,
            assigned_to,
            created_at: Utc::now(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            messages: Vec::new(),
        }
    }

    #[test]
    fn reply_reopens_a_resolved_ticket() {
        let author = UserId::new();
        let mut t = ticket(author, None);
        t.resolve();
        assert!(!t.is_open());

        t.reply(author, "Still stuck on question 5", Utc::now());
        assert!(t.is_open());
        assert_eq!(t.messages.len(), 1);
    }

    #[test]
    fn visibility_covers_author_and_assignee() {
        let author = UserId::new();
        let assignee = UserId::new();
        let outsider = UserId::new();
        let tickets = vec![ticket(author, Some(assignee))];

        assert_eq!(visible_to(&tickets, author).len(), 1);
        assert_eq!(visible_to(&tickets, assignee).len(), 1);
        assert!(visible_to(&tickets, outsider).is_empty());
    }
}
