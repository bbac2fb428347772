//! Sessions and the persisted schedule.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Kind of allocated session.
///
/// Serialized lowercase (`"study"` / `"review"`) on the wire and in the
/// store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// A block of at most one hour assigned to work on a task before its
    /// deadline.
    Study,
    /// A follow-up block of at most 30 minutes two days after the study
    /// session.
    Review,
}

impl SessionKind {
    /// Maximum duration a session of this kind may occupy.
    pub fn max_duration(&self) -> Duration {
        match self {
            SessionKind::Study => Duration::hours(1),
            SessionKind::Review => Duration::minutes(30),
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Study => write!(f, "Study"),
            SessionKind::Review => write!(f, "Review"),
        }
    }
}

/// An allocated study or review session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub kind: SessionKind,
    /// Title of the task this session belongs to.
    pub task_title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Session {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// An ordered sequence of sessions, the unit persisted per user.
///
/// Sessions are kept in creation order (a task's review session follows
/// its study session); callers that need strict chronological order must
/// sort by `start` explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub sessions: Vec<Session>,
}

impl Schedule {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// An empty schedule, what `load` yields for a user with no prior save.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Render the schedule in a human-readable listing.
    pub fn to_display_string(&self) -> String {
        let mut formatted = String::from("Here's your study schedule:\n\n");
        for session in &self.sessions {
            formatted.push_str(&format!("{}: {}\n", session.kind, session.task_title));
            formatted.push_str(&format!(
                "  {} - {}\n\n",
                session.start.format("%Y-%m-%d %H:%M"),
                session.end.format("%Y-%m-%d %H:%M")
            ));
        }
        formatted
    }
}
