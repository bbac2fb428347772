//! Greedy allocation of study and review sessions into free slots.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::api::{FreeSlot, Session, SessionKind, Task};

/// Days between a study session and its follow-up review.
pub const REVIEW_OFFSET_DAYS: i64 = 2;

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllocationOutcome {
    /// Sessions in creation order: each task's review session directly
    /// follows its study session. Not globally sorted by time.
    pub sessions: Vec<Session>,
    /// Titles of tasks that got no study session because no free slot
    /// existed on or before their due date. Expected outcome, not an
    /// error.
    pub unscheduled: Vec<String>,
}

impl AllocationOutcome {
    /// Sessions of a given kind for a task title.
    pub fn sessions_for(&self, title: &str, kind: SessionKind) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.task_title == title && s.kind == kind)
            .collect()
    }
}

/// Greedily allocate sessions for `tasks` into `free_slots`.
///
/// Tasks are processed in due-date order (stable: input order breaks
/// ties). Each task takes the earliest slot starting on or before its due
/// date for a study session of at most one hour; a review session of at
/// most 30 minutes is placed on the slot whose start date is exactly two
/// days after the study session, if one exists. Slots shrink from the
/// front as sessions consume them and are removed once exhausted; a slot
/// is never split.
///
/// Tasks with no eligible slot are skipped and recorded in
/// [`AllocationOutcome::unscheduled`]. Single-pass: multiple tasks
/// competing for the same earliest slot resolve in due-date order,
/// first-come-first-served within a tie.
pub fn allocate(tasks: &[Task], free_slots: &mut Vec<FreeSlot>) -> AllocationOutcome {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|task| task.due_date);

    let mut outcome = AllocationOutcome::default();

    for task in ordered {
        let Some(index) = free_slots
            .iter()
            .position(|slot| slot.start.date_naive() <= task.due_date)
        else {
            outcome.unscheduled.push(task.title.clone());
            continue;
        };

        let study = carve_session(free_slots, index, SessionKind::Study, &task.title);
        let review_date = study.start.date_naive() + Duration::days(REVIEW_OFFSET_DAYS);
        outcome.sessions.push(study);

        if let Some(review_index) = slot_on_day(free_slots, review_date) {
            let review = carve_session(free_slots, review_index, SessionKind::Review, &task.title);
            outcome.sessions.push(review);
        }
    }

    outcome
}

/// Take a session from the front of `free_slots[index]`.
///
/// The session is capped at the kind's maximum duration and at the slot's
/// remaining length. If the session consumes the slot entirely the slot is
/// removed, otherwise its start advances to the session end.
fn carve_session(
    free_slots: &mut Vec<FreeSlot>,
    index: usize,
    kind: SessionKind,
    task_title: &str,
) -> Session {
    let slot = free_slots[index];
    let end: DateTime<Utc> = slot.end.min(slot.start + kind.max_duration());

    let session = Session {
        kind,
        task_title: task_title.to_string(),
        start: slot.start,
        end,
    };

    if end == slot.end {
        free_slots.remove(index);
    } else {
        free_slots[index].start = end;
    }

    session
}

/// Index of the first slot starting on exactly `date`, if any.
fn slot_on_day(free_slots: &[FreeSlot], date: NaiveDate) -> Option<usize> {
    free_slots
        .iter()
        .position(|slot| slot.start.date_naive() == date)
}
