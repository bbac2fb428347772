//! Unit tests for the planning core.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::time::Duration as StdDuration;

use async_trait::async_trait;

use super::allocator::{allocate, REVIEW_OFFSET_DAYS};
use super::free_slots::FreeSlotCalculator;
use crate::api::{BusyInterval, FreeSlot, PreferredHours, SessionKind, Task, UserId};
use crate::calendar::{BusyPeriodProvider, ProviderResult, StaticBusyProvider};

const TIMEOUT: StdDuration = StdDuration::from_secs(1);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ts(d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, h, min, 0).unwrap()
}

fn day_slot(d: u32) -> FreeSlot {
    FreeSlot::new(ts(d, 9, 0), ts(d, 17, 0))
}

// ==================== FreeSlotCalculator ====================

#[tokio::test]
async fn test_free_slots_empty_calendar_whole_windows() {
    let provider = StaticBusyProvider::new();
    let calc = FreeSlotCalculator::new(&provider, TIMEOUT);
    let user = UserId::new("alice");

    let slots = calc
        .compute_free_slots(&user, date(2024, 3, 10), date(2024, 3, 12), &PreferredHours::new(9, 17))
        .await;

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0], day_slot(10));
    assert_eq!(slots[1], day_slot(11));
    assert_eq!(slots[2], day_slot(12));
}

#[tokio::test]
async fn test_free_slots_sorted_and_non_overlapping() {
    let provider = StaticBusyProvider::new();
    let user = UserId::new("alice");
    provider.set_busy(
        user.clone(),
        vec![
            BusyInterval::new(ts(11, 13, 0), ts(11, 14, 0)),
            BusyInterval::new(ts(10, 10, 0), ts(10, 11, 0)),
            BusyInterval::new(ts(10, 10, 30), ts(10, 12, 0)),
        ],
    );
    let calc = FreeSlotCalculator::new(&provider, TIMEOUT);

    let slots = calc
        .compute_free_slots(&user, date(2024, 3, 10), date(2024, 3, 11), &PreferredHours::new(9, 17))
        .await;

    for pair in slots.windows(2) {
        assert!(pair[0].end <= pair[1].start, "slots must not overlap");
        assert!(pair[0].start < pair[1].start, "slots must be sorted");
    }
    // No slot intersects a busy interval.
    assert_eq!(
        slots,
        vec![
            FreeSlot::new(ts(10, 9, 0), ts(10, 10, 0)),
            FreeSlot::new(ts(10, 12, 0), ts(10, 17, 0)),
            FreeSlot::new(ts(11, 9, 0), ts(11, 13, 0)),
            FreeSlot::new(ts(11, 14, 0), ts(11, 17, 0)),
        ]
    );
}

#[tokio::test]
async fn test_free_slots_fully_busy_day_yields_nothing() {
    let provider = StaticBusyProvider::new();
    let user = UserId::new("alice");
    provider.set_busy(user.clone(), vec![BusyInterval::new(ts(10, 9, 0), ts(10, 17, 0))]);
    let calc = FreeSlotCalculator::new(&provider, TIMEOUT);

    let slots = calc
        .compute_free_slots(&user, date(2024, 3, 10), date(2024, 3, 10), &PreferredHours::new(9, 17))
        .await;
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_free_slots_provider_failure_fails_open() {
    let provider = StaticBusyProvider::new();
    let user = UserId::new("down");
    provider.fail_for(user.clone(), "calendar 503");
    let calc = FreeSlotCalculator::new(&provider, TIMEOUT);

    let slots = calc
        .compute_free_slots(&user, date(2024, 3, 10), date(2024, 3, 10), &PreferredHours::new(9, 17))
        .await;

    // Failed lookup means the day is treated as fully free.
    assert_eq!(slots, vec![day_slot(10)]);
}

/// Provider that answers with a fully-busy window, but only after a delay
/// far past any reasonable lookup timeout.
struct SlowProvider;

#[async_trait]
impl BusyPeriodProvider for SlowProvider {
    async fn busy_periods(
        &self,
        _user: &UserId,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> ProviderResult<Vec<BusyInterval>> {
        tokio::time::sleep(StdDuration::from_secs(60)).await;
        Ok(vec![BusyInterval::new(window_start, window_end)])
    }
}

#[tokio::test(start_paused = true)]
async fn test_free_slots_provider_timeout_fails_open() {
    let provider = SlowProvider;
    let calc = FreeSlotCalculator::new(&provider, TIMEOUT);
    let user = UserId::new("slow");

    let slots = calc
        .compute_free_slots(&user, date(2024, 3, 10), date(2024, 3, 10), &PreferredHours::new(9, 17))
        .await;

    // The provider would have reported the whole day busy; the timed-out
    // lookup is discarded and the day comes back fully free.
    assert_eq!(slots, vec![day_slot(10)]);
}

// ==================== SessionScheduler ====================

#[test]
fn test_allocate_study_then_review_two_days_later() {
    let mut slots = vec![day_slot(10), day_slot(11), day_slot(12)];
    let tasks = vec![Task::new("Math homework", date(2024, 3, 13))];

    let outcome = allocate(&tasks, &mut slots);

    assert_eq!(outcome.sessions.len(), 2);
    let study = &outcome.sessions[0];
    assert_eq!(study.kind, SessionKind::Study);
    assert_eq!(study.start, ts(10, 9, 0));
    assert_eq!(study.end, ts(10, 10, 0));

    let review = &outcome.sessions[1];
    assert_eq!(review.kind, SessionKind::Review);
    assert_eq!(
        review.start.date_naive(),
        study.start.date_naive() + Duration::days(REVIEW_OFFSET_DAYS)
    );
    assert_eq!(review.start, ts(12, 9, 0));
    assert_eq!(review.end, ts(12, 9, 30));
    assert!(outcome.unscheduled.is_empty());
}

#[test]
fn test_allocate_shrinks_slot_instead_of_splitting() {
    let mut slots = vec![day_slot(10)];
    let tasks = vec![Task::new("essay", date(2024, 3, 10))];

    allocate(&tasks, &mut slots);

    // 1h consumed off the front, remainder still available.
    assert_eq!(slots, vec![FreeSlot::new(ts(10, 10, 0), ts(10, 17, 0))]);
}

#[test]
fn test_allocate_removes_exhausted_slot() {
    // 45-minute slot: the study session caps to the slot and consumes it.
    let mut slots = vec![FreeSlot::new(ts(10, 9, 0), ts(10, 9, 45))];
    let tasks = vec![Task::new("quiz prep", date(2024, 3, 10))];

    let outcome = allocate(&tasks, &mut slots);

    assert!(slots.is_empty());
    assert_eq!(outcome.sessions[0].duration(), Duration::minutes(45));
}

#[test]
fn test_allocate_due_date_ordering_is_greedy() {
    let mut slots = vec![day_slot(10), day_slot(11)];
    // Input order deliberately reversed relative to deadlines.
    let tasks = vec![
        Task::new("later", date(2024, 3, 20)),
        Task::new("sooner", date(2024, 3, 11)),
    ];

    let outcome = allocate(&tasks, &mut slots);

    let sooner = outcome.sessions_for("sooner", SessionKind::Study)[0];
    let later = outcome.sessions_for("later", SessionKind::Study)[0];
    assert!(sooner.start <= later.start);
    assert_eq!(sooner.start, ts(10, 9, 0));
    assert_eq!(later.start, ts(10, 10, 0));
}

#[test]
fn test_allocate_stable_order_on_due_date_tie() {
    let mut slots = vec![day_slot(10)];
    let tasks = vec![
        Task::new("first", date(2024, 3, 12)),
        Task::new("second", date(2024, 3, 12)),
    ];

    let outcome = allocate(&tasks, &mut slots);

    let first = outcome.sessions_for("first", SessionKind::Study)[0];
    let second = outcome.sessions_for("second", SessionKind::Study)[0];
    assert!(first.start < second.start);
}

#[test]
fn test_allocate_past_due_task_skipped_silently() {
    // All slots start on the 10th or later; task was due on the 9th.
    let mut slots = vec![day_slot(10), day_slot(11)];
    let tasks = vec![Task::new("overdue", date(2024, 3, 9))];

    let outcome = allocate(&tasks, &mut slots);

    assert!(outcome.sessions.is_empty());
    assert_eq!(outcome.unscheduled, vec!["overdue".to_string()]);
    // Slots untouched.
    assert_eq!(slots.len(), 2);
}

#[test]
fn test_allocate_no_review_without_exact_day_slot() {
    // Only one free day: study lands on the 10th, review day (12th) has
    // no slot, so no review session is created.
    let mut slots = vec![day_slot(10)];
    let tasks = vec![Task::new("solo", date(2024, 3, 10))];

    let outcome = allocate(&tasks, &mut slots);

    assert_eq!(outcome.sessions.len(), 1);
    assert!(outcome.sessions_for("solo", SessionKind::Review).is_empty());
}

#[test]
fn test_allocate_review_requires_exact_day_not_on_or_before() {
    // Slot exists on day 13 but review day is the 12th: exact-day match
    // only, so no review.
    let mut slots = vec![day_slot(10), day_slot(13)];
    let tasks = vec![Task::new("strict", date(2024, 3, 14))];

    let outcome = allocate(&tasks, &mut slots);

    assert_eq!(outcome.sessions_for("strict", SessionKind::Review).len(), 0);
}

#[test]
fn test_allocate_at_most_one_study_and_review_per_task() {
    let mut slots = vec![day_slot(10), day_slot(11), day_slot(12), day_slot(13)];
    let tasks = vec![Task::new("single", date(2024, 3, 14))];

    let outcome = allocate(&tasks, &mut slots);

    assert_eq!(outcome.sessions_for("single", SessionKind::Study).len(), 1);
    assert!(outcome.sessions_for("single", SessionKind::Review).len() <= 1);
}

#[test]
fn test_allocate_sessions_never_overlap() {
    let mut slots = vec![day_slot(10), day_slot(11), day_slot(12)];
    let tasks = vec![
        Task::new("a", date(2024, 3, 12)),
        Task::new("b", date(2024, 3, 12)),
        Task::new("c", date(2024, 3, 13)),
    ];

    let outcome = allocate(&tasks, &mut slots);

    let mut sessions = outcome.sessions.clone();
    sessions.sort_by_key(|s| s.start);
    for pair in sessions.windows(2) {
        assert!(pair[0].end <= pair[1].start, "sessions must not overlap");
    }
}

#[test]
fn test_allocate_duration_caps() {
    let mut slots = vec![day_slot(10), day_slot(11), day_slot(12)];
    let tasks = vec![
        Task::new("a", date(2024, 3, 12)),
        Task::new("b", date(2024, 3, 13)),
    ];

    let outcome = allocate(&tasks, &mut slots);

    for session in &outcome.sessions {
        assert!(session.duration() <= session.kind.max_duration());
    }
}

#[test]
fn test_allocate_deterministic() {
    let tasks = vec![
        Task::new("a", date(2024, 3, 12)),
        Task::new("b", date(2024, 3, 11)),
    ];

    let mut slots_one = vec![day_slot(10), day_slot(11), day_slot(12)];
    let mut slots_two = slots_one.clone();

    let first = allocate(&tasks, &mut slots_one);
    let second = allocate(&tasks, &mut slots_two);

    assert_eq!(first, second);
    assert_eq!(slots_one, slots_two);
}
