//! Interleaved learn/review scheduler
//!
//! New items are introduced one at a time. From the second introduction on,
//! every earlier item that is not yet remembered is reviewed before the next
//! new item is shown. Once every item has been introduced the session keeps
//! sweeping over the unremembered items until the learner has remembered all
//! of them.

use std::collections::VecDeque;

use thiserror::Error;

use super::models::{ProgressSnapshot, SessionMode, StudyItem, Trigger};
use super::remembered::RememberedSet;

/// Number of introduced items after which interleaved review kicks in
const REVIEW_THRESHOLD: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid group: {0}")]
    InvalidGroup(String),

    #[error("No current item to judge in {mode} mode")]
    InvalidTransition { mode: SessionMode },
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Scheduler state for one session, independent of the item contents.
///
/// Transitions never mutate in place: [`SessionState::transition`] returns
/// the successor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    cursor: usize,
    mode: SessionMode,
    review_queue: VecDeque<usize>,
    remembered: RememberedSet,
    /// Cursor to resume at once the current interleaving pass drains
    pending_cursor: Option<usize>,
}

impl SessionState {
    pub fn new(total: usize) -> Self {
        Self {
            cursor: 0,
            mode: SessionMode::Learn,
            review_queue: VecDeque::new(),
            remembered: RememberedSet::new(total),
            pending_cursor: None,
        }
    }

    pub fn total(&self) -> usize {
        self.remembered.capacity()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn review_queue(&self) -> &VecDeque<usize> {
        &self.review_queue
    }

    pub fn pending_cursor(&self) -> Option<usize> {
        self.pending_cursor
    }

    pub fn remembered(&self) -> &RememberedSet {
        &self.remembered
    }

    /// Index of the item due for display, if any
    pub fn current_index(&self) -> Option<usize> {
        match self.mode {
            SessionMode::Learn => (self.cursor < self.total()).then_some(self.cursor),
            SessionMode::Review => self.review_queue.front().copied(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remembered.is_full()
    }

    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            remembered: self.remembered.len(),
            total: self.total(),
            mode: self.mode,
            review_queue_len: self.review_queue.len(),
        }
    }

    /// Compute the state that follows `trigger`
    pub fn transition(&self, trigger: Trigger) -> Result<Self> {
        let remember = match trigger {
            Trigger::Restart => {
                let mut next = self.clone();
                next.reset();
                return Ok(next);
            }
            Trigger::Keep => false,
            Trigger::Remember => true,
        };

        let index = self
            .current_index()
            .ok_or(SessionError::InvalidTransition { mode: self.mode })?;

        let mut next = self.clone();
        match self.mode {
            SessionMode::Learn => next.advance_learn(index, remember),
            SessionMode::Review => next.advance_review(remember),
        }
        Ok(next)
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.mode = SessionMode::Learn;
        self.review_queue.clear();
        self.remembered.clear();
        self.pending_cursor = None;
    }

    fn advance_learn(&mut self, index: usize, remember: bool) {
        if remember {
            self.remembered.insert(index);
        }

        let next = index + 1;
        if next >= self.total() {
            self.start_sweep();
        } else if next >= REVIEW_THRESHOLD {
            let queue: VecDeque<usize> = self.remembered.missing_below(next).collect();
            if queue.is_empty() {
                self.cursor = next;
            } else {
                self.review_queue = queue;
                self.pending_cursor = Some(next);
                self.mode = SessionMode::Review;
            }
        } else {
            self.cursor = next;
        }
    }

    fn advance_review(&mut self, remember: bool) {
        if let Some(head) = self.review_queue.pop_front() {
            if remember {
                self.remembered.insert(head);
            }
        }

        if !self.review_queue.is_empty() {
            return;
        }

        match self.pending_cursor.take() {
            Some(pending) if pending < self.total() => {
                self.mode = SessionMode::Learn;
                self.cursor = pending;
            }
            _ => self.start_sweep(),
        }
    }

    /// Queue every unremembered item, or finish if there are none left
    fn start_sweep(&mut self) {
        let total = self.total();
        self.pending_cursor = None;
        self.review_queue = self.remembered.missing_below(total).collect();

        if self.review_queue.is_empty() {
            self.mode = SessionMode::Learn;
            self.cursor = total;
        } else {
            self.mode = SessionMode::Review;
        }
    }
}

/// A study session over one fixed list of items
#[derive(Debug, Clone)]
pub struct MemorySession {
    items: Vec<StudyItem>,
    state: SessionState,
}

impl MemorySession {
    /// Start a session. Items must be non-empty and indexed by position.
    pub fn new(items: Vec<StudyItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(SessionError::InvalidGroup(
                "group has no items to study".to_string(),
            ));
        }

        if let Some((position, item)) = items
            .iter()
            .enumerate()
            .find(|(position, item)| item.index != *position)
        {
            return Err(SessionError::InvalidGroup(format!(
                "item '{}' at position {} has index {}",
                item.text, position, item.index
            )));
        }

        let state = SessionState::new(items.len());
        Ok(Self { items, state })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The item due for display, or `None` once the session is complete
    pub fn current_item(&self) -> Option<&StudyItem> {
        self.state
            .current_index()
            .and_then(|index| self.items.get(index))
    }

    pub fn is_session_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn progress_snapshot(&self) -> ProgressSnapshot {
        self.state.progress()
    }

    /// Judge the current item as not known yet
    pub fn keep(&mut self) -> Result<Option<&StudyItem>> {
        self.apply(Trigger::Keep)
    }

    /// Judge the current item as known
    pub fn remember(&mut self) -> Result<Option<&StudyItem>> {
        self.apply(Trigger::Remember)
    }

    /// Start over from item 0 with nothing remembered
    pub fn restart(&mut self) -> Result<Option<&StudyItem>> {
        self.apply(Trigger::Restart)
    }

    /// End the session, returning the final progress
    pub fn exit(self) -> ProgressSnapshot {
        let progress = self.state.progress();
        log::debug!(
            "Session exited with {}/{} remembered",
            progress.remembered,
            progress.total
        );
        progress
    }

    fn apply(&mut self, trigger: Trigger) -> Result<Option<&StudyItem>> {
        let next = self.state.transition(trigger)?;
        log::debug!(
            "{:?}: {} -> {} (cursor {}, queue {}, remembered {}/{})",
            trigger,
            self.state.mode(),
            next.mode(),
            next.cursor(),
            next.review_queue().len(),
            next.remembered().len(),
            next.total()
        );
        self.state = next;
        Ok(self.current_item())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<StudyItem> {
        (0..count)
            .map(|i| StudyItem::new(i, format!("word{}", i)))
            .collect()
    }

    fn session(count: usize) -> MemorySession {
        MemorySession::new(items(count)).unwrap()
    }

    fn current(session: &MemorySession) -> Option<usize> {
        session.current_item().map(|item| item.index)
    }

    fn queue(session: &MemorySession) -> Vec<usize> {
        session.state().review_queue().iter().copied().collect()
    }

    #[test]
    fn test_empty_group_rejected() {
        let err = MemorySession::new(Vec::new()).unwrap_err();
        assert!(matches!(err, SessionError::InvalidGroup(_)));
    }

    #[test]
    fn test_misindexed_items_rejected() {
        let mut list = items(3);
        list[2].index = 7;
        let err = MemorySession::new(list).unwrap_err();
        assert!(matches!(err, SessionError::InvalidGroup(_)));
    }

    #[test]
    fn test_initial_state() {
        let s = session(4);
        assert_eq!(current(&s), Some(0));
        assert!(!s.is_session_complete());
        assert_eq!(
            s.progress_snapshot(),
            ProgressSnapshot {
                remembered: 0,
                total: 4,
                mode: SessionMode::Learn,
                review_queue_len: 0,
            }
        );
        assert_eq!(s.state().pending_cursor(), None);
    }

    #[test]
    fn test_remember_only_completes_in_n_calls() {
        for n in 1..=12 {
            let mut s = session(n);
            let mut calls = 0;
            while !s.is_session_complete() {
                s.remember().unwrap();
                calls += 1;
                assert!(calls <= n, "remembering {} items took too long", n);
            }
            assert_eq!(calls, n);
            assert_eq!(s.progress_snapshot().remembered, n);
            assert_eq!(s.current_item(), None);
        }
    }

    #[test]
    fn test_keep_forever_never_completes() {
        for n in 1..=8 {
            let mut s = session(n);
            for _ in 0..(10 * n) {
                let next = s.keep().unwrap();
                assert!(next.is_some());
            }
            assert!(!s.is_session_complete());
            assert_eq!(s.progress_snapshot().remembered, 0);
        }
    }

    #[test]
    fn test_second_item_triggers_review_of_unremembered_only() {
        let mut s = session(5);
        s.remember().unwrap();
        assert_eq!(s.state().cursor(), 1);
        assert_eq!(s.state().mode(), SessionMode::Learn);

        s.keep().unwrap();
        assert_eq!(s.state().mode(), SessionMode::Review);
        assert_eq!(queue(&s), vec![1]);
        assert_eq!(s.state().pending_cursor(), Some(2));
        assert_eq!(current(&s), Some(1));

        // Draining the pass resumes at the pending cursor
        s.keep().unwrap();
        assert_eq!(s.state().mode(), SessionMode::Learn);
        assert_eq!(current(&s), Some(2));
        assert_eq!(s.state().pending_cursor(), None);
    }

    #[test]
    fn test_first_item_never_reviews() {
        let mut s = session(5);
        s.keep().unwrap();
        assert_eq!(s.state().mode(), SessionMode::Learn);
        assert_eq!(current(&s), Some(1));
    }

    #[test]
    fn test_three_item_scenario() {
        let mut s = session(3);

        s.remember().unwrap();
        assert_eq!(s.state().cursor(), 1);
        assert_eq!(s.state().mode(), SessionMode::Learn);

        // Both earlier items are remembered, so no pass is needed
        s.remember().unwrap();
        assert_eq!(s.state().cursor(), 2);
        assert_eq!(s.state().mode(), SessionMode::Learn);

        s.keep().unwrap();
        assert_eq!(s.state().mode(), SessionMode::Review);
        assert_eq!(queue(&s), vec![2]);
        assert_eq!(s.state().pending_cursor(), None);

        let next = s.remember().unwrap();
        assert!(next.is_none());
        assert!(s.is_session_complete());
        assert_eq!(s.state().mode(), SessionMode::Learn);
        assert_eq!(s.state().cursor(), 3);
    }

    #[test]
    fn test_two_item_keep_sweeps_forever() {
        let mut s = session(2);

        s.keep().unwrap();
        assert_eq!(s.state().cursor(), 1);
        assert_eq!(s.state().mode(), SessionMode::Learn);

        s.keep().unwrap();
        assert_eq!(s.state().mode(), SessionMode::Review);
        assert_eq!(queue(&s), vec![0, 1]);
        assert_eq!(s.state().pending_cursor(), None);

        s.keep().unwrap();
        assert_eq!(queue(&s), vec![1]);

        s.keep().unwrap();
        assert_eq!(s.state().mode(), SessionMode::Review);
        assert_eq!(queue(&s), vec![0, 1]);

        s.remember().unwrap();
        assert_eq!(queue(&s), vec![1]);
        let last = s.remember().unwrap();
        assert!(last.is_none());
        assert!(s.is_session_complete());
    }

    #[test]
    fn test_interleaving_pass_covers_all_unremembered_prefix() {
        let mut s = session(6);
        s.keep().unwrap(); // 0
        s.keep().unwrap(); // 1 -> pass [0, 1]
        assert_eq!(queue(&s), vec![0, 1]);
        s.remember().unwrap(); // 0 remembered
        s.keep().unwrap(); // 1 kept, pass drains
        assert_eq!(current(&s), Some(2));

        s.keep().unwrap(); // 2 -> pass over [0, 3) minus {0}
        assert_eq!(queue(&s), vec![1, 2]);
        assert_eq!(s.state().pending_cursor(), Some(3));
    }

    #[test]
    fn test_remember_mid_queue_is_not_requeued() {
        let mut s = session(3);
        s.keep().unwrap();
        s.keep().unwrap();
        assert_eq!(queue(&s), vec![0, 1]);

        s.remember().unwrap(); // 0
        s.keep().unwrap(); // 1
        s.keep().unwrap(); // 2 introduced, sweep
        assert_eq!(s.state().mode(), SessionMode::Review);
        assert_eq!(queue(&s), vec![1, 2]);
    }

    #[test]
    fn test_last_remember_in_sweep_completes() {
        let mut s = session(3);
        s.keep().unwrap();
        s.keep().unwrap();
        s.keep().unwrap();
        s.keep().unwrap(); // pass drains, cursor 2
        s.keep().unwrap(); // sweep [0, 1, 2]
        assert_eq!(queue(&s), vec![0, 1, 2]);

        s.remember().unwrap();
        s.remember().unwrap();
        assert!(!s.is_session_complete());
        assert!(s.remember().unwrap().is_none());
        assert!(s.is_session_complete());
        assert_eq!(s.state().cursor(), 3);
    }

    #[test]
    fn test_judging_after_completion_is_invalid() {
        let mut s = session(1);
        assert!(s.remember().unwrap().is_none());

        let err = s.keep().unwrap_err();
        assert_eq!(
            err,
            SessionError::InvalidTransition {
                mode: SessionMode::Learn
            }
        );
        assert!(s.remember().is_err());
        assert!(s.is_session_complete());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut s = session(4);
        s.remember().unwrap();
        s.keep().unwrap();
        s.keep().unwrap();
        assert_ne!(s.progress_snapshot().remembered, 0);

        let first = s.restart().unwrap().map(|item| item.index);
        assert_eq!(first, Some(0));
        assert_eq!(
            s.progress_snapshot(),
            ProgressSnapshot {
                remembered: 0,
                total: 4,
                mode: SessionMode::Learn,
                review_queue_len: 0,
            }
        );
        assert_eq!(s.state(), &SessionState::new(4));
    }

    #[test]
    fn test_restart_after_completion() {
        let mut s = session(2);
        s.remember().unwrap();
        s.remember().unwrap();
        assert!(s.is_session_complete());

        s.restart().unwrap();
        assert!(!s.is_session_complete());
        assert_eq!(current(&s), Some(0));
    }

    fn assert_fresh(s: &MemorySession) {
        assert_eq!(
            s.progress_snapshot(),
            ProgressSnapshot {
                remembered: 0,
                total: s.state().total(),
                mode: SessionMode::Learn,
                review_queue_len: 0,
            }
        );
        assert_eq!(s.state().pending_cursor(), None);
        assert_eq!(current(s), Some(0));
    }

    #[test]
    fn test_restart_during_interleaving_pass() {
        let mut s = session(5);
        s.remember().unwrap(); // 0
        s.keep().unwrap(); // 1 -> pass [1], resume at 2
        assert_eq!(s.state().mode(), SessionMode::Review);
        assert_eq!(queue(&s), vec![1]);
        assert_eq!(s.state().pending_cursor(), Some(2));

        s.restart().unwrap();
        assert_fresh(&s);
        assert_eq!(s.state(), &SessionState::new(5));
    }

    #[test]
    fn test_restart_during_full_sweep() {
        let mut s = session(3);
        s.keep().unwrap();
        s.keep().unwrap();
        s.keep().unwrap();
        s.keep().unwrap();
        s.keep().unwrap(); // sweep [0, 1, 2]
        s.remember().unwrap();
        assert_eq!(s.state().mode(), SessionMode::Review);
        assert_eq!(queue(&s), vec![1, 2]);
        assert_eq!(s.state().pending_cursor(), None);

        s.restart().unwrap();
        assert_fresh(&s);

        // The restarted session schedules exactly like a new one
        s.keep().unwrap();
        s.keep().unwrap();
        assert_eq!(queue(&s), vec![0, 1]);
    }

    #[test]
    fn test_current_item_is_idempotent() {
        let mut s = session(3);
        s.keep().unwrap();
        s.keep().unwrap();
        let first = s.current_item().cloned();
        let second = s.current_item().cloned();
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn test_transition_is_pure() {
        let state = SessionState::new(3);
        let next = state.transition(Trigger::Remember).unwrap();
        assert_eq!(state, SessionState::new(3));
        assert_eq!(next.cursor(), 1);
        assert_eq!(next.remembered().len(), 1);

        let reset = next.transition(Trigger::Restart).unwrap();
        assert_eq!(reset, SessionState::new(3));
    }

    #[test]
    fn test_exit_reports_progress() {
        let mut s = session(3);
        s.remember().unwrap();
        let progress = s.exit();
        assert_eq!(progress.remembered, 1);
        assert_eq!(progress.total, 3);
    }
}
