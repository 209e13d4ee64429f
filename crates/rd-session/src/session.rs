//! Spin session — one start-to-presentation run

use serde::{Deserialize, Serialize};

use rd_core::Millis;

/// One full draw across all reels.
///
/// Results are collected per reel as they stop; `take_presentation`
/// releases them exactly once, which is the guard against presenting a
/// session twice when reels self-stop just before the cutoff fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinSession {
    started_at_ms: Millis,
    deadline_ms: Millis,
    results: Vec<Option<String>>,
    presented: bool,
}

impl SpinSession {
    /// Create a session for `reel_count` reels.
    pub fn new(reel_count: usize, started_at_ms: Millis, deadline_ms: Millis) -> Self {
        Self {
            started_at_ms,
            deadline_ms,
            results: vec![None; reel_count],
            presented: false,
        }
    }

    /// Session start on the scheduler timeline.
    pub fn started_at_ms(&self) -> Millis {
        self.started_at_ms
    }

    /// Absolute deadline on the scheduler timeline.
    pub fn deadline_ms(&self) -> Millis {
        self.deadline_ms
    }

    /// Record one reel's final result. The first result per reel wins;
    /// a repeat (which would indicate a double stop) is ignored.
    pub fn record_result(&mut self, reel_index: usize, item: String) {
        match self.results.get_mut(reel_index) {
            Some(slot @ None) => *slot = Some(item),
            Some(_) => log::warn!("reel {reel_index} reported a result twice"),
            None => log::warn!("result for unknown reel {reel_index}"),
        }
    }

    /// Have all reels reported?
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(Option::is_some)
    }

    /// Has this session already been presented?
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Results collected so far, in reel order.
    pub fn results(&self) -> &[Option<String>] {
        &self.results
    }

    /// Release the ordered results for presentation. Yields `Some` exactly
    /// once, and only when every reel has reported.
    pub fn take_presentation(&mut self) -> Option<Vec<String>> {
        if self.presented || !self.is_complete() {
            return None;
        }
        self.presented = true;
        Some(self.results.iter().flatten().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_session_does_not_present() {
        let mut session = SpinSession::new(3, 0, 500);
        session.record_result(0, "A".into());
        assert!(!session.is_complete());
        assert!(session.take_presentation().is_none());
    }

    #[test]
    fn test_presentation_is_once_only() {
        let mut session = SpinSession::new(2, 0, 500);
        session.record_result(0, "A".into());
        session.record_result(1, "B".into());

        let first = session.take_presentation();
        assert_eq!(first, Some(vec!["A".into(), "B".into()]));
        assert!(session.take_presentation().is_none());
        assert!(session.is_presented());
    }

    #[test]
    fn test_results_keep_reel_order() {
        let mut session = SpinSession::new(3, 0, 500);
        session.record_result(2, "C".into());
        session.record_result(0, "A".into());
        session.record_result(1, "B".into());

        assert_eq!(
            session.take_presentation(),
            Some(vec!["A".into(), "B".into(), "C".into()])
        );
    }

    #[test]
    fn test_duplicate_result_is_ignored() {
        let mut session = SpinSession::new(1, 0, 500);
        session.record_result(0, "A".into());
        session.record_result(0, "B".into());
        assert_eq!(session.take_presentation(), Some(vec!["A".into()]));
    }
}
