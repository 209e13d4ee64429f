//! Lottery orchestrator — starts reels together, enforces the cutoff,
//! presents results exactly once

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rd_board::{InventoryEntry, ItemCatalog, Presenter, StatusKind, ToneEmitter};
use rd_core::{RdError, RdResult};
use rd_reel::{ReelAnimator, ReelPhase, ReelStrip, StepOutcome};
use rd_sched::Scheduler;

use crate::config::SessionConfig;
use crate::session::SpinSession;

/// Owns the shared spin session across all reels.
///
/// Cheap to clone (a handle around shared state); clones are what the
/// scheduled step and cutoff tasks capture. All state lives behind one
/// lock that is only ever taken for the duration of a single scheduled
/// callback — the scheduler guarantees callbacks never preempt each
/// other.
#[derive(Clone)]
pub struct LotteryOrchestrator {
    inner: Arc<Shared>,
}

struct Shared {
    config: SessionConfig,
    presenter: Arc<dyn Presenter>,
    catalog: Arc<dyn ItemCatalog>,
    chime: Arc<dyn ToneEmitter>,
    state: Mutex<DrawState>,
}

struct DrawState {
    reels: Vec<ReelAnimator>,
    session: Option<SpinSession>,
    active: bool,
    rng: StdRng,
}

impl LotteryOrchestrator {
    /// Create a draw machine from its reel strips and collaborators.
    pub fn new(
        strips: Vec<ReelStrip>,
        config: SessionConfig,
        presenter: Arc<dyn Presenter>,
        catalog: Arc<dyn ItemCatalog>,
        chime: Arc<dyn ToneEmitter>,
    ) -> RdResult<Self> {
        if strips.is_empty() {
            return Err(RdError::Session("a draw machine needs at least one reel".into()));
        }

        let reels = strips
            .into_iter()
            .map(|strip| ReelAnimator::new(strip, config.ramp))
            .collect();

        Ok(Self {
            inner: Arc::new(Shared {
                config,
                presenter,
                catalog,
                chime,
                state: Mutex::new(DrawState {
                    reels,
                    session: None,
                    active: false,
                    rng: StdRng::from_os_rng(),
                }),
            }),
        })
    }

    /// Seed the shuffle rng for reproducible draws.
    pub fn seed(&self, seed: u64) {
        self.inner.state.lock().rng = StdRng::seed_from_u64(seed);
    }

    /// Is a session currently running?
    pub fn is_active(&self) -> bool {
        self.inner.state.lock().active
    }

    /// Number of reels in the machine.
    pub fn reel_count(&self) -> usize {
        self.inner.state.lock().reels.len()
    }

    /// Phase of one reel, if it exists.
    pub fn reel_phase(&self, reel_index: usize) -> Option<ReelPhase> {
        self.inner
            .state
            .lock()
            .reels
            .get(reel_index)
            .map(ReelAnimator::phase)
    }

    /// Final results of the last completed session, in reel order.
    pub fn results(&self) -> Option<Vec<String>> {
        let state = self.inner.state.lock();
        let session = state.session.as_ref()?;
        if !session.is_complete() {
            return None;
        }
        Some(session.results().iter().flatten().cloned().collect())
    }

    /// Show the idle hint and trigger label. Called by front-ends before
    /// the first draw.
    pub fn show_idle_hint(&self) {
        self.inner
            .presenter
            .show_status(&self.inner.config.idle_hint, StatusKind::Info);
        self.inner
            .presenter
            .set_trigger_label(&self.inner.config.idle_label);
    }

    /// Start a draw session.
    ///
    /// A start while a session is active is a silent no-op — no queuing,
    /// no error. Otherwise every reel is reshuffled and begins cycling
    /// toward the shared deadline, and the global cutoff is scheduled.
    pub fn start(&self, sched: &mut Scheduler) {
        let mut state = self.inner.state.lock();
        if state.active {
            log::debug!("draw already active, start ignored");
            return;
        }
        state.active = true;

        let now = sched.now_ms();
        let deadline = now + self.inner.config.deadline_ms;
        let reel_count = state.reels.len();
        state.session = Some(SpinSession::new(reel_count, now, deadline));
        log::info!("draw started: {reel_count} reels, stopping at {deadline} ms");

        self.inner.presenter.clear_board(reel_count);
        self.inner
            .presenter
            .show_status(&self.inner.config.in_progress_status, StatusKind::Info);
        self.inner
            .presenter
            .set_trigger_label(&self.inner.config.busy_label);

        {
            let DrawState { reels, rng, .. } = &mut *state;
            for reel in reels.iter_mut() {
                reel.begin(now, deadline, rng);
            }
        }

        for index in 0..reel_count {
            let this = self.clone();
            let handle = sched.schedule_in(0, move |s| this.step_reel(s, index));
            state.reels[index].set_pending(handle);
        }

        // Hard cutoff: guarantees the session terminates even if a reel's
        // own deadline check is delayed by step-timer jitter.
        let this = self.clone();
        sched.schedule_in(self.inner.config.deadline_ms, move |_| this.cutoff());
    }

    /// One animation step of one reel. Self-reschedules while cycling.
    fn step_reel(&self, sched: &mut Scheduler, index: usize) {
        let mut state = self.inner.state.lock();
        let now = sched.now_ms();

        match state.reels[index].step(now) {
            StepOutcome::Frame {
                item,
                next_delay_ms,
            } => {
                self.inner
                    .presenter
                    .render_reel_frame(index as u8, &item, false);
                let this = self.clone();
                let handle = sched.schedule_in(next_delay_ms, move |s| this.step_reel(s, index));
                state.reels[index].set_pending(handle);
            }
            StepOutcome::Settled { item } => {
                self.inner
                    .presenter
                    .render_reel_frame(index as u8, &item, true);
                if let Some(session) = state.session.as_mut() {
                    session.record_result(index, item);
                }
                self.finish_if_complete(&mut state);
            }
            StepOutcome::Skipped => {}
        }
    }

    /// Deadline cutoff: force-stop every reel not yet stopped, then
    /// present if this was the last piece missing.
    fn cutoff(&self) {
        let mut state = self.inner.state.lock();
        if !state.active {
            return;
        }
        log::debug!("deadline reached, force-stopping remaining reels");

        for index in 0..state.reels.len() {
            if state.reels[index].is_stopped() {
                continue;
            }
            if let Some(item) = state.reels[index].force_stop() {
                self.inner
                    .presenter
                    .render_reel_frame(index as u8, &item, true);
                if let Some(session) = state.session.as_mut() {
                    session.record_result(index, item);
                }
            }
        }

        self.finish_if_complete(&mut state);
    }

    /// Present the session's results if every reel has reported and the
    /// session has not been presented yet.
    fn finish_if_complete(&self, state: &mut DrawState) {
        let Some(session) = state.session.as_mut() else {
            return;
        };
        let Some(results) = session.take_presentation() else {
            return;
        };

        let message = format!(
            "{}{}",
            self.inner.config.result_prefix,
            results.join(&self.inner.config.result_separator)
        );
        self.inner
            .presenter
            .show_status(&message, StatusKind::Success);

        for item in &results {
            let entry = InventoryEntry::now(item, self.inner.catalog.resolve_asset(item));
            self.inner.presenter.append_inventory(&entry);
        }

        // Best-effort: a blocked audio backend never aborts presentation.
        if let Err(e) = self.inner.chime.play_completion_chime() {
            log::warn!("completion chime failed: {e}");
        }

        state.active = false;
        self.inner
            .presenter
            .set_trigger_label(&self.inner.config.idle_label);
        log::info!("draw complete: {}", results.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rd_board::catalog::PLACEHOLDER_ASSET;
    use rd_board::{SilentChime, StaticCatalog};

    #[derive(Debug, Clone, PartialEq)]
    enum Seen {
        Status(String, StatusKind),
        Clear(usize),
        Frame(u8, String, bool),
        Inventory(String, String),
        Label(String),
    }

    #[derive(Default)]
    struct RecordingPresenter {
        seen: Mutex<Vec<Seen>>,
    }

    impl RecordingPresenter {
        fn events(&self) -> Vec<Seen> {
            self.seen.lock().clone()
        }
    }

    impl Presenter for RecordingPresenter {
        fn show_status(&self, message: &str, kind: StatusKind) {
            self.seen.lock().push(Seen::Status(message.into(), kind));
        }
        fn clear_board(&self, reel_count: usize) {
            self.seen.lock().push(Seen::Clear(reel_count));
        }
        fn render_reel_frame(&self, reel_index: u8, item_id: &str, is_final: bool) {
            self.seen
                .lock()
                .push(Seen::Frame(reel_index, item_id.into(), is_final));
        }
        fn append_inventory(&self, entry: &InventoryEntry) {
            self.seen.lock().push(Seen::Inventory(
                entry.item_id.clone(),
                entry.asset_url.clone(),
            ));
        }
        fn set_trigger_label(&self, label: &str) {
            self.seen.lock().push(Seen::Label(label.into()));
        }
    }

    struct FailingChime;

    impl ToneEmitter for FailingChime {
        fn play_completion_chime(&self) -> RdResult<()> {
            Err(RdError::Chime("audio backend blocked".into()))
        }
    }

    fn machine(
        strip_sets: &[&[&str]],
        config: SessionConfig,
    ) -> (LotteryOrchestrator, Arc<RecordingPresenter>) {
        let strips = strip_sets
            .iter()
            .enumerate()
            .map(|(i, items)| ReelStrip::new(i as u8, items.to_vec()).unwrap())
            .collect();
        let presenter = Arc::new(RecordingPresenter::default());
        let orch = LotteryOrchestrator::new(
            strips,
            config,
            presenter.clone(),
            Arc::new(StaticCatalog::new()),
            Arc::new(SilentChime),
        )
        .unwrap();
        orch.seed(99);
        (orch, presenter)
    }

    fn short_config() -> SessionConfig {
        SessionConfig {
            deadline_ms: 500,
            ..SessionConfig::standard()
        }
    }

    fn inventory_of(events: &[Seen]) -> Vec<(String, String)> {
        events
            .iter()
            .filter_map(|e| match e {
                Seen::Inventory(item, asset) => Some((item.clone(), asset.clone())),
                _ => None,
            })
            .collect()
    }

    fn success_count(events: &[Seen]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, Seen::Status(_, StatusKind::Success)))
            .count()
    }

    #[test]
    fn test_three_reels_stop_at_deadline() {
        let items: &[&str] = &["A", "B", "C", "D"];
        let (orch, presenter) = machine(&[items, items, items], short_config());
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        assert!(orch.is_active());

        sched.advance_to(500);

        assert!(!orch.is_active());
        for reel in 0..3 {
            assert_eq!(orch.reel_phase(reel), Some(ReelPhase::Stopped));
        }

        let events = presenter.events();
        let inventory = inventory_of(&events);
        assert_eq!(inventory.len(), 3);
        for (item, _) in &inventory {
            assert!(items.contains(&item.as_str()));
        }
        assert_eq!(success_count(&events), 1);
    }

    #[test]
    fn test_inventory_follows_reel_order() {
        // Distinct item sets per reel so the order is observable.
        let (orch, presenter) = machine(
            &[&["A1", "A2"], &["B1", "B2"], &["C1", "C2"]],
            short_config(),
        );
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        sched.advance_to(500);

        let inventory = inventory_of(&presenter.events());
        assert_eq!(inventory.len(), 3);
        assert!(inventory[0].0.starts_with('A'));
        assert!(inventory[1].0.starts_with('B'));
        assert!(inventory[2].0.starts_with('C'));
    }

    #[test]
    fn test_results_match_presented_inventory() {
        let items: &[&str] = &["A", "B", "C", "D"];
        let (orch, presenter) = machine(&[items, items, items], short_config());
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        sched.run_until_idle();

        let results = orch.results().unwrap();
        let inventory = inventory_of(&presenter.events());
        assert_eq!(results.len(), 3);
        let presented: Vec<String> = inventory.iter().map(|(item, _)| item.clone()).collect();
        assert_eq!(results, presented);
    }

    #[test]
    fn test_reentrant_start_is_ignored() {
        let items: &[&str] = &["A", "B", "C"];
        let (orch, presenter) = machine(&[items, items], short_config());
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        sched.advance_to(100);
        orch.start(&mut sched); // mid-session, must be a no-op
        sched.advance_to(600);

        let events = presenter.events();
        let clears = events.iter().filter(|e| matches!(e, Seen::Clear(_))).count();
        assert_eq!(clears, 1);
        assert_eq!(success_count(&events), 1);
        assert_eq!(inventory_of(&events).len(), 2);
    }

    #[test]
    fn test_same_tick_double_start() {
        let items: &[&str] = &["A", "B", "C"];
        let (orch, presenter) = machine(&[items, items], short_config());
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        orch.start(&mut sched);
        sched.run_until_idle();

        let events = presenter.events();
        assert_eq!(events.iter().filter(|e| matches!(e, Seen::Clear(_))).count(), 1);
        assert_eq!(success_count(&events), 1);
    }

    #[test]
    fn test_five_reel_standard_draw_terminates() {
        let items: &[&str] = &["A", "B", "C", "D", "E", "F"];
        let (orch, presenter) = machine(
            &[items, items, items, items, items],
            SessionConfig::standard(),
        );
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        sched.advance_to(5000);

        assert!(!orch.is_active());
        let results = orch.results().unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(inventory_of(&presenter.events()).len(), 5);
    }

    #[test]
    fn test_unknown_item_gets_placeholder_asset() {
        let (orch, presenter) = machine(&[&["ZZZ"]], short_config());
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        sched.run_until_idle();

        let inventory = inventory_of(&presenter.events());
        assert_eq!(inventory, vec![("ZZZ".into(), PLACEHOLDER_ASSET.into())]);
    }

    #[test]
    fn test_chime_failure_does_not_abort_presentation() {
        let items: &[&str] = &["A", "B"];
        let strips = vec![ReelStrip::new(0, items.to_vec()).unwrap()];
        let presenter = Arc::new(RecordingPresenter::default());
        let orch = LotteryOrchestrator::new(
            strips,
            short_config(),
            presenter.clone(),
            Arc::new(StaticCatalog::new()),
            Arc::new(FailingChime),
        )
        .unwrap();
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        sched.run_until_idle();

        let events = presenter.events();
        assert_eq!(success_count(&events), 1);
        assert_eq!(inventory_of(&events).len(), 1);
        // Idle label restored even though the chime failed.
        assert_eq!(events.last(), Some(&Seen::Label("Draw".into())));
        assert!(!orch.is_active());
    }

    #[test]
    fn test_second_session_after_first_completes() {
        let items: &[&str] = &["A", "B", "C"];
        let (orch, presenter) = machine(&[items, items], short_config());
        let mut sched = Scheduler::new();

        orch.start(&mut sched);
        sched.run_until_idle();
        orch.start(&mut sched);
        sched.run_until_idle();

        let events = presenter.events();
        assert_eq!(success_count(&events), 2);
        assert_eq!(inventory_of(&events).len(), 4);
    }

    #[test]
    fn test_empty_machine_is_rejected() {
        let result = LotteryOrchestrator::new(
            Vec::new(),
            SessionConfig::standard(),
            Arc::new(RecordingPresenter::default()),
            Arc::new(StaticCatalog::new()),
            Arc::new(SilentChime),
        );
        assert!(result.is_err());
    }
}
