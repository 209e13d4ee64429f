//! Timer queue and cancellation handles

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::time::{Duration, Instant};

use rd_core::Millis;

/// A scheduled callback. Receives the scheduler so it can reschedule.
pub type Task = Box<dyn FnOnce(&mut Scheduler) + Send>;

/// Cancellation handle for a scheduled task.
///
/// Cancelling is idempotent and only prevents tasks that have not yet
/// run; a task that already executed is unaffected.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    /// Prevent the task from running.
    pub fn cancel(&self) {
        self.cancelled.store(true, AtomicOrdering::Relaxed);
    }

    /// Has this task been cancelled?
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(AtomicOrdering::Relaxed)
    }

    /// Scheduler-assigned task id.
    pub fn id(&self) -> u64 {
        self.id
    }
}

struct Entry {
    due_ms: Millis,
    seq: u64,
    cancelled: Arc<AtomicBool>,
    task: Task,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap pops the earliest due time; ties run in
    // insertion order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Single-threaded cooperative timer scheduler.
///
/// Maintains a virtual clock in milliseconds. A task scheduled for time
/// `t` never runs before every task scheduled for an earlier time, and
/// never before the clock reaches `t`.
pub struct Scheduler {
    queue: BinaryHeap<Entry>,
    now_ms: Millis,
    next_seq: u64,
}

impl Scheduler {
    /// Create a scheduler with the clock at zero.
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> Millis {
        self.now_ms
    }

    /// Number of queued entries, cancelled ones included.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Schedule `task` to run `delay_ms` from now.
    pub fn schedule_in(
        &mut self,
        delay_ms: Millis,
        task: impl FnOnce(&mut Scheduler) + Send + 'static,
    ) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;

        let cancelled = Arc::new(AtomicBool::new(false));
        self.queue.push(Entry {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            cancelled: Arc::clone(&cancelled),
            task: Box::new(task),
        });

        TaskHandle { id: seq, cancelled }
    }

    /// Pop the next runnable entry due at or before `limit_ms`,
    /// discarding cancelled entries along the way.
    fn pop_due(&mut self, limit_ms: Millis) -> Option<Entry> {
        while let Some(head) = self.queue.peek() {
            if head.due_ms > limit_ms {
                return None;
            }
            let entry = self.queue.pop()?;
            if entry.cancelled.load(AtomicOrdering::Relaxed) {
                log::trace!("dropping cancelled task #{}", entry.seq);
                continue;
            }
            return Some(entry);
        }
        None
    }

    /// Run every task due at or before `deadline_ms`, then move the clock
    /// to `deadline_ms`. Tasks scheduled while running are executed too if
    /// they fall within the deadline.
    pub fn advance_to(&mut self, deadline_ms: Millis) {
        while let Some(entry) = self.pop_due(deadline_ms) {
            self.now_ms = self.now_ms.max(entry.due_ms);
            (entry.task)(self);
        }
        self.now_ms = self.now_ms.max(deadline_ms);
    }

    /// Advance the clock by `delta_ms`, running everything due in between.
    pub fn advance_by(&mut self, delta_ms: Millis) {
        self.advance_to(self.now_ms.saturating_add(delta_ms));
    }

    /// Run tasks in due order until the queue is empty, jumping the
    /// virtual clock from one due time to the next.
    pub fn run_until_idle(&mut self) {
        while let Some(entry) = self.pop_due(Millis::MAX) {
            self.now_ms = self.now_ms.max(entry.due_ms);
            (entry.task)(self);
        }
    }

    /// Run tasks in due order on the wall clock, sleeping until each due
    /// time. Returns when the queue is empty.
    pub fn run_realtime(&mut self) {
        let anchor = Instant::now();
        let origin_ms = self.now_ms;

        while let Some(entry) = self.pop_due(Millis::MAX) {
            let target_ms = entry.due_ms.saturating_sub(origin_ms);
            let elapsed_ms = anchor.elapsed().as_millis() as Millis;
            if target_ms > elapsed_ms {
                std::thread::sleep(Duration::from_millis(target_ms - elapsed_ms));
            }
            self.now_ms = self.now_ms.max(entry.due_ms);
            (entry.task)(self);
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
