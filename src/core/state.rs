use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use tracing::debug;

use crate::core::order;
use crate::core::proc::{Pid, Process, ProcessSpec, Tier};

// Signed so that unvalidated negative arrivals and bursts flow through the
// same arithmetic they would in the metrics.
pub type Ticks = i64;

new_key_type! {
    pub struct ProcKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub completion_time: Ticks,
}

/// Append-only record of completed processes, kept in completion order.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Completion>,
}

impl Ledger {
    pub fn append(&mut self, completion: Completion) {
        self.entries.push(completion);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Completion> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Debug)]
pub struct SchedCtx {
    pub now: Ticks,
    procs: SlotMap<ProcKey, Process>,
    queues: [VecDeque<ProcKey>; 3],
    proc_to_tier: FxHashMap<ProcKey, Tier>,
    ledger: Ledger,
}

impl SchedCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            procs: SlotMap::with_key(),
            queues: [VecDeque::new(), VecDeque::new(), VecDeque::new()],
            proc_to_tier: FxHashMap::default(),
            ledger: Ledger::default(),
        }
    }

    /// Places a process at the tail of the queue its priority maps to. The
    /// record is taken as-is: pid uniqueness, arrival, and burst are not
    /// validated.
    pub fn admit(&mut self, spec: ProcessSpec) -> ProcKey {
        let tier = Tier::for_priority(spec.priority);
        debug!(pid = spec.pid, ?tier, "admitted process");

        let key = self.procs.insert(Process::new(spec));
        self.queues[tier.index()].push_back(key);
        self.proc_to_tier.insert(key, tier);
        key
    }

    pub fn sort_tier_by_arrival(&mut self, tier: Tier) {
        order::sort_by_arrival(&mut self.queues[tier.index()], &self.procs);
    }

    pub fn queue(&self, tier: Tier) -> &VecDeque<ProcKey> {
        &self.queues[tier.index()]
    }

    pub fn queued(&self, tier: Tier) -> usize {
        self.queues[tier.index()].len()
    }

    pub fn peek(&self, tier: Tier, idx: usize) -> ProcKey {
        self.queues[tier.index()][idx]
    }

    pub fn proc(&self, key: ProcKey) -> &Process {
        &self.procs[key]
    }

    pub fn proc_mut(&mut self, key: ProcKey) -> &mut Process {
        &mut self.procs[key]
    }

    pub fn tier_of(&self, key: ProcKey) -> Option<Tier> {
        self.proc_to_tier.get(&key).copied()
    }

    pub fn live_procs(&self) -> impl Iterator<Item = (ProcKey, &Process)> {
        self.procs.iter()
    }

    /// Jumps the clock forward to `arrival` if the processor would otherwise
    /// be idle waiting for the process to exist. Returns the time jumped
    /// from, if a jump happened.
    pub fn catch_up(&mut self, arrival: Ticks) -> Option<Ticks> {
        if self.now < arrival {
            let from = self.now;
            self.now = arrival;
            return Some(from);
        }
        None
    }

    pub fn advance(&mut self, delta: Ticks) {
        self.now += delta;
    }

    pub fn reset_clock(&mut self) {
        self.now = 0;
    }

    /// Removes the finished process at queue position `idx`, converts it
    /// into a `Completion` stamped with the current clock, and appends it to
    /// the ledger. The process record is gone afterwards.
    pub fn retire(&mut self, tier: Tier, idx: usize) -> Completion {
        let key = self.queues[tier.index()]
            .remove(idx)
            .expect("retire index out of queue bounds");
        self.proc_to_tier.remove(&key);
        let proc = self
            .procs
            .remove(key)
            .expect("retired process missing from arena");

        let completion = Completion {
            pid: proc.spec.pid,
            arrival_time: proc.spec.arrival_time,
            burst_time: proc.spec.burst_time,
            completion_time: self.now,
        };
        self.ledger.append(completion);
        completion
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Clears queues, ledger, and clock back to initial state.
    pub fn reset(&mut self) {
        self.now = 0;
        self.procs.clear();
        for queue in &mut self.queues {
            queue.clear();
        }
        self.proc_to_tier.clear();
        self.ledger.clear();
    }
}

impl Default for SchedCtx {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(pid: Pid, priority: i64, arrival: Ticks, burst: Ticks) -> ProcessSpec {
        ProcessSpec {
            pid,
            priority,
            arrival_time: arrival,
            burst_time: burst,
        }
    }

    #[test]
    fn admission_appends_to_exactly_one_tier() {
        let mut ctx = SchedCtx::new();
        let high = ctx.admit(spec(1, 150, 0, 4));
        let medium = ctx.admit(spec(2, 70, 0, 4));
        let low = ctx.admit(spec(3, 10, 0, 4));

        assert_eq!(ctx.queue(Tier::High).iter().copied().collect::<Vec<_>>(), vec![high]);
        assert_eq!(ctx.queue(Tier::Medium).iter().copied().collect::<Vec<_>>(), vec![medium]);
        assert_eq!(ctx.queue(Tier::Low).iter().copied().collect::<Vec<_>>(), vec![low]);
        assert_eq!(ctx.tier_of(high), Some(Tier::High));
        assert_eq!(ctx.tier_of(low), Some(Tier::Low));
    }

    #[test]
    fn admission_preserves_arrival_order_at_tail() {
        let mut ctx = SchedCtx::new();
        let a = ctx.admit(spec(1, 120, 5, 1));
        let b = ctx.admit(spec(2, 120, 2, 1));
        assert_eq!(ctx.queue(Tier::High).iter().copied().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn malformed_input_is_admitted_as_is() {
        let mut ctx = SchedCtx::new();
        let key = ctx.admit(spec(1, 120, -3, -5));
        assert_eq!(ctx.proc(key).remaining_burst, -5);
        assert_eq!(ctx.proc(key).spec.arrival_time, -3);
    }

    #[test]
    fn retire_removes_process_and_records_completion() {
        let mut ctx = SchedCtx::new();
        let key = ctx.admit(spec(7, 150, 1, 2));
        ctx.advance(3);

        let completion = ctx.retire(Tier::High, 0);
        assert_eq!(
            completion,
            Completion {
                pid: 7,
                arrival_time: 1,
                burst_time: 2,
                completion_time: 3,
            }
        );
        assert_eq!(ctx.queued(Tier::High), 0);
        assert_eq!(ctx.tier_of(key), None);
        assert_eq!(ctx.ledger().len(), 1);
    }

    #[test]
    fn catch_up_never_moves_the_clock_backwards() {
        let mut ctx = SchedCtx::new();
        ctx.advance(5);
        assert_eq!(ctx.catch_up(3), None);
        assert_eq!(ctx.now, 5);
        assert_eq!(ctx.catch_up(9), Some(5));
        assert_eq!(ctx.now, 9);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut ctx = SchedCtx::new();
        ctx.admit(spec(1, 150, 0, 5));
        ctx.admit(spec(2, 10, 0, 5));
        ctx.advance(4);
        ctx.retire(Tier::High, 0);

        ctx.reset();
        assert_eq!(ctx.now, 0);
        assert!(ctx.ledger().is_empty());
        for tier in Tier::ALL {
            assert_eq!(ctx.queued(tier), 0);
        }
        assert_eq!(ctx.live_procs().count(), 0);
    }
}
