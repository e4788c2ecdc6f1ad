use super::event::RunEvent;
use super::observer::Observer;
use super::proc::{ProcessSpec, Tier};
use super::state::{ProcKey, SchedCtx, Ticks};
use crate::policy::TierPolicy;
use crate::report::{self, Report, ReportError};

/// The scheduling engine: owns the clock, the three tier queues, and the
/// completion ledger. Each `Engine` is an independent simulation; nothing
/// is shared between instances, and nothing here is thread-safe.
pub struct Engine<P: TierPolicy> {
    pub ctx: SchedCtx,
    policy: P,
    observer: Observer,
}

impl<P: TierPolicy> Engine<P> {
    pub fn new() -> Self {
        let mut ctx = SchedCtx::new();
        let policy = P::init(&mut ctx);
        Self {
            ctx,
            policy,
            observer: Observer::new(),
        }
    }

    pub fn admit(&mut self, spec: ProcessSpec) -> ProcKey {
        self.ctx.admit(spec)
    }

    /// One scheduling run: the clock restarts at zero, each tier is sorted
    /// by arrival, then executed once in fixed high, medium, low order
    /// against a shared clock. Completions land in the ledger; whatever the
    /// policy leaves unfinished stays queued for the next run.
    pub fn run(&mut self) -> Vec<RunEvent> {
        self.ctx.reset_clock();

        let mut events = Vec::new();
        for tier in Tier::ALL {
            self.ctx.sort_tier_by_arrival(tier);
            events.extend(self.policy.run_tier(&mut self.ctx, tier));
        }

        self.observer.observe(&self.ctx);
        events
    }

    pub fn report(&self) -> Result<Report, ReportError> {
        report::build(self.ctx.ledger())
    }

    pub fn reset(&mut self) {
        self.ctx.reset();
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }
}

impl<P: TierPolicy> Default for Engine<P> {
    fn default() -> Self {
        Self::new()
    }
}
