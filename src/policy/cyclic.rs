use tracing::debug;

use super::{TierPolicy, single_pass};
use crate::core::event::RunEvent;
use crate::core::proc::Tier;
use crate::core::state::SchedCtx;

/// Textbook round-robin variant: sweeps the tier repeatedly, granting a
/// fresh quantum on every lap, until the queue drains. Every admitted
/// process with a positive burst completes within one run.
pub struct Cyclic;

impl TierPolicy for Cyclic {
    fn init(_ctx: &mut SchedCtx) -> Self {
        Self
    }

    fn run_tier(&mut self, ctx: &mut SchedCtx, tier: Tier) -> Vec<RunEvent> {
        let mut events = Vec::new();
        if ctx.queued(tier) == 0 {
            debug!(?tier, "tier queue empty, nothing to run");
            events.push(RunEvent::TierIdle { tier });
            return events;
        }

        // Each lap shrinks every remaining burst by at least one quantum,
        // so the queue empties in finitely many laps.
        while ctx.queued(tier) > 0 {
            single_pass::sweep(ctx, tier, &mut events);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::proc::{Pid, ProcessSpec};
    use crate::core::state::Ticks;

    fn spec(pid: Pid, priority: i64, arrival: Ticks, burst: Ticks) -> ProcessSpec {
        ProcessSpec {
            pid,
            priority,
            arrival_time: arrival,
            burst_time: burst,
        }
    }

    fn run(ctx: &mut SchedCtx, tier: Tier) -> Vec<RunEvent> {
        ctx.sort_tier_by_arrival(tier);
        Cyclic::init(ctx).run_tier(ctx, tier)
    }

    #[test]
    fn drains_a_long_burst_with_repeated_quanta() {
        let mut ctx = SchedCtx::new();
        ctx.admit(spec(3, 10, 0, 5));

        run(&mut ctx, Tier::Low);

        assert_eq!(ctx.queued(Tier::Low), 0);
        let completions: Vec<_> = ctx.ledger().iter().copied().collect();
        assert_eq!((completions[0].pid, completions[0].completion_time), (3, 5));
    }

    #[test]
    fn interleaves_slices_between_unfinished_processes() {
        let mut ctx = SchedCtx::new();
        ctx.admit(spec(1, 100, 0, 5));
        ctx.admit(spec(2, 100, 0, 4));

        run(&mut ctx, Tier::High);

        // lap 1: pid1 0->3, pid2 3->6; lap 2: pid1 finishes 6->8, pid2 8->9
        let completions: Vec<_> = ctx.ledger().iter().copied().collect();
        assert_eq!((completions[0].pid, completions[0].completion_time), (1, 8));
        assert_eq!((completions[1].pid, completions[1].completion_time), (2, 9));
    }

    #[test]
    fn empty_tier_is_a_no_op() {
        let mut ctx = SchedCtx::new();
        let events = run(&mut ctx, Tier::High);
        assert_eq!(events, vec![RunEvent::TierIdle { tier: Tier::High }]);
    }
}
