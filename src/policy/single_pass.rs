use tracing::debug;

use super::{TierPolicy, grant_slice};
use crate::core::event::RunEvent;
use crate::core::proc::Tier;
use crate::core::state::SchedCtx;

/// One left-to-right sweep over the tier queue. A process whose burst
/// exceeds the quantum is decremented once and left where it sits; the
/// sweep does not come back to it, so it survives the run uncompleted.
pub struct SinglePass;

impl TierPolicy for SinglePass {
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

        sweep(ctx, tier, &mut events);
        events
    }
}

pub(super) fn sweep(ctx: &mut SchedCtx, tier: Tier, events: &mut Vec<RunEvent>) {
    let quantum = tier.quantum();
    let mut idx = 0;

    while idx < ctx.queued(tier) {
        let key = ctx.peek(tier, idx);
        let pid = ctx.proc(key).spec.pid;
        let ran = grant_slice(ctx, key, quantum, events);
        events.push(RunEvent::Sliced {
            pid,
            tier,
            ran,
            clock: ctx.now,
        });

        if ctx.proc(key).remaining_burst <= 0 {
            let completion = ctx.retire(tier, idx);
            events.push(RunEvent::Completed {
                pid: completion.pid,
                tier,
                clock: completion.completion_time,
            });
            // removal shifted the next process into idx
        } else {
            idx += 1;
        }
    }
}
