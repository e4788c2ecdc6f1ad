pub mod cyclic;
pub mod single_pass;

pub use cyclic::Cyclic;
pub use single_pass::SinglePass;

use crate::core::event::RunEvent;
use crate::core::proc::Tier;
use crate::core::state::{ProcKey, SchedCtx, Ticks};

/// How one tier queue is executed within a scheduling run. The engine sorts
/// the tier by arrival before handing it over.
pub trait TierPolicy {
    fn init(ctx: &mut SchedCtx) -> Self
    where
        Self: Sized;

    fn run_tier(&mut self, ctx: &mut SchedCtx, tier: Tier) -> Vec<RunEvent>;
}

/// Grants one slice to a process: waits out any gap before its arrival,
/// then executes `min(remaining_burst, quantum)` units, moving the clock and
/// the countdown in lockstep. Returns the units executed.
pub(crate) fn grant_slice(
    ctx: &mut SchedCtx,
    key: ProcKey,
    quantum: Ticks,
    events: &mut Vec<RunEvent>,
) -> Ticks {
    let arrival = ctx.proc(key).spec.arrival_time;
    if let Some(from) = ctx.catch_up(arrival) {
        events.push(RunEvent::ClockJumped { from, to: arrival });
    }

    let ran = ctx.proc(key).remaining_burst.min(quantum);
    ctx.advance(ran);
    ctx.proc_mut(key).remaining_burst -= ran;
    ran
}
