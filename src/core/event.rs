use crate::core::proc::{Pid, Tier};
use crate::core::state::Ticks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    // Tier had nothing queued; informational, not an error
    TierIdle {
        tier: Tier,
    },
    // Processor sat idle until the next process arrived
    ClockJumped {
        from: Ticks,
        to: Ticks,
    },
    Sliced {
        pid: Pid,
        tier: Tier,
        ran: Ticks,
        clock: Ticks,
    },
    Completed {
        pid: Pid,
        tier: Tier,
        clock: Ticks,
    },
}
