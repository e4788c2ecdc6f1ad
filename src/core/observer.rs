use crate::core::proc::Tier;
use crate::core::state::SchedCtx;

#[derive(Debug)]
pub struct Observer {
    runs: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { runs: 0 }
    }

    pub fn observe(&mut self, ctx: &SchedCtx) {
        self.runs += 1;

        for (key, proc) in ctx.live_procs() {
            debug_assert!(
                proc.remaining_burst <= proc.spec.burst_time,
                "pid {} countdown exceeds its burst",
                proc.spec.pid
            );
            let tier = ctx.tier_of(key);
            debug_assert!(
                tier.is_some(),
                "live pid {} has no tier assignment",
                proc.spec.pid
            );
            if let Some(tier) = tier {
                debug_assert!(
                    ctx.queue(tier).contains(&key),
                    "pid {} assigned to {:?} but absent from its queue",
                    proc.spec.pid,
                    tier
                );
            }
        }

        for tier in Tier::ALL {
            for &key in ctx.queue(tier) {
                debug_assert_eq!(
                    ctx.tier_of(key),
                    Some(tier),
                    "queued process in {tier:?} with mismatched tier assignment"
                );
            }
        }
    }
}
