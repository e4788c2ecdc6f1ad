use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::core::proc::Process;
use crate::core::state::ProcKey;

/// Reorders a tier queue so arrival times are non-decreasing. Adjacent
/// compare-and-swap passes with a shrinking unsorted suffix; only strictly
/// out-of-order pairs swap, so equal arrivals keep their admission order.
/// Quadratic, which is fine for the batch sizes this model runs.
pub fn sort_by_arrival(queue: &mut VecDeque<ProcKey>, procs: &SlotMap<ProcKey, Process>) {
    let items = queue.make_contiguous();
    let mut unsorted = items.len();

    while unsorted > 1 {
        let mut swapped = false;
        for i in 0..unsorted - 1 {
            if procs[items[i]].spec.arrival_time > procs[items[i + 1]].spec.arrival_time {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        unsorted -= 1;
    }
}
