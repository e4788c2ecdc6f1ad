use average::{Estimate, Mean};
use thiserror::Error;

use crate::core::proc::Pid;
use crate::core::state::{Completion, Ledger, Ticks};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("no completed processes to report")]
    EmptyLedger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
}

impl From<&Completion> for ProcessMetrics {
    fn from(c: &Completion) -> Self {
        let turnaround = c.completion_time - c.arrival_time;
        let waiting = turnaround - c.burst_time;
        Self {
            pid: c.pid,
            arrival_time: c.arrival_time,
            burst_time: c.burst_time,
            completion_time: c.completion_time,
            turnaround,
            waiting,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ProcessMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

/// Per-process metrics in ledger (completion) order, plus run-wide means.
/// The empty ledger is refused up front; the naive averages would divide
/// by zero.
pub fn build(ledger: &Ledger) -> Result<Report, ReportError> {
    if ledger.is_empty() {
        return Err(ReportError::EmptyLedger);
    }

    let rows: Vec<ProcessMetrics> = ledger.iter().map(ProcessMetrics::from).collect();
    let avg_waiting = mean(rows.iter().map(|r| r.waiting));
    let avg_turnaround = mean(rows.iter().map(|r| r.turnaround));

    Ok(Report {
        rows,
        avg_waiting,
        avg_turnaround,
    })
}

fn mean(iter: impl Iterator<Item = Ticks>) -> f64 {
    iter.map(|t| t as f64).collect::<Mean>().estimate()
}
