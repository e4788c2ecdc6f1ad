use crate::core::state::Ticks;

pub type Pid = i64;
pub type Priority = i64;

pub const HIGH_PRIORITY_MIN: Priority = 100;
pub const MEDIUM_PRIORITY_MIN: Priority = 50;

pub const QUANTUM_HIGH: Ticks = 3;
pub const QUANTUM_MEDIUM: Ticks = 2;
pub const QUANTUM_LOW: Ticks = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    // Fixed execution order for a scheduling run
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Medium, Tier::Low];

    pub fn for_priority(priority: Priority) -> Tier {
        if priority >= HIGH_PRIORITY_MIN {
            Tier::High
        } else if priority >= MEDIUM_PRIORITY_MIN {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn quantum(self) -> Ticks {
        match self {
            Tier::High => QUANTUM_HIGH,
            Tier::Medium => QUANTUM_MEDIUM,
            Tier::Low => QUANTUM_LOW,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tier::High => 0,
            Tier::Medium => 1,
            Tier::Low => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub priority: Priority,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

#[derive(Debug, Clone)]
pub struct Process {
    pub spec: ProcessSpec,
    pub remaining_burst: Ticks,
}

impl Process {
    pub fn new(spec: ProcessSpec) -> Self {
        let remaining_burst = spec.burst_time;
        Self {
            spec,
            remaining_burst,
        }
    }
}
