pub mod core;
pub mod policy;
pub mod report;

pub use crate::core::{Completion, Engine, Process, ProcessSpec, RunEvent, SchedCtx, Tier};
pub use policy::{Cyclic, SinglePass, TierPolicy};
pub use report::{Report, ReportError};
