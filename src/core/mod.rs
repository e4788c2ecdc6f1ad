pub mod driver;
pub mod event;
pub mod observer;
pub mod order;
pub mod proc;
pub mod state;

pub use driver::Engine;
pub use event::RunEvent;
pub use proc::{Pid, Priority, Process, ProcessSpec, Tier};
pub use state::{Completion, Ledger, ProcKey, SchedCtx, Ticks};
